//! SeaORM entities for the SQL-backed part of the guide's data model.
//!
//! Only seasonal content lives in the database; everything else is kept in the
//! server's in-memory store.

pub mod prelude;

pub mod season;
pub mod seasonal_activity;
