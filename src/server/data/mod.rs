//! Data access layer.
//!
//! Most collections live in `MemStorage`, a process-lifetime store that is lost on
//! restart. Each collection has a repository borrowing the store, mirroring the
//! shape of the SeaORM-backed `SeasonRepository` used for seasonal content. Repositories
//! return domain models and enforce the uniqueness of slugs, emails and usernames.

pub mod attraction;
pub mod blog;
pub mod cabin;
pub mod destination;
pub mod event;
pub mod mem;
pub mod newsletter;
pub mod season;
pub mod seed;
pub mod user;

#[cfg(test)]
mod test;
