//! Hill Country Guide Test Utils
//!
//! Provides shared testing utilities for the guide's server tests. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite databases, the session
//! store used by admin authentication, and factories for the SQL-backed seasonal content.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_seasons() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_season_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let season = factory::season::create_season(db).await?;
//!     // Perform repository operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
