//! Factory methods for creating test data.
//!
//! Each SQL-backed entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let season = factory::season::SeasonFactory::new(&db)
//!     .name("Fall")
//!     .sort_order(3)
//!     .build()
//!     .await?;
//! let activity = factory::create_activity(&db, season.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `season` - Create season entities
//! - `seasonal_activity` - Create activities belonging to a season
//! - `helpers` - Unique id generation and combined setups

pub mod helpers;
pub mod season;
pub mod seasonal_activity;

pub use season::create_season;
pub use seasonal_activity::create_activity;
