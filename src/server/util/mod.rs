//! Small helpers shared across layers.

pub mod markdown;
pub mod slug;
pub mod time;
