//! Data models
//!
//! Shared between the desk application and any front end (via serde).
//! All IDs are `i64` snowflake values (see [`crate::util::next_id`]).

pub mod dining_table;
pub mod reservation;
pub mod restaurant_settings;
pub mod time_slot;
pub mod waiter;

// Re-exports
pub use dining_table::*;
pub use reservation::*;
pub use restaurant_settings::*;
pub use time_slot::*;
pub use waiter::*;
