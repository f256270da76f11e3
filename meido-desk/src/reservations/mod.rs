//! 预约模块
//!
//! - [`ReservationBuilder`]: booking form, validates and appends
//! - [`ReservationStore`]: ordered in-memory list
//! - [`ReservationQuery`]: overview filters (text, status, date)
//! - [`ReservationDraft`]: edit dialog, replaces a record wholesale
//! - [`ReservationStats`]: status counters
//!
//! No double-booking, slot exclusivity or table-conflict checks exist.
//! Capacity is only enforced when choosing a table in the builder.

mod builder;
mod editor;
mod query;
mod stats;
mod store;

pub use builder::{DEFAULT_GUESTS, MAX_GUESTS, MIN_GUESTS, ReservationBuilder};
pub use editor::ReservationDraft;
pub(crate) use editor::reservation_not_found;
pub use query::{DateFilter, ReservationQuery, StatusFilter};
pub use stats::ReservationStats;
pub use store::ReservationStore;
