//! Shared types for the Meido desk
//!
//! Common types used across crates: domain models, the unified error
//! system, change-notification payloads and id/time utilities.

pub mod error;
pub mod message;
pub mod models;
pub mod serde_helpers;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use message::SyncPayload;
