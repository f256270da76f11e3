//! Unified error system for the Meido desk
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! Every error in this system is an input-validation failure that blocks a
//! single state transition; none of them is fatal to the process.
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Gate errors
//! - 4xxx: Reservation errors
//! - 7xxx: Catalog errors
//! - 8xxx: Settings errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::PinIncorrect);
//!
//! // Create an error with details
//! let err = AppError::new(ErrorCode::ContactFieldMissing)
//!     .with_detail("field", "customer_email");
//! assert_eq!(err.code, ErrorCode::ContactFieldMissing);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
