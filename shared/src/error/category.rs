//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Gate errors
/// - 4xxx: Reservation errors
/// - 7xxx: Catalog errors
/// - 8xxx: Settings errors
/// - 9xxx: System errors
///
/// Unused ranges fall back to [`ErrorCategory::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Gate errors (1xxx)
    Gate,
    /// Reservation errors (4xxx)
    Reservation,
    /// Catalog errors (7xxx)
    Catalog,
    /// Settings errors (8xxx)
    Settings,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            1000..2000 => Self::Gate,
            4000..5000 => Self::Reservation,
            7000..8000 => Self::Catalog,
            8000..9000 => Self::Settings,
            9000.. => Self::System,
            _ => Self::General,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Gate => "gate",
            Self::Reservation => "reservation",
            Self::Catalog => "catalog",
            Self::Settings => "settings",
            Self::System => "system",
        }
    }

    /// Validation-type categories are caused by user input and can be shown
    /// to the operator as-is.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::System)
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
