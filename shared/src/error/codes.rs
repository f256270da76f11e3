//! Unified error codes for the Meido desk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Gate errors (PIN entry and PIN change)
//! - 4xxx: Reservation errors
//! - 7xxx: Catalog errors (time slots, tables, waiters)
//! - 8xxx: Settings errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so that a front end can
/// map them to localized messages without parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Gate ====================
    /// Entered PIN does not match the gate secret
    PinIncorrect = 1001,
    /// New PIN is not exactly four digits
    PinInvalidFormat = 1002,
    /// New PIN and its confirmation differ
    PinConfirmationMismatch = 1003,
    /// The view or operation is behind a locked gate
    GateLocked = 1004,

    // ==================== 4xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 4001,
    /// Date, time slot, table or waiter not selected
    BookingFieldMissing = 4002,
    /// Name, email or phone is empty
    ContactFieldMissing = 4003,
    /// Selected time slot is flagged unavailable
    TimeSlotUnavailable = 4004,
    /// Table capacity is below the guest count
    TableTooSmall = 4005,
    /// Table does not take extra guests
    ExtraGuestsNotAllowed = 4006,
    /// Extra guests exceed the table allowance
    ExtraGuestsExceeded = 4007,
    /// Guest count outside the bookable range
    GuestCountOutOfRange = 4008,
    /// Reservation date lies before today
    DateInPast = 4009,

    // ==================== 7xxx: Catalog ====================
    /// Table not found
    TableNotFound = 7001,
    /// Waiter not found
    WaiterNotFound = 7101,
    /// Time slot not found
    TimeSlotNotFound = 7201,

    // ==================== 8xxx: Settings ====================
    /// Opening hours are inconsistent
    InvalidOpeningHours = 8001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration is invalid
    InvalidConfig = 9005,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Check whether this is the success code
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Gate
            ErrorCode::PinIncorrect => "Incorrect PIN",
            ErrorCode::PinInvalidFormat => "PIN must have exactly 4 digits",
            ErrorCode::PinConfirmationMismatch => "PIN confirmation does not match",
            ErrorCode::GateLocked => "This area is locked",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::BookingFieldMissing => "Please fill in all required fields",
            ErrorCode::ContactFieldMissing => "Please provide your contact details",
            ErrorCode::TimeSlotUnavailable => "Time slot is not available",
            ErrorCode::TableTooSmall => "Table is too small for this party",
            ErrorCode::ExtraGuestsNotAllowed => "Table does not allow extra guests",
            ErrorCode::ExtraGuestsExceeded => "Too many extra guests for this table",
            ErrorCode::GuestCountOutOfRange => "Guest count is out of range",
            ErrorCode::DateInPast => "Reservation date is in the past",

            // Catalog
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::WaiterNotFound => "Waiter not found",
            ErrorCode::TimeSlotNotFound => "Time slot not found",

            // Settings
            ErrorCode::InvalidOpeningHours => "Invalid opening hours",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::InvalidConfig => "Invalid configuration",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Gate
            1001 => Ok(ErrorCode::PinIncorrect),
            1002 => Ok(ErrorCode::PinInvalidFormat),
            1003 => Ok(ErrorCode::PinConfirmationMismatch),
            1004 => Ok(ErrorCode::GateLocked),

            // Reservation
            4001 => Ok(ErrorCode::ReservationNotFound),
            4002 => Ok(ErrorCode::BookingFieldMissing),
            4003 => Ok(ErrorCode::ContactFieldMissing),
            4004 => Ok(ErrorCode::TimeSlotUnavailable),
            4005 => Ok(ErrorCode::TableTooSmall),
            4006 => Ok(ErrorCode::ExtraGuestsNotAllowed),
            4007 => Ok(ErrorCode::ExtraGuestsExceeded),
            4008 => Ok(ErrorCode::GuestCountOutOfRange),
            4009 => Ok(ErrorCode::DateInPast),

            // Catalog
            7001 => Ok(ErrorCode::TableNotFound),
            7101 => Ok(ErrorCode::WaiterNotFound),
            7201 => Ok(ErrorCode::TimeSlotNotFound),

            // Settings
            8001 => Ok(ErrorCode::InvalidOpeningHours),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::InvalidConfig),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
