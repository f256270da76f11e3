//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use super::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Names: customer, waiter, restaurant
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, special requests
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, currency, city
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / avatar paths
pub const MAX_URL_LEN: usize = 2048;

/// Validate that a required string is non-blank and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(
            AppError::validation(format!("{field} must not be empty")).with_detail("field", field)
        );
    }
    validate_text_len(value, field, max_len)
}

/// Validate that a string is within the length limit (empty is fine).
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Sakura", "name", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.detail("field").unwrap(), "name");

        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_text_len_counts_chars_not_bytes() {
        // 3 chars, 9 bytes
        assert!(validate_text_len("メイド", "name", 3).is_ok());
        assert!(validate_text_len("メイド喫茶", "name", 3).is_err());
        assert!(validate_text_len("", "notes", 0).is_ok());
    }
}
