use std::fmt;

use shared::error::{AppError, AppResult, ErrorCode};

/// Number of digits in every PIN
pub const PIN_LENGTH: usize = 4;

/// A validated PIN: exactly [`PIN_LENGTH`] ASCII digits
#[derive(Clone, PartialEq, Eq)]
pub struct PinCode(String);

impl PinCode {
    pub fn parse(raw: &str) -> AppResult<Self> {
        if raw.len() == PIN_LENGTH && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AppError::new(ErrorCode::PinInvalidFormat))
        }
    }

    /// Plain string equality against the entered value
    pub fn matches(&self, entered: &str) -> bool {
        self.0 == entered
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the digits
impl fmt::Debug for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PinCode(****)")
    }
}

/// Keep digits only and cut to [`PIN_LENGTH`]
pub fn sanitize_pin_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(PIN_LENGTH)
        .collect()
}

/// 数字键盘输入缓冲
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinInput {
    digits: String,
}

impl PinInput {
    /// Append one digit (0-9). Returns `false` when the buffer is full or
    /// the digit is out of range.
    pub fn push_digit(&mut self, digit: u8) -> bool {
        if digit > 9 || self.is_complete() {
            return false;
        }
        self.digits.push(char::from(b'0' + digit));
        true
    }

    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Replace the buffer with free-form text (typed or pasted)
    pub fn set(&mut self, raw: &str) {
        self.digits = sanitize_pin_input(raw);
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Submit is only offered once all digits are in
    pub fn is_complete(&self) -> bool {
        self.digits.len() == PIN_LENGTH
    }
}
