//! 餐厅设置校验
//!
//! Settings are saved as one object. Before a save replaces the live copy
//! the whole object is checked here.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DayHours, RestaurantSettings};

use crate::utils::time::parse_time;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
    validate_required_text, validate_text_len,
};

/// Build one weekday entry from `HH:MM` form values
pub fn parse_day_hours(open: &str, close: &str, closed: bool) -> AppResult<DayHours> {
    Ok(DayHours {
        open: parse_time(open)?,
        close: parse_time(close)?,
        closed,
    })
}

pub fn validate_settings(settings: &RestaurantSettings) -> AppResult<()> {
    validate_required_text(&settings.name, "name", MAX_NAME_LEN)?;
    validate_text_len(&settings.description, "description", MAX_NOTE_LEN)?;

    validate_text_len(&settings.location.address, "address", MAX_NAME_LEN)?;
    validate_text_len(&settings.location.city, "city", MAX_SHORT_TEXT_LEN)?;
    validate_text_len(&settings.location.country, "country", MAX_SHORT_TEXT_LEN)?;

    validate_text_len(&settings.contact.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_text_len(&settings.contact.email, "email", MAX_EMAIL_LEN)?;
    validate_text_len(&settings.contact.website, "website", MAX_URL_LEN)?;

    // closed days keep whatever times they had
    for (weekday, hours) in settings.opening_hours.iter() {
        if !hours.closed && hours.open >= hours.close {
            return Err(AppError::with_message(
                ErrorCode::InvalidOpeningHours,
                format!("{} opens at {} but closes at {}", weekday, hours.open, hours.close),
            )
            .with_detail("day", weekday.to_string()));
        }
    }

    validate_text_len(&settings.pricing.currency, "currency", MAX_SHORT_TEXT_LEN)?;
    for (field, amount) in [
        ("entry_fee", settings.pricing.entry_fee),
        ("photo_session", settings.pricing.photo_session),
    ] {
        if amount < Decimal::ZERO {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("{} must not be negative", field),
            )
            .with_detail("field", field));
        }
    }
    Ok(())
}
