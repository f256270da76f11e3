//! 时间工具函数 (业务时区)
//!
//! "Today" is always the calendar date in the configured business timezone,
//! never the host clock's local date.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

use super::{AppError, AppResult};
use shared::ErrorCode;

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid date format: {}", date))
    })
}

/// 解析时间字符串 (HH:MM)
pub fn parse_time(time: &str) -> AppResult<NaiveTime> {
    shared::serde_helpers::hhmm::parse(time).ok_or_else(|| {
        AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid time format: {}", time))
    })
}

/// 解析时区名称 (IANA, 例如 "Asia/Tokyo")
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| AppError::invalid_config(format!("Unknown timezone: {}", name)))
}

/// 当前业务日期 (业务时区)
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}
