use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::{Reservation, ReservationStatus};

/// 状态筛选
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Confirmed,
    Cancelled,
}

impl StatusFilter {
    pub fn matches(&self, status: ReservationStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == ReservationStatus::Pending,
            Self::Confirmed => status == ReservationStatus::Confirmed,
            Self::Cancelled => status == ReservationStatus::Cancelled,
        }
    }
}

impl From<ReservationStatus> for StatusFilter {
    fn from(status: ReservationStatus) -> Self {
        match status {
            ReservationStatus::Pending => Self::Pending,
            ReservationStatus::Confirmed => Self::Confirmed,
            ReservationStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse::<ReservationStatus>().map(Self::from),
        }
    }
}

/// 日期筛选
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    #[default]
    All,
    /// date == today
    Today,
    /// date > today
    Upcoming,
}

impl DateFilter {
    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Today => date == today,
            Self::Upcoming => date > today,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            other => Err(AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("Unknown date filter: {}", other),
            )),
        }
    }
}

/// Overview filter: free text AND status AND date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationQuery {
    /// Case-insensitive over name and email, verbatim over phone
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub date: DateFilter,
}

impl ReservationQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_date(mut self, date: DateFilter) -> Self {
        self.date = date;
        self
    }

    fn matches_search(&self, reservation: &Reservation) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        reservation.customer_name.to_lowercase().contains(&needle)
            || reservation.customer_email.to_lowercase().contains(&needle)
            || reservation.customer_phone.contains(&self.search)
    }

    pub fn matches(&self, reservation: &Reservation, today: NaiveDate) -> bool {
        self.matches_search(reservation)
            && self.status.matches(reservation.status)
            && self.date.matches(reservation.date, today)
    }

    /// Matching records in store order
    pub fn apply<'a>(
        &self,
        reservations: &'a [Reservation],
        today: NaiveDate,
    ) -> Vec<&'a Reservation> {
        reservations
            .iter()
            .filter(|r| self.matches(r, today))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{r1_r2, reservation, ymd};

    fn ids(found: &[&Reservation]) -> Vec<i64> {
        found.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_status_pending_example() {
        let store = r1_r2();
        let query = ReservationQuery::default().with_status(StatusFilter::Pending);
        assert_eq!(ids(&query.apply(&store, ymd(2024, 1, 1))), vec![2]);
    }

    #[test]
    fn test_date_today_example() {
        let store = r1_r2();
        let query = ReservationQuery::default().with_date(DateFilter::Today);
        assert_eq!(ids(&query.apply(&store, ymd(2024, 1, 16))), vec![2]);
    }

    #[test]
    fn test_confirmed_only_preserves_order() {
        let store = vec![
            reservation(1, "A", ReservationStatus::Confirmed, ymd(2024, 3, 1)),
            reservation(2, "B", ReservationStatus::Cancelled, ymd(2024, 3, 1)),
            reservation(3, "C", ReservationStatus::Confirmed, ymd(2024, 2, 1)),
            reservation(4, "D", ReservationStatus::Pending, ymd(2024, 3, 1)),
            reservation(5, "E", ReservationStatus::Confirmed, ymd(2024, 1, 1)),
        ];
        let query = ReservationQuery::default().with_status(StatusFilter::Confirmed);
        let found = query.apply(&store, ymd(2024, 1, 1));
        assert_eq!(ids(&found), vec![1, 3, 5]);
        assert!(found.iter().all(|r| r.status == ReservationStatus::Confirmed));
    }

    #[test]
    fn test_today_excludes_tomorrow_and_upcoming_is_strict() {
        let today = ymd(2024, 5, 10);
        let store = vec![
            reservation(1, "A", ReservationStatus::Confirmed, today),
            reservation(2, "B", ReservationStatus::Confirmed, today.succ_opt().unwrap()),
            reservation(3, "C", ReservationStatus::Confirmed, today.pred_opt().unwrap()),
        ];

        let today_only = ReservationQuery::default().with_date(DateFilter::Today);
        assert_eq!(ids(&today_only.apply(&store, today)), vec![1]);

        let upcoming = ReservationQuery::default().with_date(DateFilter::Upcoming);
        assert_eq!(ids(&upcoming.apply(&store, today)), vec![2]);
    }

    #[test]
    fn test_search_fields() {
        let mut store = r1_r2();
        store[1].customer_phone = "+81 90-1111".to_string();
        let today = ymd(2024, 1, 1);

        let by_name = ReservationQuery::default().with_search("eRiK");
        assert_eq!(ids(&by_name.apply(&store, today)), vec![2]);

        let by_email = ReservationQuery::default().with_search("MAX@EXAMPLE");
        assert_eq!(ids(&by_email.apply(&store, today)), vec![1]);

        let by_phone = ReservationQuery::default().with_search("90-11");
        assert_eq!(ids(&by_phone.apply(&store, today)), vec![2]);

        let nothing = ReservationQuery::default().with_search("zzz");
        assert!(nothing.apply(&store, today).is_empty());
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let store = r1_r2();
        let query = ReservationQuery::default()
            .with_search("max")
            .with_status(StatusFilter::Pending);
        assert!(query.apply(&store, ymd(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_filters_from_str() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("cancelled".parse::<StatusFilter>().unwrap(), StatusFilter::Cancelled);
        assert_eq!("upcoming".parse::<DateFilter>().unwrap(), DateFilter::Upcoming);
        assert_eq!(
            "tomorrow".parse::<DateFilter>().unwrap_err().code,
            ErrorCode::InvalidFormat
        );
    }
}
