use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DiningTable, Reservation, ReservationStatus, TimeSlot, Waiter};
use shared::util::next_id;

use super::ReservationStore;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_text_len,
};

pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 8;
pub const DEFAULT_GUESTS: u32 = 2;

/// 预约表单
///
/// Collects the selections for one booking. Catalog entries are cloned in,
/// so the finished [`Reservation`] holds snapshots rather than references.
///
/// Selection rules:
/// - only tables with `capacity >= guest_count` can be chosen, and raising
///   the guest count past the chosen table's capacity drops the table
/// - extra guests are bounded by the table (none when it disallows extras)
/// - unavailable time slots and past dates are refused
#[derive(Debug, Clone)]
pub struct ReservationBuilder {
    date: Option<NaiveDate>,
    time_slot: Option<TimeSlot>,
    table: Option<DiningTable>,
    waiter: Option<Waiter>,
    guest_count: u32,
    extra_guests: u32,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    special_requests: String,
    /// Artificial wait inside `submit`
    delay: Duration,
}

impl Default for ReservationBuilder {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl ReservationBuilder {
    pub fn new(delay: Duration) -> Self {
        Self {
            date: None,
            time_slot: None,
            table: None,
            waiter: None,
            guest_count: DEFAULT_GUESTS,
            extra_guests: 0,
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            special_requests: String::new(),
            delay,
        }
    }

    // ========== Selections ==========

    /// Pick the visit date; only days after `today` can be booked
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> AppResult<()> {
        if date <= today {
            return Err(AppError::new(ErrorCode::DateInPast)
                .with_detail("date", date.to_string())
                .with_detail("today", today.to_string()));
        }
        self.date = Some(date);
        Ok(())
    }

    pub fn select_time_slot(&mut self, slot: &TimeSlot) -> AppResult<()> {
        if !slot.available {
            return Err(AppError::new(ErrorCode::TimeSlotUnavailable)
                .with_detail("time", slot.label()));
        }
        self.time_slot = Some(slot.clone());
        Ok(())
    }

    /// Set the base party size (1..=8)
    pub fn set_guest_count(&mut self, count: u32) -> AppResult<()> {
        if !(MIN_GUESTS..=MAX_GUESTS).contains(&count) {
            return Err(AppError::new(ErrorCode::GuestCountOutOfRange)
                .with_detail("min", MIN_GUESTS)
                .with_detail("max", MAX_GUESTS)
                .with_detail("value", count));
        }
        self.guest_count = count;

        if self.table.as_ref().is_some_and(|t| !t.seats(count)) {
            tracing::debug!(guest_count = count, "Table no longer fits, selection cleared");
            self.table = None;
            self.extra_guests = 0;
        }
        Ok(())
    }

    /// Tables offered for the current guest count
    pub fn available_tables<'a>(&self, tables: &'a [DiningTable]) -> Vec<&'a DiningTable> {
        tables.iter().filter(|t| t.seats(self.guest_count)).collect()
    }

    pub fn select_table(&mut self, table: &DiningTable) -> AppResult<()> {
        if !table.seats(self.guest_count) {
            return Err(AppError::new(ErrorCode::TableTooSmall)
                .with_detail("table", table.number)
                .with_detail("capacity", table.capacity)
                .with_detail("guest_count", self.guest_count));
        }
        self.extra_guests = self.extra_guests.min(table.extra_guest_limit());
        self.table = Some(table.clone());
        Ok(())
    }

    /// Choices for the extra-guest picker; empty without a table or when
    /// the table takes no extras
    pub fn extra_guest_options(&self) -> Vec<u32> {
        match &self.table {
            Some(t) if t.allow_extra_guests => (0..=t.max_extra_guests).collect(),
            _ => Vec::new(),
        }
    }

    pub fn set_extra_guests(&mut self, extra: u32) -> AppResult<()> {
        if extra == 0 {
            self.extra_guests = 0;
            return Ok(());
        }
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| AppError::booking_field_missing("table"))?;
        if !table.allow_extra_guests {
            return Err(AppError::new(ErrorCode::ExtraGuestsNotAllowed)
                .with_detail("table", table.number));
        }
        if extra > table.max_extra_guests {
            return Err(AppError::new(ErrorCode::ExtraGuestsExceeded)
                .with_detail("max", table.max_extra_guests)
                .with_detail("value", extra));
        }
        self.extra_guests = extra;
        Ok(())
    }

    pub fn select_waiter(&mut self, waiter: &Waiter) {
        self.waiter = Some(waiter.clone());
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn set_customer_email(&mut self, email: impl Into<String>) {
        self.customer_email = email.into();
    }

    pub fn set_customer_phone(&mut self, phone: impl Into<String>) {
        self.customer_phone = phone.into();
    }

    pub fn set_special_requests(&mut self, text: impl Into<String>) {
        self.special_requests = text.into();
    }

    // ========== Accessors ==========

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time_slot(&self) -> Option<&TimeSlot> {
        self.time_slot.as_ref()
    }

    pub fn table(&self) -> Option<&DiningTable> {
        self.table.as_ref()
    }

    pub fn waiter(&self) -> Option<&Waiter> {
        self.waiter.as_ref()
    }

    pub fn guest_count(&self) -> u32 {
        self.guest_count
    }

    pub fn extra_guests(&self) -> u32 {
        self.extra_guests
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    // ========== Submit ==========

    /// Check required selections, then contact fields, then lengths
    pub fn validate(&self) -> AppResult<()> {
        if self.date.is_none() {
            return Err(AppError::booking_field_missing("date"));
        }
        if self.time_slot.is_none() {
            return Err(AppError::booking_field_missing("time_slot"));
        }
        if self.table.is_none() {
            return Err(AppError::booking_field_missing("table"));
        }
        if self.waiter.is_none() {
            return Err(AppError::booking_field_missing("waiter"));
        }

        for (field, value) in [
            ("customer_name", &self.customer_name),
            ("customer_email", &self.customer_email),
            ("customer_phone", &self.customer_phone),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::contact_field_missing(field));
            }
        }

        validate_text_len(&self.customer_name, "customer_name", MAX_NAME_LEN)?;
        validate_text_len(&self.customer_email, "customer_email", MAX_EMAIL_LEN)?;
        validate_text_len(&self.customer_phone, "customer_phone", MAX_SHORT_TEXT_LEN)?;
        validate_text_len(&self.special_requests, "special_requests", MAX_NOTE_LEN)?;
        Ok(())
    }

    /// Assemble a confirmed reservation without touching the form
    pub fn build(&self, id: i64, created_at: DateTime<Utc>) -> AppResult<Reservation> {
        self.validate()?;

        let (Some(date), Some(time_slot), Some(table), Some(waiter)) = (
            self.date,
            self.time_slot.clone(),
            self.table.clone(),
            self.waiter.clone(),
        ) else {
            return Err(AppError::internal("Booking selections vanished after validation"));
        };

        Ok(Reservation {
            id,
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            customer_phone: self.customer_phone.clone(),
            date,
            time_slot,
            table,
            guest_count: self.guest_count,
            extra_guests: self.extra_guests,
            waiter,
            special_requests: self.special_requests.clone(),
            status: ReservationStatus::Confirmed,
            created_at,
        })
    }

    /// Validate, wait out the artificial delay, append to `store` and reset
    ///
    /// On error neither the store nor the form changes. Overlapping submits
    /// are not guarded against; each one appends on its own.
    pub async fn submit(&mut self, store: &mut ReservationStore) -> AppResult<Reservation> {
        let reservation = self.build(next_id(), Utc::now())?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        store.append(reservation.clone());
        tracing::info!(
            reservation_id = reservation.id,
            date = %reservation.date,
            table = reservation.table.number,
            guests = reservation.total_guests(),
            "Reservation confirmed"
        );
        self.reset();
        Ok(reservation)
    }

    /// Back to an empty form (keeps the configured delay)
    pub fn reset(&mut self) {
        *self = Self::new(self.delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog, created_at, table, ymd};

    fn today() -> NaiveDate {
        ymd(2024, 1, 15)
    }

    fn filled() -> ReservationBuilder {
        let catalog = catalog();
        let mut builder = ReservationBuilder::default();
        builder.select_date(ymd(2024, 1, 16), today()).unwrap();
        builder.select_time_slot(&catalog.time_slots[0]).unwrap();
        builder.select_table(&catalog.tables[1]).unwrap();
        builder.select_waiter(&catalog.waiters[0]);
        builder.set_customer_name("Max Mustermann");
        builder.set_customer_email("max@example.com");
        builder.set_customer_phone("+49 123 456789");
        builder
    }

    #[test]
    fn test_defaults() {
        let builder = ReservationBuilder::default();
        assert_eq!(builder.guest_count(), DEFAULT_GUESTS);
        assert_eq!(builder.extra_guests(), 0);
        assert!(builder.table().is_none());
        assert!(builder.extra_guest_options().is_empty());
    }

    #[test]
    fn test_missing_selection_reported_in_order() {
        let catalog = catalog();
        let mut builder = ReservationBuilder::default();
        let field = |b: &ReservationBuilder| {
            let err = b.validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::BookingFieldMissing);
            err.detail("field").unwrap().as_str().unwrap().to_string()
        };

        assert_eq!(field(&builder), "date");
        builder.select_date(ymd(2024, 1, 20), today()).unwrap();
        assert_eq!(field(&builder), "time_slot");
        builder.select_time_slot(&catalog.time_slots[1]).unwrap();
        assert_eq!(field(&builder), "table");
        builder.select_table(&catalog.tables[0]).unwrap();
        assert_eq!(field(&builder), "waiter");
        builder.select_waiter(&catalog.waiters[1]);

        let err = builder.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ContactFieldMissing);
    }

    #[test]
    fn test_blank_contact_fields_rejected() {
        for field in ["customer_name", "customer_email", "customer_phone"] {
            let mut builder = filled();
            match field {
                "customer_name" => builder.set_customer_name("   "),
                "customer_email" => builder.set_customer_email(""),
                _ => builder.set_customer_phone(""),
            }
            let err = builder.validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::ContactFieldMissing);
            assert_eq!(err.detail("field").unwrap(), field);
        }
    }

    #[test]
    fn test_overlong_note_rejected() {
        let mut builder = filled();
        builder.set_special_requests("x".repeat(MAX_NOTE_LEN + 1));
        assert_eq!(builder.validate().unwrap_err().code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_build_is_confirmed_snapshot() {
        let builder = filled();
        let reservation = builder.build(42, created_at()).unwrap();
        assert_eq!(reservation.id, 42);
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.table.number, 3);
        assert_eq!(reservation.guest_count, 2);
        assert_eq!(reservation.created_at, created_at());
    }

    #[test]
    fn test_past_date_and_unavailable_slot_refused() {
        let catalog = catalog();
        let mut builder = ReservationBuilder::default();

        let err = builder.select_date(ymd(2024, 1, 14), today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DateInPast);
        assert!(builder.date().is_none());

        // 当天不可预约
        let err = builder.select_date(today(), today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DateInPast);
        assert!(builder.date().is_none());
        builder.select_date(ymd(2024, 1, 16), today()).unwrap();
        assert_eq!(builder.date(), Some(ymd(2024, 1, 16)));

        let err = builder.select_time_slot(&catalog.time_slots[2]).unwrap_err();
        assert_eq!(err.code, ErrorCode::TimeSlotUnavailable);
        assert!(builder.time_slot().is_none());
    }

    #[test]
    fn test_guest_count_bounds() {
        let mut builder = ReservationBuilder::default();
        for bad in [0, 9] {
            let err = builder.set_guest_count(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::GuestCountOutOfRange);
        }
        assert_eq!(builder.guest_count(), DEFAULT_GUESTS);
        builder.set_guest_count(8).unwrap();
        assert_eq!(builder.guest_count(), 8);
    }

    #[test]
    fn test_available_tables_by_capacity() {
        let catalog = catalog();
        let mut builder = ReservationBuilder::default();

        builder.set_guest_count(3).unwrap();
        let numbers: Vec<u32> = builder
            .available_tables(&catalog.tables)
            .iter()
            .map(|t| t.number)
            .collect();
        assert_eq!(numbers, vec![3, 7]);

        let err = builder.select_table(&catalog.tables[0]).unwrap_err();
        assert_eq!(err.code, ErrorCode::TableTooSmall);
    }

    #[test]
    fn test_raising_guests_clears_small_table() {
        let catalog = catalog();
        let mut builder = ReservationBuilder::default();
        builder.select_table(&catalog.tables[0]).unwrap();
        builder.set_extra_guests(1).unwrap();

        builder.set_guest_count(2).unwrap();
        assert!(builder.table().is_some());

        builder.set_guest_count(3).unwrap();
        assert!(builder.table().is_none());
        assert_eq!(builder.extra_guests(), 0);
    }

    #[test]
    fn test_extra_guest_bounds() {
        let catalog = catalog();
        let mut builder = ReservationBuilder::default();

        assert_eq!(
            builder.set_extra_guests(1).unwrap_err().code,
            ErrorCode::BookingFieldMissing
        );

        builder.select_table(&catalog.tables[1]).unwrap();
        assert_eq!(builder.extra_guest_options(), vec![0, 1, 2]);
        builder.set_extra_guests(2).unwrap();
        assert_eq!(
            builder.set_extra_guests(3).unwrap_err().code,
            ErrorCode::ExtraGuestsExceeded
        );

        // switching to a table with a lower bound clamps
        builder.select_table(&catalog.tables[0]).unwrap();
        assert_eq!(builder.extra_guests(), 1);

        builder.select_table(&catalog.tables[2]).unwrap();
        assert_eq!(builder.extra_guests(), 0);
        assert!(builder.extra_guest_options().is_empty());
        assert_eq!(
            builder.set_extra_guests(1).unwrap_err().code,
            ErrorCode::ExtraGuestsNotAllowed
        );
        builder.set_extra_guests(0).unwrap();
    }

    #[tokio::test]
    async fn test_submit_appends_and_resets() {
        let mut store = ReservationStore::new();
        let mut builder = filled();
        builder.set_guest_count(4).unwrap();

        let reservation = builder.submit(&mut store).await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0], reservation);
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.guest_count, 4);

        assert!(builder.date().is_none());
        assert!(builder.table().is_none());
        assert_eq!(builder.guest_count(), DEFAULT_GUESTS);
        assert!(builder.validate().is_err());
    }

    #[tokio::test]
    async fn test_submit_failure_leaves_store_and_form() {
        let mut store = ReservationStore::new();
        let mut builder = filled();
        builder.set_customer_phone("");

        let err = builder.submit(&mut store).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ContactFieldMissing);
        assert!(store.is_empty());
        assert_eq!(builder.table().unwrap().number, 3);
    }

    #[tokio::test]
    async fn test_two_submits_get_distinct_ids() {
        let mut store = ReservationStore::new();
        let mut builder = filled();
        let first = builder.submit(&mut store).await.unwrap();
        let mut builder = filled();
        let second = builder.submit(&mut store).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_delay() {
        let mut store = ReservationStore::new();
        let mut builder = filled();
        builder.delay = Duration::from_millis(1000);

        let started = tokio::time::Instant::now();
        builder.submit(&mut store).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(builder.delay(), Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_huge_extra_guest_total_saturates() {
        let mut store = ReservationStore::new();
        let mut builder = filled();
        builder.select_table(&table(99, 99, 4, u32::MAX)).unwrap();
        builder.set_extra_guests(u32::MAX).unwrap();

        let reservation = builder.submit(&mut store).await.unwrap();
        assert_eq!(reservation.total_guests(), u32::MAX);
        assert_eq!(store.len(), 1);
        assert!(builder.table().is_none());
    }
}
