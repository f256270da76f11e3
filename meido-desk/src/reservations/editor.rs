use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Reservation, ReservationStatus};

use super::ReservationStore;
use crate::catalog::Catalog;
use crate::utils::time::parse_date;

/// 编辑草稿
///
/// A detached copy of one stored reservation. Nothing reaches the store
/// until [`ReservationDraft::save`], which replaces the record wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDraft {
    reservation: Reservation,
}

impl ReservationDraft {
    pub fn open(store: &ReservationStore, id: i64) -> AppResult<Self> {
        let reservation = store
            .get(id)
            .cloned()
            .ok_or_else(|| reservation_not_found(id))?;
        Ok(Self { reservation })
    }

    /// Wrap an already-cloned record
    pub fn from_reservation(reservation: Reservation) -> Self {
        Self { reservation }
    }

    pub fn id(&self) -> i64 {
        self.reservation.id
    }

    pub fn reservation(&self) -> &Reservation {
        &self.reservation
    }

    pub fn into_reservation(self) -> Reservation {
        self.reservation
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.reservation.customer_name = name.into();
    }

    pub fn set_customer_email(&mut self, email: impl Into<String>) {
        self.reservation.customer_email = email.into();
    }

    pub fn set_customer_phone(&mut self, phone: impl Into<String>) {
        self.reservation.customer_phone = phone.into();
    }

    pub fn set_status(&mut self, status: ReservationStatus) {
        self.reservation.status = status;
    }

    /// Staff may move a booking to any date, past ones included
    pub fn set_date(&mut self, date: NaiveDate) {
        self.reservation.date = date;
    }

    /// Date typed as `YYYY-MM-DD`
    pub fn set_date_str(&mut self, raw: &str) -> AppResult<()> {
        self.reservation.date = parse_date(raw)?;
        Ok(())
    }

    pub fn set_special_requests(&mut self, text: impl Into<String>) {
        self.reservation.special_requests = text.into();
    }

    /// Take a fresh snapshot of the catalog slot with `id`
    pub fn select_time_slot(&mut self, catalog: &Catalog, id: i64) -> AppResult<()> {
        self.reservation.time_slot = catalog.time_slot(id)?.clone();
        Ok(())
    }

    pub fn select_table(&mut self, catalog: &Catalog, id: i64) -> AppResult<()> {
        self.reservation.table = catalog.table(id)?.clone();
        Ok(())
    }

    pub fn select_waiter(&mut self, catalog: &Catalog, id: i64) -> AppResult<()> {
        self.reservation.waiter = catalog.waiter(id)?.clone();
        Ok(())
    }

    /// Write the draft back over the stored record
    pub fn save(self, store: &mut ReservationStore) -> AppResult<Reservation> {
        let id = self.reservation.id;
        if !store.replace(id, self.reservation.clone()) {
            return Err(reservation_not_found(id));
        }
        Ok(self.reservation)
    }
}

pub(crate) fn reservation_not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::ReservationNotFound).with_detail("id", id)
}
