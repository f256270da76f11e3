//! 目录管理 (时段 / 桌台 / 女仆)
//!
//! [`Catalog`] holds the three bookable collections. The admin view edits a
//! cloned catalog as a draft and saves each collection wholesale.
//! Reservations keep their own snapshots, so nothing here rewrites them.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    DiningTable, DiningTableUpdate, MAX_RATING, TimeSlot, TimeSlotUpdate, Waiter, WaiterUpdate,
};
use shared::util::next_id;

use crate::reservations::MAX_GUESTS;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_required_text, validate_text_len,
};

/// Time given to a freshly added slot
pub const NEW_SLOT_HOUR: u32 = 21;
pub const NEW_TABLE_CAPACITY: u32 = 2;
pub const NEW_TABLE_MAX_EXTRA: u32 = 1;
pub const NEW_WAITER_NAME: &str = "Neue Maid-chan";
pub const NEW_WAITER_RATING: f64 = 4.5;
pub const NEW_WAITER_SPECIALTY: &str = "Kawaii Service";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub tables: Vec<DiningTable>,
    #[serde(default)]
    pub waiters: Vec<Waiter>,
}

impl Catalog {
    // ========== Lookup ==========

    pub fn time_slot(&self, id: i64) -> AppResult<&TimeSlot> {
        self.time_slots
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found(ErrorCode::TimeSlotNotFound, id))
    }

    pub fn table(&self, id: i64) -> AppResult<&DiningTable> {
        self.tables
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found(ErrorCode::TableNotFound, id))
    }

    pub fn waiter(&self, id: i64) -> AppResult<&Waiter> {
        self.waiters
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| not_found(ErrorCode::WaiterNotFound, id))
    }

    /// Slots that can currently be booked
    pub fn available_time_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.time_slots.iter().filter(|s| s.available)
    }

    // ========== Time slots ==========

    /// Append an available 21:00 slot
    pub fn add_time_slot(&mut self) -> &TimeSlot {
        let time = NaiveTime::from_hms_opt(NEW_SLOT_HOUR, 0, 0).unwrap_or_default();
        self.time_slots.push(TimeSlot::new(next_id(), time));
        &self.time_slots[self.time_slots.len() - 1]
    }

    pub fn update_time_slot(&mut self, id: i64, update: TimeSlotUpdate) -> AppResult<&TimeSlot> {
        let slot = self
            .time_slots
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found(ErrorCode::TimeSlotNotFound, id))?;
        update.apply_to(slot);
        Ok(slot)
    }

    pub fn remove_time_slot(&mut self, id: i64) -> AppResult<TimeSlot> {
        let index = self
            .time_slots
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found(ErrorCode::TimeSlotNotFound, id))?;
        Ok(self.time_slots.remove(index))
    }

    // ========== Tables ==========

    /// Next table number: one past the highest, 1 for an empty catalog
    pub fn next_table_number(&self) -> u32 {
        self.tables.iter().map(|t| t.number).max().map_or(1, |n| n + 1)
    }

    /// Append a 2-seat table that takes one extra guest
    pub fn add_table(&mut self) -> &DiningTable {
        let table = DiningTable {
            id: next_id(),
            number: self.next_table_number(),
            capacity: NEW_TABLE_CAPACITY,
            allow_extra_guests: true,
            max_extra_guests: NEW_TABLE_MAX_EXTRA,
        };
        self.tables.push(table);
        &self.tables[self.tables.len() - 1]
    }

    pub fn update_table(&mut self, id: i64, update: DiningTableUpdate) -> AppResult<&DiningTable> {
        let table = self
            .tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found(ErrorCode::TableNotFound, id))?;
        update.apply_to(table);
        Ok(table)
    }

    pub fn remove_table(&mut self, id: i64) -> AppResult<DiningTable> {
        let index = self
            .tables
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| not_found(ErrorCode::TableNotFound, id))?;
        Ok(self.tables.remove(index))
    }

    // ========== Waiters ==========

    pub fn add_waiter(&mut self) -> &Waiter {
        let waiter = Waiter {
            id: next_id(),
            name: NEW_WAITER_NAME.to_string(),
            avatar: String::new(),
            rating: NEW_WAITER_RATING,
            specialties: vec![NEW_WAITER_SPECIALTY.to_string()],
        };
        self.waiters.push(waiter);
        &self.waiters[self.waiters.len() - 1]
    }

    pub fn update_waiter(&mut self, id: i64, update: WaiterUpdate) -> AppResult<&Waiter> {
        let waiter = self
            .waiters
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| not_found(ErrorCode::WaiterNotFound, id))?;
        update.apply_to(waiter);
        Ok(waiter)
    }

    pub fn remove_waiter(&mut self, id: i64) -> AppResult<Waiter> {
        let index = self
            .waiters
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| not_found(ErrorCode::WaiterNotFound, id))?;
        Ok(self.waiters.remove(index))
    }
}

/// Split a comma-separated specialty list, dropping blanks
pub fn parse_specialties(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Check a waiter collection before it replaces the live one
pub fn validate_waiters(waiters: &[Waiter]) -> AppResult<()> {
    for waiter in waiters {
        validate_required_text(&waiter.name, "name", MAX_NAME_LEN)?;
        validate_text_len(&waiter.avatar, "avatar", MAX_URL_LEN)?;
        for specialty in &waiter.specialties {
            validate_text_len(specialty, "specialties", MAX_SHORT_TEXT_LEN)?;
        }
        // NaN 也不在范围内
        if !(0.0..=MAX_RATING).contains(&waiter.rating) {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("Rating of {} must be between 0 and {}", waiter.name, MAX_RATING),
            )
            .with_detail("field", "rating")
            .with_detail("waiter", waiter.id));
        }
    }
    Ok(())
}

/// Check a table collection
///
/// Every table seats at least one guest and takes at most `MAX_GUESTS`
/// extra guests.
pub fn validate_tables(tables: &[DiningTable]) -> AppResult<()> {
    for table in tables {
        if table.capacity == 0 {
            return Err(table_out_of_range(
                table,
                "capacity",
                format!("Table {} has no seats", table.number),
            ));
        }
        if table.max_extra_guests > MAX_GUESTS {
            return Err(table_out_of_range(
                table,
                "max_extra_guests",
                format!("Table {} allows more than {} extra guests", table.number, MAX_GUESTS),
            ));
        }
    }
    Ok(())
}

fn table_out_of_range(table: &DiningTable, field: &str, message: String) -> AppError {
    AppError::with_message(ErrorCode::ValueOutOfRange, message)
        .with_detail("field", field)
        .with_detail("table", table.number)
}

fn not_found(code: ErrorCode, id: i64) -> AppError {
    AppError::new(code).with_detail("id", id)
}
