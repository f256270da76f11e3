//! Time Slot Model

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Bookable time-of-day option (时段)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: i64,
    #[serde(with = "crate::serde_helpers::hhmm")]
    pub time: NaiveTime,
    pub available: bool,
}

impl TimeSlot {
    pub fn new(id: i64, time: NaiveTime) -> Self {
        Self {
            id,
            time,
            available: true,
        }
    }

    /// `HH:MM` label
    pub fn label(&self) -> String {
        self.time.format(crate::serde_helpers::hhmm::FORMAT).to_string()
    }
}

/// Update time slot payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSlotUpdate {
    #[serde(default, with = "crate::serde_helpers::hhmm_opt")]
    pub time: Option<NaiveTime>,
    pub available: Option<bool>,
}

impl TimeSlotUpdate {
    pub fn apply_to(self, slot: &mut TimeSlot) {
        if let Some(time) = self.time {
            slot.time = time;
        }
        if let Some(available) = self.available {
            slot.available = available;
        }
    }
}
