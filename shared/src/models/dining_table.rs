//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    /// Number shown on the table card
    pub number: u32,
    /// Regular seats
    pub capacity: u32,
    pub allow_extra_guests: bool,
    /// Extra seats on top of `capacity`; meaningful only when
    /// `allow_extra_guests` is set
    pub max_extra_guests: u32,
}

impl DiningTable {
    /// Whether the party fits into the regular seats
    pub fn seats(&self, guest_count: u32) -> bool {
        self.capacity >= guest_count
    }

    /// Effective extra-guest allowance (0 when extras are disallowed)
    pub fn extra_guest_limit(&self) -> u32 {
        if self.allow_extra_guests {
            self.max_extra_guests
        } else {
            0
        }
    }
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub number: Option<u32>,
    pub capacity: Option<u32>,
    pub allow_extra_guests: Option<bool>,
    pub max_extra_guests: Option<u32>,
}

impl DiningTableUpdate {
    pub fn apply_to(self, table: &mut DiningTable) {
        if let Some(number) = self.number {
            table.number = number;
        }
        if let Some(capacity) = self.capacity {
            table.capacity = capacity;
        }
        if let Some(allow) = self.allow_extra_guests {
            table.allow_extra_guests = allow;
        }
        if let Some(max) = self.max_extra_guests {
            table.max_extra_guests = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(capacity: u32, allow: bool, max: u32) -> DiningTable {
        DiningTable {
            id: 1,
            number: 1,
            capacity,
            allow_extra_guests: allow,
            max_extra_guests: max,
        }
    }

    #[test]
    fn test_seats() {
        let t = table(4, true, 2);
        assert!(t.seats(4));
        assert!(t.seats(1));
        assert!(!t.seats(5));
    }

    #[test]
    fn test_extra_guest_limit_ignores_max_when_disallowed() {
        assert_eq!(table(4, true, 2).extra_guest_limit(), 2);
        assert_eq!(table(8, false, 3).extra_guest_limit(), 0);
    }

    #[test]
    fn test_update_partial() {
        let mut t = table(2, true, 1);
        DiningTableUpdate {
            capacity: Some(6),
            allow_extra_guests: Some(false),
            ..Default::default()
        }
        .apply_to(&mut t);
        assert_eq!(t.capacity, 6);
        assert!(!t.allow_extra_guests);
        assert_eq!(t.max_extra_guests, 1);
        assert_eq!(t.number, 1);
    }
}
