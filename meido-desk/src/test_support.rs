//! Fixtures for unit tests

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use shared::models::{
    Contact, DayHours, DiningTable, Location, OpeningHours, Pricing, Reservation,
    ReservationStatus, RestaurantSettings, TimeSlot, Waiter,
};

use crate::catalog::Catalog;

pub fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap()
}

pub fn slot(id: i64, h: u32, m: u32) -> TimeSlot {
    TimeSlot::new(id, hm(h, m))
}

pub fn table(id: i64, number: u32, capacity: u32, max_extra: u32) -> DiningTable {
    DiningTable {
        id,
        number,
        capacity,
        allow_extra_guests: max_extra > 0,
        max_extra_guests: max_extra,
    }
}

pub fn waiter(id: i64, name: &str) -> Waiter {
    Waiter {
        id,
        name: name.to_string(),
        avatar: String::new(),
        rating: 4.8,
        specialties: vec!["Latte Art".to_string()],
    }
}

/// 3 slots (one unavailable), tables of 2/4/8 seats, 2 waiters
pub fn catalog() -> Catalog {
    let mut closed = slot(3, 20, 30);
    closed.available = false;
    Catalog {
        time_slots: vec![slot(1, 12, 0), slot(2, 12, 30), closed],
        tables: vec![table(1, 1, 2, 1), table(3, 3, 4, 2), table(7, 7, 8, 0)],
        waiters: vec![waiter(1, "Sakura-chan"), waiter(2, "Yuki-chan")],
    }
}

pub fn settings() -> RestaurantSettings {
    RestaurantSettings {
        name: "Meido Chi".to_string(),
        description: "メイド喫茶".to_string(),
        location: Location {
            address: "123 Kawaii Street".to_string(),
            city: "Shibuya, Tokyo".to_string(),
            country: "Japan".to_string(),
        },
        opening_hours: OpeningHours::uniform(DayHours::new(hm(10, 0), hm(21, 0))),
        contact: Contact {
            phone: "+81 3-1234-5678".to_string(),
            email: "info@meidochi.jp".to_string(),
            website: "www.meidochi.jp".to_string(),
        },
        pricing: Pricing {
            entry_fee: Decimal::from(500),
            currency: "¥".to_string(),
            photo_session: Decimal::from(300),
        },
    }
}

pub fn reservation(id: i64, name: &str, status: ReservationStatus, date: NaiveDate) -> Reservation {
    Reservation {
        id,
        customer_name: name.to_string(),
        customer_email: format!("{}@example.com", name.to_lowercase()),
        customer_phone: "+49 123 456789".to_string(),
        date,
        time_slot: slot(1, 12, 0),
        table: table(1, 1, 2, 1),
        guest_count: 2,
        extra_guests: 0,
        waiter: waiter(1, "Sakura-chan"),
        special_requests: String::new(),
        status,
        created_at: created_at(),
    }
}

/// R1 confirmed on 2024-01-15, R2 pending on 2024-01-16
pub fn r1_r2() -> Vec<Reservation> {
    vec![
        reservation(1, "Max", ReservationStatus::Confirmed, ymd(2024, 1, 15)),
        reservation(2, "Erika", ReservationStatus::Pending, ymd(2024, 1, 16)),
    ]
}
