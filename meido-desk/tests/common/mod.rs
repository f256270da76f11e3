#![allow(dead_code)]

use chrono::NaiveTime;
use meido_desk::{AppState, Catalog, Config};
use rust_decimal::Decimal;
use shared::models::{
    Contact, DayHours, DiningTable, Location, OpeningHours, Pricing, RestaurantSettings,
    TimeSlot, Waiter,
};

pub const ADMIN_PIN: &str = "1234";
pub const OVERVIEW_PIN: &str = "5678";

pub fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Half-hourly slots 10:00..=11:30 (11:30 unavailable), tables 1-4, two waiters
pub fn catalog() -> Catalog {
    let mut time_slots: Vec<TimeSlot> = [(1, 10, 0), (2, 10, 30), (3, 11, 0), (4, 11, 30)]
        .into_iter()
        .map(|(id, h, m)| TimeSlot::new(id, hm(h, m)))
        .collect();
    time_slots[3].available = false;

    let tables = [(1, 2, 1), (2, 4, 2), (3, 6, 2), (4, 8, 0)]
        .into_iter()
        .map(|(n, capacity, extra)| DiningTable {
            id: n as i64,
            number: n,
            capacity,
            allow_extra_guests: extra > 0,
            max_extra_guests: extra,
        })
        .collect();

    let waiters = vec![
        Waiter {
            id: 1,
            name: "Sakura-chan".into(),
            avatar: String::new(),
            rating: 4.9,
            specialties: vec!["Kawaii Desserts".into()],
        },
        Waiter {
            id: 2,
            name: "Yuki-chan".into(),
            avatar: String::new(),
            rating: 4.8,
            specialties: vec!["Latte Art".into()],
        },
    ];

    Catalog {
        time_slots,
        tables,
        waiters,
    }
}

pub fn settings() -> RestaurantSettings {
    RestaurantSettings {
        name: "Meido Chi".into(),
        description: String::new(),
        location: Location {
            address: "123 Kawaii Street".into(),
            city: "Shibuya, Tokyo".into(),
            country: "Japan".into(),
        },
        opening_hours: OpeningHours::uniform(DayHours::new(hm(10, 0), hm(21, 0))),
        contact: Contact::default(),
        pricing: Pricing {
            entry_fee: Decimal::from(500),
            currency: "¥".into(),
            photo_session: Decimal::from(300),
        },
    }
}

pub fn state() -> AppState {
    AppState::new(Config::with_overrides(ADMIN_PIN, OVERVIEW_PIN), settings(), catalog()).unwrap()
}

/// Fill every required booking field for tomorrow, table 2, waiter 1
pub fn fill_booking(state: &mut AppState, name: &str) {
    let tomorrow = state.today().succ_opt().unwrap();
    state.select_booking_date(tomorrow).unwrap();
    state.select_booking_time_slot(1).unwrap();
    state.select_booking_table(2).unwrap();
    state.select_booking_waiter(1).unwrap();
    let form = state.booking_mut();
    form.set_customer_name(name);
    form.set_customer_email(format!("{}@example.com", name.to_lowercase()));
    form.set_customer_phone("+81 90 1234 5678");
}
