use chrono::NaiveDate;
use chrono_tz::Tz;
use shared::SyncPayload;
use shared::message::{action, resource};
use shared::models::{DiningTable, Reservation, RestaurantSettings, TimeSlot, Waiter};
use tokio::sync::broadcast;

use crate::catalog::{Catalog, validate_tables, validate_waiters};
use crate::core::{Config, View};
use crate::events::EventBus;
use crate::gate::{AccessGate, GateKind, PinCode};
use crate::reservations::{
    ReservationBuilder, ReservationDraft, ReservationQuery, ReservationStats, ReservationStore,
    reservation_not_found,
};
use crate::settings::validate_settings;
use crate::utils::AppResult;
use crate::utils::logger::init_logger_with_file;
use crate::utils::time;

/// 前台应用状态
///
/// The single owner of every collection. Views receive borrows of the data
/// they show and call back into these methods to mutate it.
///
/// | 操作 | 门禁 |
/// |------|------|
/// | booking (`select_booking_*`, `submit_booking`) | - |
/// | `query_reservations`, `edit_reservation`, `save_reservation`, `update_reservation`, `delete_reservation` | overview |
/// | `replace_settings`, `replace_time_slots`, `replace_tables`, `replace_waiters` | admin |
/// | `change_pin` | the gate being changed |
///
/// Every successful mutation is published on the event bus.
#[derive(Debug)]
pub struct AppState {
    config: Config,
    timezone: Tz,
    settings: RestaurantSettings,
    catalog: Catalog,
    reservations: ReservationStore,
    booking: ReservationBuilder,
    /// Last completed booking, shown as a summary
    current_reservation: Option<Reservation>,
    admin_gate: AccessGate,
    overview_gate: AccessGate,
    current_view: View,
    events: EventBus,
}

impl AppState {
    /// 创建应用状态
    ///
    /// Fails with `InvalidConfig` for malformed PINs or timezone, and with a
    /// settings error when `settings` do not validate.
    pub fn new(config: Config, settings: RestaurantSettings, catalog: Catalog) -> AppResult<Self> {
        config.validate()?;
        validate_settings(&settings)?;
        let timezone = config.timezone()?;

        let admin_gate =
            AccessGate::new(GateKind::Admin.label(), PinCode::parse(&config.admin_pin)?);
        let overview_gate =
            AccessGate::new(GateKind::Overview.label(), PinCode::parse(&config.overview_pin)?);
        let booking = ReservationBuilder::new(config.booking_delay());

        tracing::info!(
            restaurant = %settings.name,
            timezone = %timezone,
            time_slots = catalog.time_slots.len(),
            tables = catalog.tables.len(),
            waiters = catalog.waiters.len(),
            "Desk state initialized"
        );

        Ok(Self {
            config,
            timezone,
            settings,
            catalog,
            reservations: ReservationStore::new(),
            booking,
            current_reservation: None,
            admin_gate,
            overview_gate,
            current_view: View::default(),
            events: EventBus::new(),
        })
    }

    /// Load config from the environment, start logging, then build the state
    pub fn from_env(settings: RestaurantSettings, catalog: Catalog) -> AppResult<Self> {
        let config = Config::from_env();
        init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
        Self::new(config, settings, catalog)
    }

    /// Seed the store with existing records
    pub fn with_reservations(mut self, reservations: Vec<Reservation>) -> Self {
        self.reservations = ReservationStore::from(reservations);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn settings(&self) -> &RestaurantSettings {
        &self.settings
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Calendar date in the business timezone
    pub fn today(&self) -> NaiveDate {
        time::today(self.timezone)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SyncPayload> {
        self.events.subscribe()
    }

    // ========== Gates & views ==========

    pub fn gate(&self, kind: GateKind) -> &AccessGate {
        match kind {
            GateKind::Admin => &self.admin_gate,
            GateKind::Overview => &self.overview_gate,
        }
    }

    /// Mutable gate, for driving its keypad
    pub fn gate_mut(&mut self, kind: GateKind) -> &mut AccessGate {
        match kind {
            GateKind::Admin => &mut self.admin_gate,
            GateKind::Overview => &mut self.overview_gate,
        }
    }

    pub fn is_unlocked(&self, kind: GateKind) -> bool {
        self.gate(kind).is_unlocked()
    }

    pub fn unlock(&mut self, kind: GateKind, pin: &str) -> AppResult<()> {
        self.gate_mut(kind).submit(pin)?;
        self.events
            .publish_empty(resource::GATE, action::UNLOCKED, kind.as_str());
        Ok(())
    }

    /// Submit whatever was typed on the gate's keypad
    pub fn unlock_with_input(&mut self, kind: GateKind) -> AppResult<()> {
        self.gate_mut(kind).submit_input()?;
        self.events
            .publish_empty(resource::GATE, action::UNLOCKED, kind.as_str());
        Ok(())
    }

    /// Re-lock a gate. The current view is kept; its guarded calls fail
    /// until the gate is opened again.
    pub fn lock(&mut self, kind: GateKind) {
        self.gate_mut(kind).lock();
        self.events
            .publish_empty(resource::GATE, action::LOCKED, kind.as_str());
    }

    /// Change a gate's PIN; only offered behind that same gate
    pub fn change_pin(
        &mut self,
        kind: GateKind,
        new_pin: &str,
        confirm_pin: &str,
    ) -> AppResult<()> {
        let gate = self.gate_mut(kind);
        gate.ensure_unlocked()?;
        gate.change_code(new_pin, confirm_pin)?;
        self.events
            .publish_empty(resource::GATE, action::PIN_CHANGED, kind.as_str());
        Ok(())
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn open_view(&mut self, view: View) -> AppResult<()> {
        if let Some(kind) = view.required_gate() {
            self.gate(kind).ensure_unlocked()?;
        }
        tracing::debug!(?view, "View opened");
        self.current_view = view;
        Ok(())
    }

    // ========== Booking ==========

    pub fn booking(&self) -> &ReservationBuilder {
        &self.booking
    }

    /// Direct access for guest counts and contact fields
    pub fn booking_mut(&mut self) -> &mut ReservationBuilder {
        &mut self.booking
    }

    pub fn select_booking_date(&mut self, date: NaiveDate) -> AppResult<()> {
        let today = self.today();
        self.booking.select_date(date, today)
    }

    pub fn select_booking_time_slot(&mut self, id: i64) -> AppResult<()> {
        let slot = self.catalog.time_slot(id)?;
        self.booking.select_time_slot(slot)
    }

    pub fn select_booking_table(&mut self, id: i64) -> AppResult<()> {
        let table = self.catalog.table(id)?;
        self.booking.select_table(table)
    }

    pub fn select_booking_waiter(&mut self, id: i64) -> AppResult<()> {
        let waiter = self.catalog.waiter(id)?;
        self.booking.select_waiter(waiter);
        Ok(())
    }

    /// Tables that fit the current guest count
    pub fn available_tables(&self) -> Vec<&DiningTable> {
        self.booking.available_tables(&self.catalog.tables)
    }

    /// Submit the booking form
    ///
    /// On success the new record is appended, remembered as the current
    /// reservation and announced. On failure nothing changes.
    pub async fn submit_booking(&mut self) -> AppResult<Reservation> {
        let reservation = self.booking.submit(&mut self.reservations).await?;
        self.current_reservation = Some(reservation.clone());
        self.events.publish(
            resource::RESERVATION,
            action::CREATED,
            &reservation.id.to_string(),
            Some(&reservation),
        );
        Ok(reservation)
    }

    pub fn current_reservation(&self) -> Option<&Reservation> {
        self.current_reservation.as_ref()
    }

    /// Leave the summary and start another booking
    pub fn new_reservation(&mut self) {
        self.current_reservation = None;
    }

    /// Status counters over all reservations
    pub fn stats(&self) -> ReservationStats {
        ReservationStats::compute(self.reservations.iter())
    }

    // ========== Overview (overview gate) ==========

    pub fn query_reservations(&self, query: &ReservationQuery) -> AppResult<Vec<&Reservation>> {
        self.overview_gate.ensure_unlocked()?;
        let found = query.apply(self.reservations.list(), self.today());
        tracing::debug!(
            total = self.reservations.len(),
            matched = found.len(),
            "Reservations queried"
        );
        Ok(found)
    }

    pub fn edit_reservation(&self, id: i64) -> AppResult<ReservationDraft> {
        self.overview_gate.ensure_unlocked()?;
        ReservationDraft::open(&self.reservations, id)
    }

    pub fn save_reservation(&mut self, draft: ReservationDraft) -> AppResult<Reservation> {
        self.overview_gate.ensure_unlocked()?;
        let saved = draft.save(&mut self.reservations)?;
        self.publish_reservation(action::UPDATED, &saved);
        Ok(saved)
    }

    /// Replace a stored record wholesale
    pub fn update_reservation(&mut self, reservation: Reservation) -> AppResult<()> {
        self.overview_gate.ensure_unlocked()?;
        let id = reservation.id;
        if !self.reservations.replace(id, reservation.clone()) {
            return Err(reservation_not_found(id));
        }
        self.publish_reservation(action::UPDATED, &reservation);
        Ok(())
    }

    pub fn delete_reservation(&mut self, id: i64) -> AppResult<Reservation> {
        self.overview_gate.ensure_unlocked()?;
        let removed = self
            .reservations
            .remove(id)
            .ok_or_else(|| reservation_not_found(id))?;
        tracing::info!(reservation_id = id, "Reservation deleted");
        self.events
            .publish_empty(resource::RESERVATION, action::DELETED, &id.to_string());
        Ok(removed)
    }

    fn publish_reservation(&mut self, change: &str, reservation: &Reservation) {
        tracing::info!(
            reservation_id = reservation.id,
            status = %reservation.status,
            "Reservation updated"
        );
        self.events.publish(
            resource::RESERVATION,
            change,
            &reservation.id.to_string(),
            Some(reservation),
        );
    }

    // ========== Administration (admin gate) ==========

    pub fn replace_settings(&mut self, settings: RestaurantSettings) -> AppResult<()> {
        self.admin_gate.ensure_unlocked()?;
        validate_settings(&settings)?;
        self.settings = settings;
        tracing::info!(restaurant = %self.settings.name, "Settings replaced");
        self.events
            .publish(resource::SETTINGS, action::REPLACED, "all", Some(&self.settings));
        Ok(())
    }

    pub fn replace_time_slots(&mut self, time_slots: Vec<TimeSlot>) -> AppResult<()> {
        self.admin_gate.ensure_unlocked()?;
        self.catalog.time_slots = time_slots;
        tracing::info!(count = self.catalog.time_slots.len(), "Time slots replaced");
        self.events
            .publish(resource::TIME_SLOT, action::REPLACED, "all", Some(&self.catalog.time_slots));
        Ok(())
    }

    pub fn replace_tables(&mut self, tables: Vec<DiningTable>) -> AppResult<()> {
        self.admin_gate.ensure_unlocked()?;
        validate_tables(&tables)?;
        self.catalog.tables = tables;
        tracing::info!(count = self.catalog.tables.len(), "Tables replaced");
        self.events
            .publish(resource::TABLE, action::REPLACED, "all", Some(&self.catalog.tables));
        Ok(())
    }

    pub fn replace_waiters(&mut self, waiters: Vec<Waiter>) -> AppResult<()> {
        self.admin_gate.ensure_unlocked()?;
        validate_waiters(&waiters)?;
        self.catalog.waiters = waiters;
        tracing::info!(count = self.catalog.waiters.len(), "Waiters replaced");
        self.events
            .publish(resource::WAITER, action::REPLACED, "all", Some(&self.catalog.waiters));
        Ok(())
    }
}
