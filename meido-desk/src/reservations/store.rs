use shared::models::Reservation;

/// 预约列表 (内存, 保持插入顺序)
///
/// Identifiers are not checked for uniqueness here; `replace` and `remove`
/// act on the first record with a matching id.
#[derive(Debug, Clone, Default)]
pub struct ReservationStore {
    items: Vec<Reservation>,
}

impl From<Vec<Reservation>> for ReservationStore {
    fn from(items: Vec<Reservation>) -> Self {
        Self { items }
    }
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, reservation: Reservation) {
        self.items.push(reservation);
    }

    /// Replace the record with `id` in place. Returns `false` (and changes
    /// nothing) when no such record exists.
    pub fn replace(&mut self, id: i64, reservation: Reservation) -> bool {
        match self.items.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                *slot = reservation;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`, keeping the order of the rest
    pub fn remove(&mut self, id: i64) -> Option<Reservation> {
        let index = self.items.iter().position(|r| r.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: i64) -> Option<&Reservation> {
        self.items.iter().find(|r| r.id == id)
    }

    pub fn list(&self) -> &[Reservation] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
