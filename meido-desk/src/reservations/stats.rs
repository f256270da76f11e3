use serde::{Deserialize, Serialize};
use shared::models::{Reservation, ReservationStatus};

/// 预约统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationStats {
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
    pub total: usize,
}

impl ReservationStats {
    pub fn compute<'a>(reservations: impl IntoIterator<Item = &'a Reservation>) -> Self {
        reservations
            .into_iter()
            .fold(Self::default(), |mut stats, r| {
                match r.status {
                    ReservationStatus::Confirmed => stats.confirmed += 1,
                    ReservationStatus::Pending => stats.pending += 1,
                    ReservationStatus::Cancelled => stats.cancelled += 1,
                }
                stats.total += 1;
                stats
            })
    }
}
