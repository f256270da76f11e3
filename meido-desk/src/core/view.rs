use serde::{Deserialize, Serialize};

use crate::gate::GateKind;

/// Top-level views of the desk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Booking form, always open
    #[default]
    Reservation,
    /// Reservation list, behind the overview gate
    Overview,
    /// Settings and catalog, behind the admin gate
    Settings,
}

impl View {
    pub const ALL: [View; 3] = [Self::Reservation, Self::Overview, Self::Settings];

    pub fn required_gate(&self) -> Option<GateKind> {
        match self {
            Self::Reservation => None,
            Self::Overview => Some(GateKind::Overview),
            Self::Settings => Some(GateKind::Admin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_gate() {
        assert_eq!(View::Reservation.required_gate(), None);
        assert_eq!(View::Overview.required_gate(), Some(GateKind::Overview));
        assert_eq!(View::Settings.required_gate(), Some(GateKind::Admin));
        assert_eq!(View::default(), View::Reservation);
    }
}
