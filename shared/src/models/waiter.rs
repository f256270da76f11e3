//! Waiter Model

use serde::{Deserialize, Serialize};

/// Highest rating a waiter can carry
pub const MAX_RATING: f64 = 5.0;

/// Staff profile assignable to a reservation (女仆)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waiter {
    pub id: i64,
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
    /// 0.0 ..= 5.0
    pub rating: f64,
    #[serde(default)]
    pub specialties: Vec<String>,
}

impl Waiter {
    /// Name without the honorific suffix ("Sakura-chan" -> "Sakura")
    pub fn short_name(&self) -> &str {
        self.name.split('-').next().unwrap_or(&self.name)
    }
}

/// Clamp a rating into `0.0..=5.0` (NaN becomes 0)
pub fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    }
}

/// Update waiter payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaiterUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub rating: Option<f64>,
    pub specialties: Option<Vec<String>>,
}

impl WaiterUpdate {
    pub fn apply_to(self, waiter: &mut Waiter) {
        if let Some(name) = self.name {
            waiter.name = name;
        }
        if let Some(avatar) = self.avatar {
            waiter.avatar = avatar;
        }
        if let Some(rating) = self.rating {
            waiter.rating = clamp_rating(rating);
        }
        if let Some(specialties) = self.specialties {
            waiter.specialties = specialties;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waiter(name: &str) -> Waiter {
        Waiter {
            id: 1,
            name: name.to_string(),
            avatar: String::new(),
            rating: 4.5,
            specialties: vec![],
        }
    }

    #[test]
    fn test_short_name() {
        assert_eq!(waiter("Sakura-chan").short_name(), "Sakura");
        assert_eq!(waiter("Yuki").short_name(), "Yuki");
    }

    #[test]
    fn test_rating_clamped_on_update() {
        let mut w = waiter("Momo-chan");
        WaiterUpdate {
            rating: Some(7.5),
            ..Default::default()
        }
        .apply_to(&mut w);
        assert_eq!(w.rating, 5.0);

        WaiterUpdate {
            rating: Some(-1.0),
            ..Default::default()
        }
        .apply_to(&mut w);
        assert_eq!(w.rating, 0.0);
        assert_eq!(clamp_rating(f64::NAN), 0.0);
    }
}
