use serde::{Deserialize, Serialize};

/// Probability that the opponent consults its strategies instead of playing
/// uniformly at random, as a function of the player's win streak.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyCurve {
    pub base: f64,
    pub step: f64,
    pub cap: f64,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        DifficultyCurve {
            base: 0.55,
            step: 0.04,
            cap: 0.95,
        }
    }
}

impl DifficultyCurve {
    pub fn difficulty(&self, streak: u32) -> f64 {
        (self.base + self.step * f64::from(streak)).min(self.cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_points() {
        let curve = DifficultyCurve::default();
        assert!((curve.difficulty(0) - 0.55).abs() < 1e-12);
        assert!((curve.difficulty(5) - 0.75).abs() < 1e-12);
        assert!((curve.difficulty(10) - 0.95).abs() < 1e-12);
        assert_eq!(curve.difficulty(11), 0.95);
    }

    #[test]
    fn bounded_and_monotonic() {
        let curve = DifficultyCurve::default();
        let mut previous = curve.difficulty(0);
        for streak in [0, 1, 2, 7, 13, 50, 1_000, u32::MAX] {
            let d = curve.difficulty(streak);
            assert!((0.55..=0.95).contains(&d), "streak {streak} gave {d}");
            assert!(d >= previous);
            previous = d;
        }
    }
}
