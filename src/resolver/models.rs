//! Outcome resolver data models.

use serde::{Deserialize, Serialize};

/// Win/loss result of a wager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WagerOutcome {
    Win,
    Loss,
}

impl std::fmt::Display for WagerOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WagerOutcome::Win => write!(f, "win"),
            WagerOutcome::Loss => write!(f, "loss"),
        }
    }
}

/// Resolved settlement decision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub result: WagerOutcome,
    /// Payout multiplier applied to the stake; zero exactly on a loss.
    pub multiplier: f64,
}

impl Outcome {
    /// A winning outcome with the given multiplier
    pub fn win(multiplier: f64) -> Self {
        Self {
            result: WagerOutcome::Win,
            multiplier,
        }
    }

    /// A losing outcome (multiplier zero)
    pub fn loss() -> Self {
        Self {
            result: WagerOutcome::Loss,
            multiplier: 0.0,
        }
    }

    pub fn is_win(&self) -> bool {
        self.result == WagerOutcome::Win
    }
}

/// Declared probability model for one game.
///
/// Win probability and the multiplier distribution are explicit
/// configuration, never buried in control flow, so the expected return
/// can be audited: `rtp() = win_probability * mean(multiplier)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoutModel {
    /// Probability of a win, in `[0, 1]`
    pub win_probability: f64,
    /// Lower bound of the uniform multiplier draw on a win
    pub multiplier_min: f64,
    /// Upper bound of the uniform multiplier draw on a win
    pub multiplier_max: f64,
}

impl PayoutModel {
    /// Long-run expected payout fraction of this model.
    pub fn rtp(&self) -> f64 {
        self.win_probability * (self.multiplier_min + self.multiplier_max) / 2.0
    }
}

impl Default for PayoutModel {
    /// The break-even demo model: 40% win chance, multiplier drawn
    /// uniformly from `[1.0, 4.0]` (RTP exactly 1.0). Hosts are expected
    /// to override this per game with an audited house-edge model.
    fn default() -> Self {
        Self {
            win_probability: 0.4,
            multiplier_min: 1.0,
            multiplier_max: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_break_even() {
        let model = PayoutModel::default();
        assert!((model.rtp() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_loss_outcome_has_zero_multiplier() {
        let outcome = Outcome::loss();
        assert!(!outcome.is_win());
        assert_eq!(outcome.multiplier, 0.0);
    }

    #[test]
    fn test_rtp_scales_with_probability() {
        let model = PayoutModel {
            win_probability: 0.2,
            multiplier_min: 2.0,
            multiplier_max: 2.0,
        };
        assert!((model.rtp() - 0.4).abs() < f64::EPSILON);
    }
}
