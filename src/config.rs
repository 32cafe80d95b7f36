//! Pairing configuration and validation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunable thresholds for pair generation.
///
/// Passed explicitly into every call; the crate keeps no global
/// configuration, so concurrent callers with different settings cannot
/// interfere with each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingConfig {
    /// Inclusive lower bound on the iwd difference between paired cards.
    /// Pairs closer than this are indistinguishable and make an unfair quiz.
    pub min_iwd_difference: f64,
    /// Inclusive upper bound on the iwd difference. Pairs further apart
    /// than this are trivially guessable.
    pub max_iwd_difference: f64,
    /// Probability of preferring color-overlapping candidates when any
    /// exist. A soft bias, never a hard filter.
    pub color_affinity_weight: f64,
    pub exclude_basic_lands: bool,
    pub exclude_special_guests: bool,
    /// Minimum games played for a card's statistics to count as reliable.
    pub min_games_played: u32,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            min_iwd_difference: 0.01,
            max_iwd_difference: 0.05,
            color_affinity_weight: 0.7,
            exclude_basic_lands: true,
            exclude_special_guests: true,
            min_games_played: 50,
        }
    }
}

impl PairingConfig {
    /// Reject configurations that would produce a nonsensical band or an
    /// invalid affinity probability.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_iwd_difference.is_finite() || !self.max_iwd_difference.is_finite() {
            return Err(ConfigError::NonFiniteBand);
        }
        if self.min_iwd_difference < 0.0 {
            return Err(ConfigError::NegativeBandEdge {
                min: self.min_iwd_difference,
            });
        }
        if self.min_iwd_difference > self.max_iwd_difference {
            return Err(ConfigError::InvertedBand {
                min: self.min_iwd_difference,
                max: self.max_iwd_difference,
            });
        }
        if !(0.0..=1.0).contains(&self.color_affinity_weight) {
            return Err(ConfigError::AffinityOutOfRange(self.color_affinity_weight));
        }
        Ok(())
    }
}
