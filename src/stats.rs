//! Running player statistics, folded up one judged guess at a time.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::GuessJudgment;

/// Per-set tally of guesses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetStats {
    pub total: u32,
    pub correct: u32,
}

impl SetStats {
    /// Accuracy as a percentage; zero guesses count as zero.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total) * 100.0
        }
    }
}

/// The worst wrong guess on record, by iwd gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiggestMiss {
    pub set_code: String,
    pub iwd_difference: f64,
    pub missed_at: DateTime<Utc>,
}

/// Accumulated statistics for one player.
///
/// A pure value type; persistence is the caller's concern. `Default`
/// gives the empty stats a fresh player starts with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_guesses: u32,
    pub correct_guesses: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub set_breakdown: HashMap<String, SetStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biggest_miss: Option<BiggestMiss>,
}

impl UserStats {
    /// Fold one judged guess into the running totals.
    ///
    /// A correct guess extends the streak and the best-streak high-water
    /// mark; a miss resets the streak and may become the new biggest miss.
    pub fn record(&mut self, set_code: &str, judgment: &GuessJudgment, at: DateTime<Utc>) {
        self.total_guesses += 1;

        if judgment.is_correct {
            self.correct_guesses += 1;
            self.current_streak += 1;
            if self.current_streak > self.best_streak {
                self.best_streak = self.current_streak;
            }
        } else {
            self.current_streak = 0;
            let wider_gap = self
                .biggest_miss
                .as_ref()
                .is_none_or(|m| judgment.iwd_difference > m.iwd_difference);
            if wider_gap {
                self.biggest_miss = Some(BiggestMiss {
                    set_code: set_code.to_string(),
                    iwd_difference: judgment.iwd_difference,
                    missed_at: at,
                });
            }
        }

        let entry = self.set_breakdown.entry(set_code.to_string()).or_default();
        entry.total += 1;
        if judgment.is_correct {
            entry.correct += 1;
        }
    }

    /// Overall accuracy as a percentage; zero guesses count as zero.
    pub fn accuracy(&self) -> f64 {
        if self.total_guesses == 0 {
            0.0
        } else {
            f64::from(self.correct_guesses) / f64::from(self.total_guesses) * 100.0
        }
    }
}
