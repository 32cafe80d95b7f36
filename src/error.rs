//! Error types for iwd-trainer-core.

use thiserror::Error;

/// Errors from validating a pairing configuration.
///
/// All of these are programmer errors; a valid configuration never fails
/// at generation time.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("iwd difference band is not finite")]
    NonFiniteBand,

    #[error("minimum iwd difference {min} is negative")]
    NegativeBandEdge { min: f64 },

    #[error("minimum iwd difference {min} exceeds maximum {max}")]
    InvertedBand { min: f64, max: f64 },

    #[error("color affinity weight {0} is outside [0, 1]")]
    AffinityOutOfRange(f64),
}

/// Errors from judging a submitted guess.
#[derive(Debug, Error, PartialEq)]
pub enum GuessError {
    #[error("selected card {selected} is not part of the pair")]
    SelectedNotInPair { selected: String },

    #[error("card {id} has no iwd data")]
    MissingIwd { id: String },
}
