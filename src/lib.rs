//! Core library for the IWD trainer: a quiz that shows two draft cards
//! and asks which one improves your win rate more when drawn.
//!
//! Provides:
//! - Pair generation (eligibility filtering, weighted anchor sampling,
//!   band-constrained partner search, color affinity bias)
//! - Guess judgment against the hidden metric
//! - Running player statistics (streaks, accuracy, per-set breakdown)
//! - Shared types (Card, CardDisplay, PairingConfig, etc.)
//!
//! The crate is pure and stateless: no I/O, no global configuration, no
//! shared RNG. Callers load the card pool, pass it in together with a
//! [`PairingConfig`] and an [`rand::Rng`], and get back pairs whose
//! presentation order reveals nothing about the answer.

pub mod colors;
pub mod config;
pub mod error;
pub mod pairing;
pub mod scoring;
pub mod sets;
pub mod stats;
pub mod types;

pub use colors::{has_color_overlap, parse_colors, Color};
pub use config::PairingConfig;
pub use error::{ConfigError, GuessError};
pub use pairing::{generate_pair, generate_pair_batch, select_eligible};
pub use scoring::{judge_guess, GuessJudgment};
pub use sets::{find_set, is_supported, SupportedSet, DEFAULT_SET, PRELOAD_PAIR_COUNT};
pub use stats::{BiggestMiss, SetStats, UserStats};
pub use types::{Card, CardDisplay, CardPair, PairBatch, PairView};
