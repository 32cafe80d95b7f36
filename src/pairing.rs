//! Pair selection: eligibility filtering, weighted anchor sampling,
//! band-constrained partner search, and the batch driver.
//!
//! Everything here is pure and stateless. Randomness comes from an
//! injected [`Rng`] so callers decide between a thread-local source and a
//! seeded one in tests; no RNG state is shared across calls.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::colors::has_color_overlap;
use crate::config::PairingConfig;
use crate::error::ConfigError;
use crate::types::{Card, CardPair};

/// Filter a card pool down to the cards usable for pairing.
///
/// A card is eligible iff it has an iwd value, its sample size meets the
/// configured minimum, and it passes the exclusion flags. Eligibility is
/// recomputed on every call; cards carry no cached state. An empty result
/// means "not enough data", not a fault.
pub fn select_eligible<'a>(cards: &'a [Card], config: &PairingConfig) -> Vec<&'a Card> {
    cards
        .iter()
        .filter(|c| {
            if config.exclude_basic_lands && c.is_basic_land {
                return false;
            }
            if config.exclude_special_guests && c.is_special_guest {
                return false;
            }
            if c.iwd.is_none() {
                return false;
            }
            c.games_played >= config.min_games_played
        })
        .collect()
}

/// Generate one pair from an already-filtered pool.
///
/// Returns `Ok(None)` when fewer than two eligible cards exist; that is a
/// signaled "insufficient data" outcome, not an error. The returned pair
/// is already in presentation order, and position carries no information
/// about which card has the higher iwd.
pub fn generate_pair<R>(
    eligible: &[&Card],
    config: &PairingConfig,
    rng: &mut R,
) -> Result<Option<CardPair>, ConfigError>
where
    R: Rng + ?Sized,
{
    config.validate()?;

    if eligible.len() < 2 {
        return Ok(None);
    }

    // Anchor: bias toward cards with more games behind their statistics.
    // ln(games + 1) flattens the bias enough that low-sample cards still
    // show up.
    let card_a = match weighted_select(eligible, rng, |c| (f64::from(c.games_played) + 1.0).ln()) {
        Some(c) => *c,
        None => return Ok(None),
    };
    let iwd_a = match card_a.iwd {
        Some(v) => v,
        None => return Ok(None),
    };

    let candidates: Vec<&Card> = eligible
        .iter()
        .copied()
        .filter(|c| {
            if c.id == card_a.id {
                return false;
            }
            match c.iwd {
                Some(iwd_b) => {
                    let diff = (iwd_a - iwd_b).abs();
                    diff >= config.min_iwd_difference && diff <= config.max_iwd_difference
                }
                None => false,
            }
        })
        .collect();

    if candidates.is_empty() {
        // Intentional relaxation: producing a pair whenever two eligible
        // cards exist beats holding out for the difficulty band. Color
        // affinity is skipped on this path.
        trace!(anchor = %card_a.id, "no candidate within the iwd band, relaxing");
        let fallback: Vec<&Card> = eligible
            .iter()
            .copied()
            .filter(|c| c.id != card_a.id)
            .collect();
        let card_b = match fallback.choose(rng) {
            Some(c) => *c,
            None => return Ok(None),
        };
        return Ok(Some(randomize_order(card_a, card_b, rng)));
    }

    // Soft color bias: prefer overlapping candidates, never at the cost of
    // having no candidates at all.
    let color_matched: Vec<&Card> = candidates
        .iter()
        .copied()
        .filter(|c| has_color_overlap(&card_a.colors, &c.colors))
        .collect();

    let pool = if !color_matched.is_empty() && rng.random_bool(config.color_affinity_weight) {
        &color_matched
    } else {
        &candidates
    };

    let card_b = match pool.choose(rng) {
        Some(c) => *c,
        None => return Ok(None),
    };

    Ok(Some(randomize_order(card_a, card_b, rng)))
}

/// Generate up to `count` unique pairs from a raw card pool.
///
/// Pairs are deduplicated by unordered card identity, so `(x, y)` and
/// `(y, x)` never both appear. Attempts are capped at `count * 10`; the
/// result may be shorter than requested, or empty, when the eligible pool
/// is too small to produce `count` distinct pairs.
pub fn generate_pair_batch<R>(
    cards: &[Card],
    config: &PairingConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<CardPair>, ConfigError>
where
    R: Rng + ?Sized,
{
    config.validate()?;

    let eligible = select_eligible(cards, config);

    let mut pairs: Vec<CardPair> = Vec::with_capacity(count);
    let mut used: HashSet<(String, String)> = HashSet::new();

    let max_attempts = count.saturating_mul(10);
    let mut attempts = 0;

    while pairs.len() < count && attempts < max_attempts {
        attempts += 1;

        let pair = match generate_pair(&eligible, config, rng)? {
            Some(pair) => pair,
            // A pool too small to pair now will be too small on every
            // retry; stop instead of burning attempts.
            None => break,
        };

        if !used.insert(unordered_key(&pair)) {
            continue;
        }
        pairs.push(pair);
    }

    if pairs.len() < count {
        debug!(
            requested = count,
            produced = pairs.len(),
            attempts,
            "pair batch came up short"
        );
    }

    Ok(pairs)
}

/// Dedup key that ignores presentation order.
fn unordered_key(pair: &CardPair) -> (String, String) {
    let a = &pair.first.id;
    let b = &pair.second.id;
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

/// Weighted random selection by cumulative subtraction.
///
/// Draws a uniform value in `[0, total)` and walks the items until the
/// remainder drops to zero or below. When every weight is zero the draw
/// degenerates, so fall back to a uniform choice.
fn weighted_select<'a, T, R, F>(items: &'a [T], rng: &mut R, weight_of: F) -> Option<&'a T>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return None;
    }

    let weights: Vec<f64> = items.iter().map(|item| weight_of(item)).collect();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return items.choose(rng);
    }

    let mut remaining = rng.random_range(0.0..total);
    for (item, weight) in items.iter().zip(&weights) {
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(item);
        }
    }
    items.last()
}

/// Coin-flip the presentation order so position never hints at the answer.
fn randomize_order<R>(card_a: &Card, card_b: &Card, rng: &mut R) -> CardPair
where
    R: Rng + ?Sized,
{
    if rng.random_bool(0.5) {
        CardPair {
            first: card_a.clone(),
            second: card_b.clone(),
        }
    } else {
        CardPair {
            first: card_b.clone(),
            second: card_a.clone(),
        }
    }
}
