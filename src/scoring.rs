//! Judging a submitted guess against the hidden metrics.

use serde::{Deserialize, Serialize};

use crate::error::GuessError;
use crate::types::Card;

/// Outcome of scoring one guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessJudgment {
    pub is_correct: bool,
    pub correct_card_id: String,
    pub card_a_iwd: f64,
    pub card_b_iwd: f64,
    pub iwd_difference: f64,
}

/// Score a player's pick between two cards.
///
/// The card with the higher iwd is correct; ties go to `card_a`. The
/// caller re-fetches both cards by id, so a missing metric here means the
/// store changed under us and is reported as an error rather than guessed
/// around.
pub fn judge_guess(
    card_a: &Card,
    card_b: &Card,
    selected_id: &str,
) -> Result<GuessJudgment, GuessError> {
    if selected_id != card_a.id && selected_id != card_b.id {
        return Err(GuessError::SelectedNotInPair {
            selected: selected_id.to_string(),
        });
    }

    let iwd_a = card_a.iwd.ok_or_else(|| GuessError::MissingIwd {
        id: card_a.id.clone(),
    })?;
    let iwd_b = card_b.iwd.ok_or_else(|| GuessError::MissingIwd {
        id: card_b.id.clone(),
    })?;

    let correct_card_id = if iwd_a >= iwd_b {
        card_a.id.clone()
    } else {
        card_b.id.clone()
    };

    Ok(GuessJudgment {
        is_correct: selected_id == correct_card_id,
        correct_card_id,
        card_a_iwd: iwd_a,
        card_b_iwd: iwd_b,
        iwd_difference: (iwd_a - iwd_b).abs(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn card(id: &str, iwd: Option<f64>) -> Card {
        Card {
            id: id.to_string(),
            name: format!("Card {id}"),
            set_code: "LWE".to_string(),
            image_uri: String::new(),
            image_uri_large: None,
            rarity: "rare".to_string(),
            type_line: "Instant".to_string(),
            mana_cost: None,
            colors: vec![],
            iwd,
            gih_wr: None,
            games_played: 100,
            is_basic_land: false,
            is_special_guest: false,
        }
    }

    #[test]
    fn picking_the_higher_iwd_card_is_correct() {
        let a = card("a", Some(0.08));
        let b = card("b", Some(0.02));
        let judgment = judge_guess(&a, &b, "a").unwrap();
        assert_eq!(
            judgment,
            GuessJudgment {
                is_correct: true,
                correct_card_id: "a".to_string(),
                card_a_iwd: 0.08,
                card_b_iwd: 0.02,
                iwd_difference: 0.06,
            }
        );
    }

    #[test]
    fn picking_the_lower_iwd_card_is_wrong() {
        let a = card("a", Some(0.08));
        let b = card("b", Some(0.02));
        let judgment = judge_guess(&a, &b, "b").unwrap();
        assert!(!judgment.is_correct);
        assert_eq!(judgment.correct_card_id, "a");
    }

    #[test]
    fn ties_go_to_card_a() {
        let a = card("a", Some(0.05));
        let b = card("b", Some(0.05));
        let judgment = judge_guess(&a, &b, "b").unwrap();
        assert_eq!(judgment.correct_card_id, "a");
        assert!(!judgment.is_correct);
    }

    #[test]
    fn selection_outside_the_pair_is_rejected() {
        let a = card("a", Some(0.05));
        let b = card("b", Some(0.02));
        assert_eq!(
            judge_guess(&a, &b, "z"),
            Err(GuessError::SelectedNotInPair {
                selected: "z".to_string()
            })
        );
    }

    #[test]
    fn missing_metric_is_an_error() {
        let a = card("a", Some(0.05));
        let b = card("b", None);
        assert_eq!(
            judge_guess(&a, &b, "a"),
            Err(GuessError::MissingIwd {
                id: "b".to_string()
            })
        );
    }
}
