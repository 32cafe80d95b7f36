//! Core types for the IWD trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::colors::Color;

/// A card with its draft statistics, as loaded from the card store.
///
/// A plain value type: the generator depends only on this shape, not on
/// any persistence technology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub set_code: String,
    pub image_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri_large: Option<String>,
    pub rarity: String,
    pub type_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    pub colors: Vec<Color>,
    /// Improvement when drawn. The quiz's hidden ground truth; never shown
    /// to the player before they answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iwd: Option<f64>,
    /// Games-in-hand win rate, revealed alongside the answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gih_wr: Option<f64>,
    /// Number of games backing the statistics.
    pub games_played: u32,
    pub is_basic_land: bool,
    pub is_special_guest: bool,
}

impl Card {
    /// Project to the player-facing view, stripping every field that could
    /// reveal the answer.
    pub fn to_display(&self) -> CardDisplay {
        CardDisplay {
            id: self.id.clone(),
            name: self.name.clone(),
            image_uri: self.image_uri.clone(),
            image_uri_large: self.image_uri_large.clone(),
            set_code: self.set_code.clone(),
            colors: self.colors.clone(),
            rarity: self.rarity.clone(),
            type_line: self.type_line.clone(),
            mana_cost: self.mana_cost.clone(),
        }
    }
}

/// Player-facing card view. Carries no statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDisplay {
    pub id: String,
    pub name: String,
    pub image_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri_large: Option<String>,
    pub set_code: String,
    pub colors: Vec<Color>,
    pub rarity: String,
    pub type_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
}

/// A generated pair, already in presentation order.
///
/// Ephemeral: created by the generator, handed to the caller, and
/// discarded. Which card is `first` carries no information about the
/// hidden metric.
#[derive(Debug, Clone)]
pub struct CardPair {
    pub first: Card,
    pub second: Card,
}

impl CardPair {
    /// Identifier for the pair in its presentation order.
    pub fn pair_id(&self) -> String {
        format!("{}-{}", self.first.id, self.second.id)
    }

    /// Project both sides to their player-facing views.
    pub fn to_view(&self) -> PairView {
        PairView {
            id: self.pair_id(),
            card_a: self.first.to_display(),
            card_b: self.second.to_display(),
        }
    }
}

/// One pair as sent to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairView {
    pub id: String,
    pub card_a: CardDisplay,
    pub card_b: CardDisplay,
}

/// A batch of pairs plus the freshness of the data behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairBatch {
    pub pairs: Vec<PairView>,
    pub data_as_of: DateTime<Utc>,
}

impl PairBatch {
    pub fn new(pairs: &[CardPair], data_as_of: DateTime<Utc>) -> Self {
        Self {
            pairs: pairs.iter().map(CardPair::to_view).collect(),
            data_as_of,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, iwd: f64) -> Card {
        Card {
            id: id.to_string(),
            name: format!("Card {id}"),
            set_code: "LWE".to_string(),
            image_uri: format!("https://cards.example/{id}.jpg"),
            image_uri_large: None,
            rarity: "common".to_string(),
            type_line: "Creature".to_string(),
            mana_cost: Some("{2}{W}".to_string()),
            colors: vec![Color::White],
            iwd: Some(iwd),
            gih_wr: Some(0.56),
            games_played: 120,
            is_basic_land: false,
            is_special_guest: false,
        }
    }

    #[test]
    fn display_view_never_leaks_the_metric() {
        let card = card("a1", 0.1234);
        let json = serde_json::to_string(&card.to_display()).unwrap();
        assert!(!json.contains("iwd"));
        assert!(!json.contains("gih_wr"));
        assert!(!json.contains("games_played"));
        assert!(!json.contains("0.1234"));
        assert!(!json.contains("0.56"));
    }

    #[test]
    fn pair_id_follows_presentation_order() {
        let pair = CardPair {
            first: card("x", 0.1),
            second: card("y", 0.2),
        };
        assert_eq!(pair.pair_id(), "x-y");
        assert_eq!(pair.to_view().id, "x-y");
    }

    #[test]
    fn batch_projects_every_pair() {
        let pairs = vec![
            CardPair {
                first: card("a", 0.1),
                second: card("b", 0.2),
            },
            CardPair {
                first: card("c", 0.0),
                second: card("d", 0.05),
            },
        ];
        let batch = PairBatch::new(&pairs, Utc::now());
        assert_eq!(batch.pairs.len(), 2);
        assert_eq!(batch.pairs[1].card_b.id, "d");
    }
}
