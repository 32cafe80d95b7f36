//! Card color tags and overlap rules.

use serde::{Deserialize, Serialize};

/// The five card color tags, serialized as their single letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

/// Check whether two color sets share at least one tag.
///
/// Colorless cards (empty set) overlap with everything.
pub fn has_color_overlap(colors_a: &[Color], colors_b: &[Color]) -> bool {
    if colors_a.is_empty() || colors_b.is_empty() {
        return true;
    }
    colors_a.iter().any(|c| colors_b.contains(c))
}

/// Parse colors from the JSON blob the card store keeps them in.
///
/// Unparseable input is treated as colorless rather than an error.
pub fn parse_colors(colors_json: &str) -> Vec<Color> {
    serde_json::from_str(colors_json).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorless_overlaps_everything() {
        assert!(has_color_overlap(&[], &[Color::White]));
        assert!(has_color_overlap(&[Color::Black, Color::Red], &[]));
        assert!(has_color_overlap(&[], &[]));
    }

    #[test]
    fn overlap_requires_shared_tag() {
        assert!(has_color_overlap(
            &[Color::White, Color::Blue],
            &[Color::Blue, Color::Black]
        ));
        assert!(!has_color_overlap(
            &[Color::White, Color::Blue],
            &[Color::Red, Color::Green]
        ));
    }

    #[test]
    fn parse_colors_from_json() {
        assert_eq!(
            parse_colors(r#"["W","G"]"#),
            vec![Color::White, Color::Green]
        );
        assert_eq!(parse_colors("[]"), Vec::<Color>::new());
    }

    #[test]
    fn parse_colors_garbage_is_colorless() {
        assert_eq!(parse_colors("not json"), Vec::<Color>::new());
        assert_eq!(parse_colors(r#"["X"]"#), Vec::<Color>::new());
    }
}
