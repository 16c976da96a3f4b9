//! Item line extraction: name, quantity and unit.
//!
//! While a movement is active, message bodies are matched against a
//! trailing-anchored grammar:
//!
//! ```text
//! [numbering] name <separator> quantity [unit]
//! ```
//!
//! where numbering is `digits + "." | ")"`, the separator is one or more of
//! `:`, `-` or whitespace, and the unit comes from a fixed vocabulary
//! (optionally extended via configuration). Examples:
//!
//! ```text
//! 1. Rice: 50kg
//! 2) Sugar - 10 ctns
//! Beans 25
//! ```
//!
//! The name is the minimal prefix that lets the rest of the grammar anchor
//! to the end of the line, so trailing quantities bind tightly: in
//! `"Omo 900g 3pcs"` the quantity is 3 and the unit is pcs.

use regex::Regex;

use crate::error::{ChatledgerError, Result};
use crate::record::DEFAULT_UNIT;

/// Fixed unit vocabulary, plural forms first.
pub const UNITS: &[&str] = &[
    "pcs", "ctns", "sets", "dozens", "packs", "pc", "ctn", "set", "dozen", "pack", "kg", "g", "l",
];

/// Chat tombstones that must never be read as item lines.
const DELETION_MARKERS: &[&str] = &["This message was deleted", "You deleted this message"];

/// Pattern stripping a leading list-numbering prefix, e.g. `1.` or `2)`.
const NUMBERING_PATTERN: &str = r"^\d+[.)]\s?";

/// One extracted item triple, before it is tagged with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    /// Item name, trimmed of numbering and separators.
    pub name: String,
    /// Parsed quantity.
    pub quantity: u64,
    /// Lowercased unit word, `"pcs"` when the line carried none.
    pub unit: String,
}

/// Compiled item grammar. Built once per parse invocation.
#[derive(Debug)]
pub struct ItemGrammar {
    numbering: Regex,
    item: Regex,
}

impl ItemGrammar {
    /// Compiles the grammar, appending `extra_units` to the fixed
    /// vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`ChatledgerError::InvalidFormat`] when an extra unit word
    /// is empty or not purely alphabetic.
    pub fn build(extra_units: &[String]) -> Result<Self> {
        for unit in extra_units {
            if unit.is_empty() || !unit.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ChatledgerError::invalid_format(
                    "unit word",
                    format!("'{unit}' must be non-empty and purely alphabetic"),
                ));
            }
        }

        let mut alternatives: Vec<String> = UNITS.iter().map(|u| (*u).to_string()).collect();
        alternatives.extend(extra_units.iter().map(|u| regex::escape(u)));

        let pattern = format!(
            r"(?i)^(?P<name>.*?)[\s:\-]+(?P<qty>\d+)\s*(?P<unit>{})?\s*$",
            alternatives.join("|")
        );

        Ok(Self {
            numbering: Regex::new(NUMBERING_PATTERN)
                .map_err(|e| ChatledgerError::invalid_format("item grammar", e.to_string()))?,
            item: Regex::new(&pattern)
                .map_err(|e| ChatledgerError::invalid_format("item grammar", e.to_string()))?,
        })
    }
}

/// Extracts an item triple from a message body, or `None` when the body is
/// not an item line.
///
/// Bodies that look like garbled timestamps (leading `[`), re-state the
/// movement keyword, or are deletion tombstones never match. A match is
/// also rejected when the cleaned name is a single character or still
/// carries a `" on "` date fragment.
pub fn extract_item(body: &str, grammar: &ItemGrammar) -> Option<ItemLine> {
    if body.starts_with('[') || body.contains(super::header::MOVEMENT_KEYWORD) {
        return None;
    }
    if DELETION_MARKERS.iter().any(|m| body.contains(m)) {
        return None;
    }

    let body = grammar.numbering.replace(body, "");
    let caps = grammar.item.captures(&body)?;

    let name = caps
        .name("name")
        .map_or("", |m| m.as_str())
        .trim()
        .trim_end_matches([':', '-', ' '])
        .to_string();
    if name.chars().count() <= 1 || name.contains(" on ") {
        return None;
    }

    // Overlong digit runs are noise, not quantities
    let quantity: u64 = caps.name("qty")?.as_str().parse().ok()?;

    let unit = caps
        .name("unit")
        .map_or_else(|| DEFAULT_UNIT.to_string(), |m| m.as_str().to_lowercase());

    Some(ItemLine {
        name,
        quantity,
        unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> ItemGrammar {
        ItemGrammar::build(&[]).unwrap()
    }

    fn item(body: &str) -> ItemLine {
        extract_item(body, &grammar()).unwrap_or_else(|| panic!("expected item for {body:?}"))
    }

    #[test]
    fn test_colon_separator_with_unit() {
        let it = item("Rice: 50kg");
        assert_eq!(it.name, "Rice");
        assert_eq!(it.quantity, 50);
        assert_eq!(it.unit, "kg");
    }

    #[test]
    fn test_space_separator_defaults_to_pcs() {
        let it = item("Rice 50");
        assert_eq!(it.name, "Rice");
        assert_eq!(it.quantity, 50);
        assert_eq!(it.unit, "pcs");
    }

    #[test]
    fn test_dash_separator() {
        let it = item("Sugar - 10 ctns");
        assert_eq!(it.name, "Sugar");
        assert_eq!(it.quantity, 10);
        assert_eq!(it.unit, "ctns");
    }

    #[test]
    fn test_numbering_prefix_stripped() {
        let it = item("2. Beans: 25 packs");
        assert_eq!(it.name, "Beans");
        assert_eq!(it.quantity, 25);
        assert_eq!(it.unit, "packs");

        let it = item("3) Maize 12 sets");
        assert_eq!(it.name, "Maize");
        assert_eq!(it.unit, "sets");
    }

    #[test]
    fn test_unit_is_lowercased() {
        let it = item("Flour: 5 KG");
        assert_eq!(it.unit, "kg");
    }

    #[test]
    fn test_quantity_binds_to_line_end() {
        let it = item("Omo 900g 3pcs");
        assert_eq!(it.name, "Omo 900g");
        assert_eq!(it.quantity, 3);
        assert_eq!(it.unit, "pcs");
    }

    #[test]
    fn test_unknown_unit_word_rejects() {
        assert!(extract_item("Rice 50 bags", &grammar()).is_none());
    }

    #[test]
    fn test_extra_units_extend_vocabulary() {
        let g = ItemGrammar::build(&["bags".to_string()]).unwrap();
        let it = extract_item("Rice 50 bags", &g).unwrap();
        assert_eq!(it.unit, "bags");
    }

    #[test]
    fn test_extra_unit_validation() {
        assert!(ItemGrammar::build(&["50cal".to_string()]).is_err());
        assert!(ItemGrammar::build(&[String::new()]).is_err());
    }

    #[test]
    fn test_short_name_rejected() {
        assert!(extract_item("A: 5", &grammar()).is_none());
        assert!(extract_item(": 5", &grammar()).is_none());
    }

    #[test]
    fn test_date_fragment_in_name_rejected() {
        assert!(extract_item("delivered on 1/2 at 5", &grammar()).is_none());
    }

    #[test]
    fn test_movement_keyword_rejected() {
        assert!(extract_item("Goods From Store: 5", &grammar()).is_none());
    }

    #[test]
    fn test_deleted_marker_rejected() {
        assert!(extract_item("This message was deleted", &grammar()).is_none());
    }

    #[test]
    fn test_bracket_body_rejected() {
        assert!(extract_item("[1/27/25, 8:07] partial: 5", &grammar()).is_none());
    }

    #[test]
    fn test_chatter_without_digits_rejected() {
        assert!(extract_item("thanks, received", &grammar()).is_none());
    }

    #[test]
    fn test_overflowing_quantity_rejected() {
        assert!(extract_item("Rice: 99999999999999999999999", &grammar()).is_none());
    }
}
