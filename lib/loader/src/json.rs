//! JSON rating tables
//!
//! ```json
//! {
//!   "raters": ["A", "B"],
//!   "items": ["u1", "u2"],
//!   "ratings": [[1, null], [1, 2]]
//! }
//! ```
//!
//! `raters` and `items` are optional; missing labels are numbered.

use crate::error::Result;
use kalpha_core::{Rating, RatingTable};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct JsonTable {
    #[serde(default)]
    raters: Option<Vec<String>>,
    #[serde(default)]
    items: Option<Vec<String>>,
    ratings: Vec<Vec<Option<Rating>>>,
}

pub fn parse_json(text: &str) -> Result<RatingTable> {
    let parsed: JsonTable = serde_json::from_str(text)?;
    let width = parsed.ratings.first().map_or(0, Vec::len);

    let raters = parsed.raters.unwrap_or_else(|| {
        (1..=parsed.ratings.len())
            .map(|i| format!("rater_{}", i))
            .collect()
    });
    let items = parsed
        .items
        .unwrap_or_else(|| (1..=width).map(|i| format!("item_{}", i)).collect());

    Ok(RatingTable::new(raters, items, parsed.ratings)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    #[test]
    fn test_parse_labelled() {
        let text = r#"{"raters": ["A", "B"], "items": ["u1", "u2"], "ratings": [[1, null], [1, 2.5]]}"#;
        let table = parse_json(text).unwrap();

        assert_eq!(table.raters(), &["A", "B"]);
        assert_eq!(table.get(0, 1), None);
        assert_eq!(table.get(1, 1), Some(&Rating::number(2.5)));
    }

    #[test]
    fn test_parse_unlabelled_nominal() {
        let text = r#"{"ratings": [["red", "blue"], ["red", null], ["green", "blue"]]}"#;
        let table = parse_json(text).unwrap();

        assert_eq!(table.raters()[2], "rater_3");
        assert_eq!(table.items(), &["item_1", "item_2"]);
        assert_eq!(table.get(2, 0), Some(&Rating::label("green")));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_json("{"), Err(LoadError::Json(_))));
        assert!(matches!(parse_json(r#"{"raters": []}"#), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_label_count_mismatch() {
        let text = r#"{"raters": ["A"], "ratings": [[1], [2]]}"#;
        assert!(matches!(parse_json(text), Err(LoadError::Table(_))));
    }
}
