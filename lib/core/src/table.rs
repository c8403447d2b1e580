//! Rating values and the rater × item table they live in.

use crate::{Error, Result};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single non-missing rating.
///
/// Numbers are valid for every variable type, labels only for nominal data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Number(OrderedFloat<f64>),
    Label(String),
}

impl Rating {
    #[inline]
    #[must_use]
    pub fn number(value: f64) -> Self {
        Rating::Number(OrderedFloat(value))
    }

    #[inline]
    #[must_use]
    pub fn label(value: impl Into<String>) -> Self {
        Rating::Label(value.into())
    }

    /// Parse a raw cell, preferring a numeric reading
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Rating::number(v),
            _ => Rating::label(raw),
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Rating::Number(v) => Some(v.into_inner()),
            Rating::Label(_) => None,
        }
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Rating::Number(_))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Number(v) => write!(f, "{}", v.into_inner()),
            Rating::Label(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Rating {
    fn from(value: f64) -> Self {
        Rating::number(value)
    }
}

impl From<i32> for Rating {
    fn from(value: i32) -> Self {
        Rating::number(f64::from(value))
    }
}

impl From<&str> for Rating {
    fn from(value: &str) -> Self {
        Rating::label(value)
    }
}

impl From<String> for Rating {
    fn from(value: String) -> Self {
        Rating::Label(value)
    }
}

/// Reliability data: raters as rows, items as columns, `None` for a missing cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingTable {
    raters: Vec<String>,
    items: Vec<String>,
    cells: Vec<Vec<Option<Rating>>>,
}

impl RatingTable {
    /// Build a table from labelled rows.
    ///
    /// Fails with [`Error::MalformedTable`] when there are fewer than two
    /// raters, no items, ragged rows, non-finite numbers, or no ratings at all.
    pub fn new(
        raters: Vec<String>,
        items: Vec<String>,
        cells: Vec<Vec<Option<Rating>>>,
    ) -> Result<Self> {
        if raters.len() != cells.len() {
            return Err(Error::MalformedTable(format!(
                "{} rater labels for {} rows",
                raters.len(),
                cells.len()
            )));
        }
        if raters.len() < 2 {
            return Err(Error::MalformedTable(format!(
                "at least 2 raters are required, got {}",
                raters.len()
            )));
        }
        if items.is_empty() {
            return Err(Error::MalformedTable("table has no items".to_string()));
        }

        for (rater, row) in raters.iter().zip(&cells) {
            if row.len() != items.len() {
                return Err(Error::MalformedTable(format!(
                    "rater '{}' has {} cells, expected {}",
                    rater,
                    row.len(),
                    items.len()
                )));
            }
            if let Some(bad) = row
                .iter()
                .flatten()
                .find(|r| r.as_f64().is_some_and(|v| !v.is_finite()))
            {
                return Err(Error::MalformedTable(format!(
                    "rater '{}' has non-finite rating {}",
                    rater, bad
                )));
            }
        }

        if cells.iter().all(|row| row.iter().all(Option::is_none)) {
            return Err(Error::MalformedTable("every cell is missing".to_string()));
        }

        Ok(Self { raters, items, cells })
    }

    /// Build a table from unlabelled rows; raters and items get 1-based names.
    pub fn from_rows<R: Into<Rating>>(rows: Vec<Vec<Option<R>>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let raters = (1..=rows.len()).map(|i| format!("rater_{}", i)).collect();
        let items = (1..=width).map(|i| format!("item_{}", i)).collect();
        let cells = rows
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.map(Into::into)).collect())
            .collect();
        Self::new(raters, items, cells)
    }

    #[inline]
    pub fn raters(&self) -> &[String] {
        &self.raters
    }

    #[inline]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[inline]
    pub fn rater_count(&self) -> usize {
        self.raters.len()
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, rater: usize, item: usize) -> Option<&Rating> {
        self.cells.get(rater)?.get(item)?.as_ref()
    }

    /// Non-missing ratings for one item, in rater order
    pub fn item_ratings(&self, item: usize) -> impl Iterator<Item = &Rating> + '_ {
        self.cells.iter().filter_map(move |row| row[item].as_ref())
    }

    /// All non-missing ratings, row by row
    pub fn ratings(&self) -> impl Iterator<Item = &Rating> + '_ {
        self.cells.iter().flat_map(|row| row.iter().flatten())
    }
}
