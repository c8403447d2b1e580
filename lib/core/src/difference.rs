//! Difference metrics between two rating values.

use crate::table::Rating;
use crate::universe::ValueUniverse;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level of measurement of the ratings, selecting the difference metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    /// Squared difference: (a - b)^2
    #[default]
    Interval,
    /// Mismatch indicator: 0 if equal, 1 otherwise
    Nominal,
}

impl VariableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::Interval => "interval",
            VariableType::Nominal => "nominal",
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariableType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interval" => Ok(VariableType::Interval),
            "nominal" => Ok(VariableType::Nominal),
            _ => Err(Error::UnsupportedVariableType(s.to_string())),
        }
    }
}

/// Difference between two ratings under `variable_type`.
///
/// Symmetric in `a` and `b` and zero when they are equal.
pub fn difference_metric(a: &Rating, b: &Rating, variable_type: VariableType) -> Result<f64> {
    match variable_type {
        VariableType::Interval => {
            let x = a
                .as_f64()
                .ok_or_else(|| Error::NonNumericRating(a.to_string()))?;
            let y = b
                .as_f64()
                .ok_or_else(|| Error::NonNumericRating(b.to_string()))?;
            Ok((x - y).powi(2))
        }
        VariableType::Nominal => Ok(if a == b { 0.0 } else { 1.0 }),
    }
}

/// Pairwise differences over every value of a universe.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceMatrix {
    dim: usize,
    cells: Vec<f64>,
    variable_type: VariableType,
}

impl DifferenceMatrix {
    pub fn new(universe: &ValueUniverse, variable_type: VariableType) -> Result<Self> {
        let values = universe.values();
        let dim = values.len();
        let mut cells = Vec::with_capacity(dim * dim);
        for a in values {
            for b in values {
                cells.push(difference_metric(a, b, variable_type)?);
            }
        }
        Ok(Self {
            dim,
            cells,
            variable_type,
        })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.dim + col]
    }

    #[inline]
    pub fn variable_type(&self) -> VariableType {
        self.variable_type
    }
}
