//! Krippendorff's alpha from observed and expected disagreement.
//!
//! ```text
//! alpha = 1 - D_o / D_e
//!
//! D_o = sum_{c<k} o_ck * delta_ck
//! D_e = 1 / (N - 1) * sum_{c<k} n_c * n_k * delta_ck
//! ```
//!
//! where `o` is the coincidence matrix, `n_c` its row sums, `N` its total and
//! `delta` the difference matrix for the chosen [`VariableType`].

use crate::coincidence::CoincidenceMatrix;
use crate::difference::{DifferenceMatrix, VariableType};
use crate::table::RatingTable;
use crate::universe::ValueUniverse;
use crate::{Error, Result};
use serde::Serialize;
use tracing::debug;

/// Outcome of one alpha computation with the quantities that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlphaReport {
    pub alpha: f64,
    pub variable_type: VariableType,
    pub observed_disagreement: f64,
    pub expected_disagreement: f64,
    /// Total pairable values `N`
    pub pairable_total: f64,
    pub raters: usize,
    pub items: usize,
    /// Items with at least two ratings
    pub pairable_items: usize,
    /// Number of distinct rating values
    pub values: usize,
}

/// Per-value marginal totals, in universe order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueMarginal {
    pub value: String,
    pub total: f64,
}

/// Alpha calculator over a coincidence/difference matrix pair.
///
/// Both matrices are built from one [`ValueUniverse`], so row `i` of each
/// refers to the same rating.
#[derive(Debug, Clone)]
pub struct Alpha {
    coincidence: CoincidenceMatrix,
    difference: DifferenceMatrix,
    raters: usize,
    items: usize,
}

impl Alpha {
    /// Build both matrices for `table` over one shared value universe
    pub fn new(table: &RatingTable, variable_type: VariableType) -> Result<Self> {
        let universe = ValueUniverse::from_table(table);
        let difference = DifferenceMatrix::new(&universe, variable_type)?;
        let coincidence = CoincidenceMatrix::with_universe(table, universe);
        Ok(Self {
            coincidence,
            difference,
            raters: table.rater_count(),
            items: table.item_count(),
        })
    }

    /// Compute the full report for `table`
    pub fn compute(table: &RatingTable, variable_type: VariableType) -> Result<AlphaReport> {
        Self::new(table, variable_type)?.report()
    }

    #[inline]
    pub fn coincidence(&self) -> &CoincidenceMatrix {
        &self.coincidence
    }

    #[inline]
    pub fn difference(&self) -> &DifferenceMatrix {
        &self.difference
    }

    /// Dot product of the strict upper triangles
    pub fn observed_disagreement(&self) -> f64 {
        let n = self.coincidence.dim();
        let mut total = 0.0;
        for c in 0..n {
            for k in (c + 1)..n {
                total += self.coincidence.get(c, k) * self.difference.get(c, k);
            }
        }
        total
    }

    /// Disagreement expected by chance given the marginal value totals.
    ///
    /// Fails with [`Error::InsufficientData`] when `N <= 1`.
    pub fn expected_disagreement(&self) -> Result<f64> {
        let pairable_total = self.coincidence.total();
        if pairable_total <= 1.0 {
            return Err(Error::InsufficientData { pairable_total });
        }

        let marginals = self.coincidence.marginals();
        let n = marginals.len();
        let mut total = 0.0;
        for c in 0..n {
            for k in (c + 1)..n {
                total += self.difference.get(c, k) * marginals[c] * marginals[k];
            }
        }
        Ok(total / (pairable_total - 1.0))
    }

    pub fn value(&self) -> Result<f64> {
        self.report().map(|r| r.alpha)
    }

    /// Fails with [`Error::NumericOverflow`] when either disagreement term
    /// is not finite, and with [`Error::DegenerateAgreement`] when the
    /// expected disagreement is zero.
    pub fn report(&self) -> Result<AlphaReport> {
        let observed = self.observed_disagreement();
        let expected = self.expected_disagreement()?;
        if !observed.is_finite() || !expected.is_finite() {
            return Err(Error::NumericOverflow { observed, expected });
        }
        if expected == 0.0 {
            return Err(Error::DegenerateAgreement);
        }

        let alpha = 1.0 - observed / expected;
        debug!(
            variable_type = %self.difference.variable_type(),
            observed,
            expected,
            alpha,
            "computed alpha"
        );

        Ok(AlphaReport {
            alpha,
            variable_type: self.difference.variable_type(),
            observed_disagreement: observed,
            expected_disagreement: expected,
            pairable_total: self.coincidence.total(),
            raters: self.raters,
            items: self.items,
            pairable_items: self.coincidence.pairable_items(),
            values: self.coincidence.dim(),
        })
    }

    pub fn marginals(&self) -> Vec<ValueMarginal> {
        self.coincidence
            .universe()
            .values()
            .iter()
            .zip(self.coincidence.marginals())
            .map(|(value, total)| ValueMarginal {
                value: value.to_string(),
                total,
            })
            .collect()
    }
}

/// Krippendorff's alpha of `table` under `variable_type`
pub fn compute_alpha(table: &RatingTable, variable_type: VariableType) -> Result<f64> {
    Alpha::new(table, variable_type)?.value()
}

/// Like [`compute_alpha`] with the variable type given by name.
///
/// An unknown name fails with [`Error::UnsupportedVariableType`] before any
/// matrix is built.
pub fn compute_alpha_with(table: &RatingTable, variable_type: &str) -> Result<f64> {
    let variable_type: VariableType = variable_type.parse()?;
    compute_alpha(table, variable_type)
}
