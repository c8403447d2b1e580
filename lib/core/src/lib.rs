//! # kalpha Core
//!
//! Core library for computing Krippendorff's alpha, a measure of
//! inter-rater reliability.
//!
//! This crate provides the numerical pipeline:
//!
//! - [`RatingTable`] - Raters × items reliability data with missing cells
//! - [`ValueUniverse`] - Distinct ratings indexing both matrices
//! - [`CoincidenceMatrix`] - Weighted value-pair co-occurrences across raters
//! - [`DifferenceMatrix`] - Pairwise differences under a [`VariableType`]
//! - [`Alpha`] - Observed vs. expected disagreement and the coefficient
//!
//! ## Example
//!
//! ```rust
//! use kalpha_core::{compute_alpha, RatingTable, VariableType};
//!
//! let table = RatingTable::from_rows(vec![
//!     vec![Some(1), Some(2), Some(3), None],
//!     vec![Some(1), Some(2), Some(3), Some(4)],
//!     vec![Some(1), Some(2), Some(4), Some(4)],
//! ]).unwrap();
//!
//! let alpha = compute_alpha(&table, VariableType::Interval).unwrap();
//! assert!(alpha > 0.9 && alpha <= 1.0);
//! ```

pub mod alpha;
pub mod coincidence;
pub mod difference;
pub mod error;
pub mod pairs;
pub mod table;
pub mod universe;

pub use alpha::{compute_alpha, compute_alpha_with, Alpha, AlphaReport, ValueMarginal};
pub use coincidence::CoincidenceMatrix;
pub use difference::{difference_metric, DifferenceMatrix, VariableType};
pub use error::{Error, Result};
pub use pairs::{pairable_count, permutation_pairs};
pub use table::{Rating, RatingTable};
pub use universe::ValueUniverse;
