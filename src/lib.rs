//! # kalpha
//!
//! Krippendorff's alpha, a reliability coefficient for agreement among
//! raters, computed from a raters × items table with missing cells allowed.
//!
//! ## Quick Start
//!
//! ### From the Command Line
//!
//! ```bash
//! cargo install kalpha
//! kalpha ratings.csv --variable-type nominal
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use kalpha::prelude::*;
//!
//! let table = RatingTable::from_rows(vec![
//!     vec![Some(1), Some(2), Some(3), None],
//!     vec![Some(1), Some(2), Some(3), Some(4)],
//!     vec![Some(1), Some(2), Some(4), Some(4)],
//! ]).unwrap();
//!
//! let report = Alpha::compute(&table, VariableType::Interval).unwrap();
//! println!("alpha = {:.3}", report.alpha);
//! ```
//!
//! ## Crate Structure
//!
//! - [`kalpha-core`](https://docs.rs/kalpha-core) - Rating tables, coincidence and difference matrices, alpha
//! - [`kalpha-loader`](https://docs.rs/kalpha-loader) - Delimited and JSON table loading
//!
//! ## Variable Types
//!
//! - **interval**: squared difference `(a - b)^2`, numeric ratings only
//! - **nominal**: `0` for equal ratings, `1` otherwise, any ratings

// Re-export core types
pub use kalpha_core::{
    compute_alpha, compute_alpha_with, difference_metric,
    Alpha, AlphaReport, ValueMarginal,
    CoincidenceMatrix, DifferenceMatrix, ValueUniverse,
    Rating, RatingTable, VariableType,
    Error, Result,
};

// Re-export loader
pub use kalpha_loader::{load_table, LoadError, LoaderConfig, TableFormat, TableLoader};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        compute_alpha, Alpha, AlphaReport,
        Rating, RatingTable, VariableType,
        Error, Result,
        LoaderConfig, TableFormat, TableLoader,
    };
}
