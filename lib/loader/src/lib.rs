//! # kalpha Loader
//!
//! Reads reliability data into a [`RatingTable`]: raters as rows, items as
//! columns, missing cells allowed.
//!
//! Two formats are supported:
//!
//! - **Delimited** text (CSV by default) with a header row of item labels and
//!   a rater label in the first column
//! - **JSON** with a `ratings` array of rows and optional `raters`/`items`
//!
//! ## Example
//!
//! ```rust
//! use kalpha_loader::{LoaderConfig, TableLoader, TableFormat};
//!
//! let loader = TableLoader::new(LoaderConfig::default());
//! let table = loader
//!     .parse_str("coder,u1,u2\nA,1,2\nB,1,\n", TableFormat::Delimited)
//!     .unwrap();
//! assert_eq!(table.rater_count(), 2);
//! ```

pub mod config;
pub mod delimited;
pub mod error;
pub mod json;

pub use config::{LoaderConfig, TableFormat, DEFAULT_MISSING_MARKERS};
pub use delimited::parse_delimited;
pub use error::{LoadError, Result};
pub use json::parse_json;

use kalpha_core::RatingTable;
use std::path::Path;
use tracing::debug;

/// Loads rating tables according to a [`LoaderConfig`]
#[derive(Debug, Clone, Default)]
pub struct TableLoader {
    config: LoaderConfig,
}

impl TableLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Read and parse a file, picking the format from its extension when `Auto`
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<RatingTable> {
        let path = path.as_ref();
        let format = self.config.format.resolve(path);
        debug!(?path, ?format, "loading rating table");

        let text = std::fs::read_to_string(path)?;
        self.parse_str(&text, format)
    }

    /// Parse in-memory text; `Auto` is read as delimited
    pub fn parse_str(&self, text: &str, format: TableFormat) -> Result<RatingTable> {
        match format {
            TableFormat::Json => parse_json(text),
            TableFormat::Delimited | TableFormat::Auto => parse_delimited(text, &self.config),
        }
    }
}

/// Load `path` with the default configuration
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<RatingTable> {
    TableLoader::default().load(path)
}
