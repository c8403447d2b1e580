//! Loader configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cell spellings treated as a missing rating
pub const DEFAULT_MISSING_MARKERS: &[&str] =
    &["", "NA", "N/A", "NaN", "nan", "null", "NULL", "*", "."];

/// Input format of a rating file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Pick from the file extension
    #[default]
    Auto,
    /// Header row plus one delimited row per rater
    #[cfg_attr(feature = "clap", value(alias = "csv"))]
    Delimited,
    /// `{"raters": [...], "items": [...], "ratings": [[...]]}`
    Json,
}

impl TableFormat {
    /// Resolve `Auto` against a path; `.json` files are JSON, anything else delimited
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            TableFormat::Auto => match path.extension().and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("json") => TableFormat::Json,
                _ => TableFormat::Delimited,
            },
            other => other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoaderConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default = "default_missing_markers")]
    pub missing_markers: Vec<String>,

    #[serde(default)]
    pub format: TableFormat,
}

fn default_delimiter() -> char {
    ','
}

fn default_missing_markers() -> Vec<String> {
    DEFAULT_MISSING_MARKERS.iter().map(|s| s.to_string()).collect()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            missing_markers: default_missing_markers(),
            format: TableFormat::default(),
        }
    }
}

impl LoaderConfig {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Add extra missing markers on top of the current ones
    pub fn with_missing_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_markers.extend(markers.into_iter().map(Into::into));
        self
    }

    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    #[inline]
    pub fn is_missing(&self, cell: &str) -> bool {
        self.missing_markers.iter().any(|m| m == cell)
    }
}
