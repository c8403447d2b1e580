use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unsupported variable type: {0} (expected one of: interval, nominal)")]
    UnsupportedVariableType(String),

    #[error("Insufficient data: {pairable_total} pairable values, at least 2 are required")]
    InsufficientData { pairable_total: f64 },

    #[error("Expected disagreement is zero, alpha is undefined for this data")]
    DegenerateAgreement,

    #[error("Malformed rating table: {0}")]
    MalformedTable(String),

    #[error("Numeric overflow: observed {observed}, expected {expected} disagreement are not finite")]
    NumericOverflow { observed: f64, expected: f64 },

    #[error("Non-numeric rating '{0}' cannot be compared with the interval metric")]
    NonNumericRating(String),
}
