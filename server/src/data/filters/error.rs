//! Filter compiler errors

use thiserror::Error;

/// Errors raised while parsing or compiling filters.
///
/// All variants describe bad client input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Invalid filters JSON: {0}")]
    InvalidJson(String),

    #[error("Filter JSON exceeds maximum size of {max} bytes")]
    TooLarge { max: usize },

    #[error("Maximum {max} filters allowed")]
    TooMany { max: usize },

    #[error("Cannot filter by unknown field: {0}")]
    UnknownField(String),

    #[error("Operator '{operator}' is not supported for field '{field}'")]
    UnsupportedOperator { field: String, operator: String },

    #[error("Invalid value '{value}' for {field} {operator}: {reason}")]
    InvalidValue {
        field: String,
        operator: String,
        value: String,
        reason: &'static str,
    },
}

impl FilterError {
    /// Machine readable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => "INVALID_FILTER_JSON",
            Self::TooLarge { .. } => "FILTER_JSON_TOO_LARGE",
            Self::TooMany { .. } => "TOO_MANY_FILTERS",
            Self::UnknownField(_) => "INVALID_FILTER_FIELD",
            Self::UnsupportedOperator { .. } => "UNSUPPORTED_FILTER_OPERATOR",
            Self::InvalidValue { .. } => "INVALID_FILTER_VALUE",
        }
    }
}
