//! Error types shared across the crate

use thiserror::Error;

/// Input parameter rejected by validation or by a field bound
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{field}: value cannot be negative")]
    Negative { field: &'static str },

    #[error("{field}: value must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field}: maximum allowed value is {max}")]
    AboveMaximum { field: &'static str, max: f64 },

    #[error("{field}: minimum allowed value is {min}")]
    BelowMinimum { field: &'static str, min: f64 },

    #[error("years: horizon must be at least {min} year(s), got {years}")]
    HorizonTooShort { years: u32, min: u32 },
}

impl ParameterError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            ParameterError::Negative { field }
            | ParameterError::NotFinite { field }
            | ParameterError::AboveMaximum { field, .. }
            | ParameterError::BelowMinimum { field, .. } => field,
            ParameterError::HorizonTooShort { .. } => "years",
        }
    }
}

/// Failure while loading scenarios from a CSV file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scenario CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row} ({name}): {source}")]
    InvalidRow {
        row: usize,
        name: String,
        #[source]
        source: ParameterError,
    },
}

/// Invalid configuration value in the environment
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a valid number")]
    InvalidNumber { key: &'static str, value: String },

    #[error("invalid default parameters: {0}")]
    InvalidDefaults(#[from] ParameterError),
}

/// Rejected HTTP request
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid parameters for scenario {scenario}: {source}")]
    InvalidParameters {
        scenario: String,
        #[source]
        source: ParameterError,
    },
}

impl ApiError {
    /// HTTP status code for the response
    pub fn status(&self) -> u16 {
        match self {
            ApiError::InvalidJson(_) | ApiError::InvalidParameters { .. } => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_messages() {
        let err = ParameterError::Negative { field: "monthly_contribution" };
        assert_eq!(err.to_string(), "monthly_contribution: value cannot be negative");
        assert_eq!(err.field(), "monthly_contribution");

        let err = ParameterError::AboveMaximum { field: "annual_rate_pct", max: 100.0 };
        assert_eq!(err.to_string(), "annual_rate_pct: maximum allowed value is 100");

        let err = ParameterError::HorizonTooShort { years: 0, min: 1 };
        assert_eq!(err.field(), "years");
    }
}
