//! Error types for carry_drift

use thiserror::Error;

/// Main error type for carry_drift
#[derive(Error, Debug)]
pub enum CarryError {
    #[error("Please paste the interest rate table.")]
    EmptyInput,

    #[error("No valid interest rate data found. Please check the format.")]
    NoValidData,

    #[error("Invalid minimum differential {value}: must be within [{min}, {max}]")]
    InvalidThreshold { value: f64, min: f64, max: f64 },

    #[error("Invalid currency pair: {0}")]
    InvalidPair(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CarryError {
    /// True for the two failures a user can fix by correcting the pasted text.
    pub fn is_input_error(&self) -> bool {
        matches!(self, CarryError::EmptyInput | CarryError::NoValidData)
    }
}

/// Result type alias for carry_drift operations
pub type Result<T> = std::result::Result<T, CarryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            CarryError::EmptyInput.to_string(),
            "Please paste the interest rate table."
        );
        assert!(CarryError::NoValidData
            .to_string()
            .contains("No valid interest rate data found"));
    }

    #[test]
    fn test_is_input_error() {
        assert!(CarryError::EmptyInput.is_input_error());
        assert!(CarryError::NoValidData.is_input_error());
        assert!(!CarryError::InvalidPair("EURUSD".to_string()).is_input_error());
    }

    #[test]
    fn test_threshold_message() {
        let err = CarryError::InvalidThreshold {
            value: 12.5,
            min: 0.0,
            max: 10.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("12.5"));
        assert!(msg.contains("[0, 10]"));
    }
}
