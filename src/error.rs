// Error taxonomy - small, local, recoverable
// Every failure is scoped to a single operation; there is no fatal class.

use thiserror::Error;

/// Result type alias for dev-toolbox operations
pub type Result<T> = std::result::Result<T, ToolError>;

#[derive(Error, Debug)]
pub enum ToolError {
    /// Color input did not match the expected textual pattern
    #[error("Invalid {expected} format")]
    InvalidFormat { expected: String },

    /// Malformed encoded input (Base64, percent-encoding, UTF-8)
    #[error("Decode error: {reason}")]
    Decode { reason: String },

    /// Password generation requested with every character class disabled
    #[error("Please select at least one character type")]
    NoCharacterSetSelected,

    /// Input is not valid JSON
    #[error("Invalid JSON: {reason}")]
    InvalidJson { reason: String },

    /// Configuration value outside its allowed range
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Raster encoding failed
    #[error("Render error: {message}")]
    Render { message: String },

    /// CSV or JSON export assembly failed
    #[error("Export error: {reason}")]
    Export { reason: String },
}

impl ToolError {
    /// Invalid color format, naming the expected format family
    pub fn invalid_format(expected: impl Into<String>) -> Self {
        ToolError::InvalidFormat {
            expected: expected.into(),
        }
    }

    /// Decode failure with a reason
    pub fn decode(reason: impl Into<String>) -> Self {
        ToolError::Decode {
            reason: reason.into(),
        }
    }

    /// Out-of-range parameter
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        ToolError::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Export assembly failure with a reason
    pub fn export(reason: impl ToString) -> Self {
        ToolError::Export {
            reason: reason.to_string(),
        }
    }
}
