//! Error taxonomy for calculator inputs and computation
//!
//! Validation errors are always the caller's fault and map to a 400-class
//! response; computation errors should not occur once validation has passed
//! and map to a 500-class response.

use thiserror::Error;

/// Errors produced by the calculators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A required field was absent from the request body
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A numeric field was outside its calculator-specific domain.
    /// The message names the field and the violated bound, e.g.
    /// "Interest rate must be between 1% and 15%".
    #[error("{0}")]
    OutOfRange(String),

    /// A string field did not match any recognized value
    #[error("Invalid value for {field}: expected one of {expected}")]
    InvalidEnum {
        field: &'static str,
        expected: &'static str,
    },

    /// Internal fault; unreachable given passing validation
    #[error("Internal computation error: {0}")]
    Computation(String),
}

impl CalcError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into())
    }

    /// Whether this error is a validation failure (caller's fault, 400-class)
    /// as opposed to an internal fault (500-class)
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Computation(_))
    }

    /// Classify a serde_json deserialization failure of a request body.
    ///
    /// serde reports absent required fields as "missing field `name`"; those
    /// become `MissingField` so the caller sees which field to supply. Any
    /// other parse failure is surfaced verbatim as an out-of-range input.
    pub fn from_deserialize(err: &serde_json::Error) -> Self {
        let message = err.to_string();
        if let Some(rest) = message.strip_prefix("missing field `") {
            if let Some(field) = rest.split('`').next() {
                return Self::missing(field);
            }
        }
        Self::OutOfRange(format!("Invalid request body: {}", message))
    }
}
