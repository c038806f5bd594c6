//! # Payment Error Types
//!
//! Typed error handling for the paygate service.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid values). Fatal at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed or missing request fields
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The payment gateway call failed
    #[error("Upstream error [{provider}]: {message}")]
    Upstream { provider: String, message: String },

    /// Signature was computed but did not match the claimed one
    #[error("Payment signature mismatch")]
    SignatureMismatch,
}

impl PaymentError {
    /// Shorthand for an upstream failure from the given provider
    pub fn upstream(provider: impl Into<String>, message: impl Into<String>) -> Self {
        PaymentError::Upstream {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidInput(_) => 400,
            PaymentError::Upstream { .. } => 500,
            PaymentError::SignatureMismatch => 401,
        }
    }

    /// Message that is safe to return to an API caller.
    ///
    /// Upstream and configuration details stay server-side; mismatches never
    /// say which part of the signature was wrong.
    pub fn public_message(&self) -> &'static str {
        match self {
            PaymentError::InvalidInput(_) => "Invalid request format",
            PaymentError::Upstream { .. } => "Failed to create order",
            PaymentError::SignatureMismatch => "Invalid payment signature",
            PaymentError::Configuration(_) => "Internal server error",
        }
    }

    /// Caller-visible details, only for errors that carry no secrets
    pub fn public_details(&self) -> Option<&str> {
        match self {
            PaymentError::InvalidInput(details) => Some(details.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
