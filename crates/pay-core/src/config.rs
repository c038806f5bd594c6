//! # Payment Configuration
//!
//! Gateway credentials shared by order creation and signature verification.
//! Built once at startup and never mutated afterwards.

use crate::error::{PaymentError, PaymentResult};
use std::fmt;

/// Razorpay key prefix for test-mode credentials
const TEST_KEY_PREFIX: &str = "rzp_test_";

/// Razorpay key prefix for live-mode credentials
const LIVE_KEY_PREFIX: &str = "rzp_live_";

/// Gateway credentials.
///
/// `Debug` never prints the secret key.
#[derive(Clone)]
pub struct PaymentConfig {
    api_key: String,
    secret_key: String,
}

impl PaymentConfig {
    /// Create a config, rejecting empty credentials.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> PaymentResult<Self> {
        let api_key = api_key.into();
        let secret_key = secret_key.into();

        if api_key.trim().is_empty() {
            return Err(PaymentError::Configuration("API key is empty".to_string()));
        }
        if secret_key.trim().is_empty() {
            return Err(PaymentError::Configuration(
                "secret key is empty".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            secret_key,
        })
    }

    /// Public key id (`rzp_test_...` / `rzp_live_...`)
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Shared secret used for gateway auth and signature checks
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.api_key.starts_with(TEST_KEY_PREFIX)
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.api_key.starts_with(LIVE_KEY_PREFIX)
    }

    /// Mode label for startup logs
    pub fn mode(&self) -> &'static str {
        if self.is_live_mode() {
            "live"
        } else if self.is_test_mode() {
            "test"
        } else {
            "unknown"
        }
    }
}

impl fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
