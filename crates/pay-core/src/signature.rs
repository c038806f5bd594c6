//! # Payment Signature Verification
//!
//! Checks the signature Razorpay hands to the client after checkout.
//!
//! The gateway signs `order_id|payment_id` with HMAC-SHA256 keyed by the
//! merchant secret and hex-encodes the digest in lowercase. We rebuild the
//! same message, compute the digest, and compare in constant time.
//!
//! ```text
//!   order_id ──┐
//!              ├── "order_id|payment_id" ── HMAC-SHA256(secret) ── hex ──┐
//!   payment_id ┘                                                         ├── ct_eq ── bool
//!   claimed signature ──────────────────────────────────────────────────┘
//! ```

use crate::config::PaymentConfig;
use crate::error::{PaymentError, PaymentResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::debug;

type HmacSha256 = Hmac<Sha256>;

/// Separator between order id and payment id in the signed message.
/// Fixed by the gateway's signing convention.
pub const SIGNATURE_DELIMITER: char = '|';

/// Build the exact message the gateway signs
pub fn canonical_message(server_order_id: &str, payment_id: &str) -> String {
    format!("{}{}{}", server_order_id, SIGNATURE_DELIMITER, payment_id)
}

/// HMAC-SHA256 of `message` under `secret`, lowercase hex
pub fn compute_signature(secret: &[u8], message: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a claimed signature for an order/payment pair.
///
/// Returns `true` only on an exact byte match. The comparison does not exit
/// early on the first differing byte.
pub fn verify_signature(
    server_order_id: &str,
    payment_id: &str,
    claimed_signature: &str,
    secret: &[u8],
) -> bool {
    let message = canonical_message(server_order_id, payment_id);
    let expected = compute_signature(secret, &message);
    expected
        .as_bytes()
        .ct_eq(claimed_signature.as_bytes())
        .into()
}

/// A payment completion callback to be checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    /// Order id we received from the gateway when creating the order
    pub server_order_id: String,
    /// Payment id reported by the checkout
    pub payment_id: String,
    /// Hex signature reported by the checkout
    pub claimed_signature: String,
}

impl VerificationRequest {
    pub fn new(
        server_order_id: impl Into<String>,
        payment_id: impl Into<String>,
        claimed_signature: impl Into<String>,
    ) -> Self {
        Self {
            server_order_id: server_order_id.into(),
            payment_id: payment_id.into(),
            claimed_signature: claimed_signature.into(),
        }
    }

    /// All three fields must be present and non-empty
    pub fn validate(&self) -> PaymentResult<()> {
        let missing: Vec<&str> = [
            ("order_id", &self.server_order_id),
            ("razorpay_payment_id", &self.payment_id),
            ("razorpay_signature", &self.claimed_signature),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PaymentError::InvalidInput(format!(
                "required field(s) empty: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Verifies payment signatures with the merchant secret.
///
/// Cheap to clone; holds only the secret.
#[derive(Clone)]
pub struct PaymentVerifier {
    secret_key: Arc<str>,
}

impl PaymentVerifier {
    /// Create a verifier from the payment config
    pub fn new(config: &PaymentConfig) -> Self {
        Self {
            secret_key: Arc::from(config.secret_key()),
        }
    }

    /// Check a verification request.
    ///
    /// `Ok(false)` is a normal negative result. `Err(InvalidInput)` means the
    /// request was incomplete and no comparison was attempted.
    pub fn verify(&self, request: &VerificationRequest) -> PaymentResult<bool> {
        request.validate()?;

        let valid = verify_signature(
            &request.server_order_id,
            &request.payment_id,
            &request.claimed_signature,
            self.secret_key.as_bytes(),
        );

        debug!(
            "Signature check for order {}: {}",
            request.server_order_id,
            if valid { "match" } else { "mismatch" }
        );

        Ok(valid)
    }
}

impl std::fmt::Debug for PaymentVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentVerifier")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
