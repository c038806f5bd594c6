//! # pay-core
//!
//! Core types and traits for the paygate order and verification service.
//!
//! This crate provides:
//! - `PaymentConfig` holding the gateway credentials
//! - `OrderCreator` and `OrderRequest` for booking orders
//! - `PaymentGateway` trait for plugging in the provider
//! - `PaymentVerifier` for checking payment signatures
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{OrderCreator, PaymentConfig, PaymentVerifier, VerificationRequest};
//!
//! let config = PaymentConfig::new("rzp_test_...", secret)?;
//!
//! // Book an order for ₹1.00
//! let creator = OrderCreator::new(gateway);
//! let order = creator.create_order(100).await?;
//!
//! // Later, check the checkout callback
//! let verifier = PaymentVerifier::new(&config);
//! let ok = verifier.verify(&VerificationRequest::new(order_id, payment_id, signature))?;
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod order;
pub mod signature;

// Re-exports for convenience
pub use config::PaymentConfig;
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use order::{OrderCreator, OrderRequest, ORDER_CURRENCY};
pub use signature::{
    canonical_message, compute_signature, verify_signature, PaymentVerifier, VerificationRequest,
};
