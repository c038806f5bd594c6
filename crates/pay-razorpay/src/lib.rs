//! # pay-razorpay
//!
//! Razorpay gateway for paygate.
//!
//! `RazorpayClient` implements `pay_core::PaymentGateway` on top of the
//! Razorpay Orders API. Orders come back as the raw JSON object Razorpay
//! returns, so callers see every field the gateway sends.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_core::{OrderCreator, PaymentConfig};
//! use pay_razorpay::RazorpayClient;
//! use std::sync::Arc;
//!
//! let config = PaymentConfig::new("rzp_test_...", secret)?;
//! let creator = OrderCreator::new(Arc::new(RazorpayClient::new(config)?));
//!
//! let order = creator.create_order(50_000).await?; // ₹500.00
//! ```

pub mod client;

// Re-exports
pub use client::{RazorpayClient, DEFAULT_API_BASE_URL};
