//! # Payment Gateway Trait
//!
//! Seam between order creation and the provider that actually books the
//! order. The production implementation is `pay_razorpay::RazorpayClient`;
//! tests plug in an in-memory gateway.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │        PaymentGateway (trait)            │
//! │  ├── create_order()                      │
//! │  └── provider_name()                     │
//! └──────────────────────────────────────────┘
//!                    ▲
//!          ┌─────────┴─────────┐
//!  ┌───────┴───────┐   ┌───────┴───────┐
//!  │RazorpayClient │   │  test stubs   │
//!  └───────────────┘   └───────────────┘
//! ```

use crate::error::PaymentResult;
use crate::order::OrderRequest;
use async_trait::async_trait;
use std::sync::Arc;

/// A payment gateway capable of booking orders.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Book an order with the gateway.
    ///
    /// Returns the gateway's order object exactly as the gateway sent it.
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<serde_json::Value>;

    /// Get the provider name (for logging and error attribution).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
