//! # Order Types
//!
//! Order requests sent to the gateway and the `OrderCreator` that sends them.

use crate::error::{PaymentError, PaymentResult};
use crate::gateway::BoxedPaymentGateway;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, instrument};

/// Every order is booked in Indian rupees
pub const ORDER_CURRENCY: &str = "INR";

/// Prefix of generated receipt ids
pub const RECEIPT_PREFIX: &str = "rcpt_";

/// Notes key recording when the order was built
pub const NOTE_CREATED_AT: &str = "created_at";

/// Order payload sent to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Amount in the smallest currency unit (paise)
    pub amount: i64,

    /// ISO 4217 currency code
    pub currency: String,

    /// Merchant receipt id, unique per order
    pub receipt: String,

    /// Free-form key/value metadata
    #[serde(default)]
    pub notes: HashMap<String, String>,
}

impl OrderRequest {
    /// Build an order request stamped with the current time
    pub fn new(amount: i64) -> PaymentResult<Self> {
        Self::at(amount, Utc::now())
    }

    /// Build an order request stamped with `now`
    pub fn at(amount: i64, now: DateTime<Utc>) -> PaymentResult<Self> {
        if amount < 1 {
            return Err(PaymentError::InvalidInput(format!(
                "amount must be a positive integer, got {}",
                amount
            )));
        }

        let mut notes = HashMap::new();
        notes.insert(
            NOTE_CREATED_AT.to_string(),
            now.to_rfc3339_opts(SecondsFormat::Secs, true),
        );

        Ok(Self {
            amount,
            currency: ORDER_CURRENCY.to_string(),
            receipt: format!("{}{}", RECEIPT_PREFIX, now.timestamp_micros()),
            notes,
        })
    }
}

/// Creates orders through a payment gateway.
#[derive(Clone)]
pub struct OrderCreator {
    gateway: BoxedPaymentGateway,
}

impl OrderCreator {
    pub fn new(gateway: BoxedPaymentGateway) -> Self {
        Self { gateway }
    }

    /// Name of the gateway behind this creator
    pub fn provider_name(&self) -> &'static str {
        self.gateway.provider_name()
    }

    /// Create an order for `amount` paise.
    ///
    /// Invalid amounts fail before the gateway is contacted. Gateway failures
    /// are returned as-is; there are no retries.
    #[instrument(skip(self), fields(provider = self.gateway.provider_name()))]
    pub async fn create_order(&self, amount: i64) -> PaymentResult<serde_json::Value> {
        let request = OrderRequest::new(amount)?;

        info!(
            "Creating order: amount={} {}, receipt={}",
            request.amount, request.currency, request.receipt
        );

        let order = self.gateway.create_order(&request).await?;

        info!(
            "Created order: id={}",
            order.get("id").and_then(|v| v.as_str()).unwrap_or("unknown")
        );

        Ok(order)
    }
}
