//! Shared fixtures for router and handler tests.

use crate::routes::create_router;
use crate::state::{AppConfig, AppState};
use async_trait::async_trait;
use axum::Router;
use pay_core::{OrderRequest, PaymentError, PaymentGateway, PaymentResult};
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// hex(HMAC-SHA256("testsecret", "order_ABC123|pay_XYZ789"))
pub const EXPECTED_SIGNATURE: &str =
    "8ab882b69975648bd036bb84b853484100f7addce5cead23e8a2d9ffe5ba21c8";

/// In-memory gateway that counts calls and can be told to fail
#[derive(Default)]
pub struct StubGateway {
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<serde_json::Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(PaymentError::upstream(
                "stub",
                "BAD_REQUEST_ERROR: Authentication failed",
            ));
        }
        Ok(json!({
            "id": "order_stub",
            "entity": "order",
            "amount": request.amount,
            "currency": request.currency,
            "receipt": request.receipt,
            "status": "created",
            "notes": request.notes,
        }))
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

pub fn app_config() -> AppConfig {
    AppConfig::from_lookup(|key: &str| {
        let value = match key {
            "RAZORPAY_API_KEY" => "rzp_test_key",
            "RAZORPAY_SECRET_KEY" => "testsecret",
            "PAYGATE_HOST" => "127.0.0.1",
            "ALLOWED_ORIGINS" => "http://localhost:3000",
            "RAZORPAY_API_BASE_URL" => "http://localhost:9999",
            _ => return None,
        };
        Some(value.to_string())
    })
    .unwrap()
}

/// Router wired to a fresh stub gateway
pub fn test_app() -> (Router, Arc<StubGateway>) {
    let config = app_config();
    let gateway = Arc::new(StubGateway::default());
    let state = AppState::with_gateway(config.payment(), gateway.clone());
    (create_router(state, &config), gateway)
}
