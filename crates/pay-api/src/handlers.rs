//! # Request Handlers
//!
//! Axum request handlers for the payment API.
//! All request errors are turned into JSON responses here; nothing escapes
//! the handler boundary.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pay_core::{PaymentError, VerificationRequest};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create order request
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in paise
    pub amount: i64,
}

/// Verify payment request, as posted by the checkout page
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    pub order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

impl From<VerifyPaymentRequest> for VerificationRequest {
    fn from(req: VerifyPaymentRequest) -> Self {
        VerificationRequest::new(req.order_id, req.razorpay_payment_id, req.razorpay_signature)
    }
}

/// Verify payment response
#[derive(Debug, Serialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn payment_error_to_response(err: &PaymentError) -> ApiError {
    let mut response = ErrorResponse::new(err.public_message());
    if let Some(details) = err.public_details() {
        response = response.with_details(details);
    }
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response))
}

fn rejection_to_response(rejection: JsonRejection) -> ApiError {
    payment_error_to_response(&PaymentError::InvalidInput(rejection.body_text()))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "paygate",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a gateway order
#[instrument(skip(state, payload))]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(request) = payload.map_err(rejection_to_response)?;

    let order = state
        .orders
        .create_order(request.amount)
        .await
        .map_err(|e| {
            match &e {
                PaymentError::InvalidInput(_) => warn!("Rejected order request: {}", e),
                _ => error!("Error creating order: {}", e),
            }
            payment_error_to_response(&e)
        })?;

    Ok(Json(order))
}

/// Verify a payment signature
#[instrument(skip(state, payload))]
pub async fn verify_payment(
    State(state): State<AppState>,
    payload: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> Result<Json<VerifyPaymentResponse>, ApiError> {
    let Json(request) = payload.map_err(rejection_to_response)?;
    let request = VerificationRequest::from(request);

    let valid = state.verifier.verify(&request).map_err(|e| {
        warn!("Rejected verification request: {}", e);
        payment_error_to_response(&e)
    })?;

    if !valid {
        warn!(
            "Invalid payment signature: order={}, payment={}",
            request.server_order_id, request.payment_id
        );
        return Err(payment_error_to_response(&PaymentError::SignatureMismatch));
    }

    info!(
        "Payment verified: order={}, payment={}",
        request.server_order_id, request.payment_id
    );

    Ok(Json(VerifyPaymentResponse {
        success: true,
        message: "Payment verified successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error").with_details("more");
        assert_eq!(err.error, "Test error");
        assert_eq!(err.details.as_deref(), Some("more"));
    }

    #[test]
    fn test_payment_error_conversion() {
        let (status, Json(body)) =
            payment_error_to_response(&PaymentError::InvalidInput("Bad data".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid request format");
        assert_eq!(body.details.as_deref(), Some("Bad data"));

        let (status, Json(body)) = payment_error_to_response(&PaymentError::SignatureMismatch);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Invalid payment signature");
        assert!(body.details.is_none());
    }

    #[test]
    fn test_upstream_error_is_generic() {
        let err = PaymentError::upstream("razorpay", "BAD_REQUEST_ERROR: Authentication failed");
        let (status, Json(body)) = payment_error_to_response(&err);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to create order");
        assert!(body.details.is_none());
    }

    #[test]
    fn test_verify_request_mapping() {
        let req = VerifyPaymentRequest {
            order_id: "order_1".to_string(),
            razorpay_payment_id: "pay_1".to_string(),
            razorpay_signature: "abc".to_string(),
        };
        let mapped = VerificationRequest::from(req);
        assert_eq!(mapped, VerificationRequest::new("order_1", "pay_1", "abc"));
    }
}
