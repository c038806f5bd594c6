//! # pay-api
//!
//! HTTP API layer for paygate.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Order creation backed by Razorpay
//! - Payment signature verification
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/orders` | Create order |
//! | POST | `/api/v1/verify` | Verify payment signature |

pub mod handlers;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_support;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
