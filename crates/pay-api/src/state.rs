//! # Application State
//!
//! Startup configuration and the shared state handed to every handler.
//! Configuration is read from the environment once; after that everything is
//! immutable.

use axum::http::HeaderValue;
use pay_core::{
    BoxedPaymentGateway, OrderCreator, PaymentConfig, PaymentError, PaymentResult,
    PaymentVerifier,
};
use pay_razorpay::{RazorpayClient, DEFAULT_API_BASE_URL};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

const DEFAULT_PORT: u16 = 8080;

/// Application configuration.
///
/// Only obtainable through `from_env`/`from_lookup`, so every instance has
/// passed validation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    host: IpAddr,
    port: u16,
    allowed_origins: Vec<HeaderValue>,
    api_base_url: String,
    payment: PaymentConfig,
}

impl AppConfig {
    /// Load from environment variables (and `.env` if present).
    ///
    /// Required env vars:
    /// - `RAZORPAY_API_KEY`
    /// - `RAZORPAY_SECRET_KEY`
    pub fn from_env() -> PaymentResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> PaymentResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = var("RAZORPAY_API_KEY").ok_or_else(|| {
            PaymentError::Configuration("RAZORPAY_API_KEY not set".to_string())
        })?;
        let secret_key = var("RAZORPAY_SECRET_KEY").ok_or_else(|| {
            PaymentError::Configuration("RAZORPAY_SECRET_KEY not set".to_string())
        })?;
        let payment = PaymentConfig::new(api_key, secret_key)?;

        let port = match var("PORT") {
            Some(p) => p.trim().parse::<u16>().map_err(|_| {
                PaymentError::Configuration(format!("PORT is not a valid port: {}", p))
            })?,
            None => DEFAULT_PORT,
        };

        // Namespaced: many shells export HOST as the machine's hostname.
        let host = match var("PAYGATE_HOST") {
            Some(h) => h.trim().parse::<IpAddr>().map_err(|_| {
                PaymentError::Configuration(format!(
                    "PAYGATE_HOST is not a valid IP address: {}",
                    h
                ))
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let allowed_origins = parse_origins(var("ALLOWED_ORIGINS").as_deref().unwrap_or(""))?;

        let api_base_url =
            var("RAZORPAY_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            host,
            port,
            allowed_origins,
            api_base_url,
            payment,
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Port to listen on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Origins allowed by CORS
    pub fn allowed_origins(&self) -> &[HeaderValue] {
        &self.allowed_origins
    }

    /// Razorpay API host
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Gateway credentials
    pub fn payment(&self) -> &PaymentConfig {
        &self.payment
    }
}

/// Split a comma-separated origin list. Wildcards are refused because
/// credentialed CORS cannot use them.
fn parse_origins(raw: &str) -> PaymentResult<Vec<HeaderValue>> {
    let mut origins = Vec::new();

    for origin in raw.split(',').map(str::trim).filter(|o| !o.is_empty()) {
        if origin == "*" {
            return Err(PaymentError::Configuration(
                "ALLOWED_ORIGINS cannot contain '*' when credentials are allowed".to_string(),
            ));
        }
        let value = HeaderValue::from_str(origin).map_err(|_| {
            PaymentError::Configuration(format!(
                "ALLOWED_ORIGINS contains an invalid origin: {}",
                origin
            ))
        })?;
        origins.push(value);
    }

    Ok(origins)
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Order creation through the gateway
    pub orders: OrderCreator,
    /// Payment signature checks
    pub verifier: PaymentVerifier,
}

impl AppState {
    /// Create state backed by the Razorpay API
    pub fn new(config: &AppConfig) -> PaymentResult<Self> {
        let client = RazorpayClient::new(config.payment().clone())?
            .with_api_base_url(config.api_base_url());

        Ok(Self::with_gateway(config.payment(), Arc::new(client)))
    }

    /// Create state around an arbitrary gateway
    pub fn with_gateway(payment: &PaymentConfig, gateway: BoxedPaymentGateway) -> Self {
        Self {
            orders: OrderCreator::new(gateway),
            verifier: PaymentVerifier::new(payment),
        }
    }
}
