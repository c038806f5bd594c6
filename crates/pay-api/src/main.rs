//! # Paygate
//!
//! Order creation and payment verification in front of Razorpay.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or put them in .env)
//! export RAZORPAY_API_KEY=rzp_test_...
//! export RAZORPAY_SECRET_KEY=...
//! export ALLOWED_ORIGINS=http://localhost:3000
//! export RUST_LOG_FORMAT=json   # optional, structured logs
//!
//! # Run the server
//! paygate
//! ```

use pay_api::{routes, state::AppConfig, state::AppState};
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    let registry = tracing_subscriber::registry().with(filter);

    if json_log_format(std::env::var("RUST_LOG_FORMAT").ok().as_deref()) {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    print_banner();

    // Refuse to start without complete credentials
    let config = AppConfig::from_env().map_err(|e| {
        error!("Startup aborted: {}", e);
        e
    })?;
    let state = AppState::new(&config)?;

    let addr = config.socket_addr();

    info!("Payment provider: {}", state.orders.provider_name());
    info!("Razorpay mode: {}", config.payment().mode());
    info!("Allowed origins: {:?}", config.allowed_origins());

    let app = routes::create_router(state, &config);

    info!("🚀 Paygate starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Paygate stopped");
    Ok(())
}

/// `RUST_LOG_FORMAT=json` switches to one JSON object per line
fn json_log_format(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("json"))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

fn print_banner() {
    println!(
        r#"
  ₹ Paygate ₹
  ━━━━━━━━━━━━━━━━━━━━━━━
  Razorpay order & verification service
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_log_format() {
        assert!(json_log_format(Some("json")));
        assert!(json_log_format(Some(" JSON ")));
        assert!(!json_log_format(Some("pretty")));
        assert!(!json_log_format(Some("")));
        assert!(!json_log_format(None));
    }
}
