//! Portfolio Site Server
//!
//! Serves the rendered single page, the contact form endpoint, static assets
//! and the JSON API.
//!
//! Usage:
//!   cargo run --bin portfolio_site
//!
//! Environment:
//!   PORT / PORTFOLIO_PORT     - Server port (default: 8080)
//!   PORTFOLIO_HOST            - Server host (default: 0.0.0.0)
//!   PORTFOLIO_ASSETS          - Static asset directory (default: ./assets)
//!   PORTFOLIO_SUBMIT_DELAY_MS - Simulated contact delivery delay (default: 1500)
//!   PORTFOLIO_TITLE           - Document title
//!   PORTFOLIO_RATE_LIMIT      - Contact submissions per client per minute (default: 10)
//!   PORTFOLIO_TRUST_PROXY     - Rate limit by X-Forwarded-For instead of peer (default: false)
//!   RUST_LOG                  - Log filter (default: info)

use portfolio_site::api::{create_router, start_cleanup_task, AppState};
use portfolio_site::utils::constants::{APP_NAME, APP_VERSION};
use portfolio_site::{SiteConfig, TelemetryCollector};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    print_banner();

    let config = SiteConfig::from_env()?;
    let addr = config.bind_addr()?;
    if !config.assets_dir.is_dir() {
        warn!(
            "⚠️ Asset directory {} not found, images will fall back to placeholders",
            config.assets_dir.display()
        );
    }

    // Initialize telemetry
    let telemetry = Arc::new(TelemetryCollector::new());
    let telemetry_for_shutdown = telemetry.clone();

    // Create app state
    let state = Arc::new(AppState::new(config, telemetry));

    // Start background cleanup task for rate limiter
    start_cleanup_task(state.limiter.clone());
    info!("🧹 Background cleanup task started");

    let inbox = state.inbox.clone();
    let app = create_router(state);

    info!("🚀 {} starting on http://{}", APP_NAME, addr);
    info!("");
    info!("Endpoints:");
    info!("  GET  /                    - Portfolio page");
    info!("  POST /contact             - Contact form");
    info!("  GET  /v1/content          - Site content");
    info!("  GET  /v1/gallery          - Gallery by category");
    info!("  POST /v1/contact          - Contact message (JSON)");
    info!("  POST /v1/effects/tilt     - Tilt transform for a pointer sample");
    info!("  POST /v1/effects/parallax - Parallax frames for a scroll sample");
    info!("  POST /v1/effects/scroll   - Navbar and cube spin for a scroll offset");
    info!("  GET  /v1/stats            - Visitor statistics");
    info!("  GET  /v1/health           - Health check");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("⚠️ Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    // Peer addresses key the contact rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal)
    .await?;

    info!("");
    info!("🛑 Shutdown signal received");
    let stats = telemetry_for_shutdown.get_stats();
    info!("📊 Final statistics: {}", stats.summary());
    info!("📬 Messages kept in memory: {}", inbox.len());
    info!("👋 {} shutdown complete", APP_NAME);

    Ok(())
}

fn print_banner() {
    println!(
        r#"
    ╔══════════════════════════════════════════════════╗
    ║                                                  ║
    ║        P O R T F O L I O   S I T E               ║
    ║                                                  ║
    ║        Rust · Axum · Maud          v{:<10}   ║
    ║                                                  ║
    ╚══════════════════════════════════════════════════╝
    "#,
        APP_VERSION
    );
}
