//! FrameFit funnel server.
//!
//! Serves the eyewear-recommendation funnel: login, questionnaire wizard,
//! photo capture with simulated facial analysis, tier-gated
//! recommendations, premium virtual try-on, store locator, and upgrade
//! flow. All visitor state lives in per-session records backed by an
//! in-process memory store; no database is involved.

#![cfg_attr(not(test), forbid(unsafe_code))]

use framefit_web::config::FunnelConfig;
use framefit_web::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = FunnelConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "framefit_web=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let addr = config.socket_addr();
    let state = AppState::new(config);
    let app = framefit_web::app(state);

    tracing::info!("funnel listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
