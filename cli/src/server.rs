//! # HTTP Control Endpoint
//!
//! Three read-style actions mapping one-to-one onto the core operations,
//! plain-text bodies throughout:
//!
//! | Path         | Operation        | On failure              |
//! |--------------|------------------|-------------------------|
//! | `/turn-on`   | wake broadcast   | 500 + diagnostic text   |
//! | `/turn-off`  | shutdown command | 500 + diagnostic text   |
//! | `/is-online` | liveness probe   | never fails, 200 + bool |
//!
//! The endpoint owns the outcome-to-status translation; the core never
//! renders HTTP. No authentication — the agent assumes a trusted private
//! network.

use anyhow::Context;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::{error, info};
use wolctl_core::PowerControl;

/// Binds the endpoint on the configured port and serves until ctrl-c.
pub async fn serve(control: PowerControl) -> anyhow::Result<()> {
    let port: u16 = control.config().http_port;
    let app: Router = router(control);

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("binding control endpoint on port {port}"))?;
    info!("control endpoint listening on port {port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("control endpoint terminated")
}

fn router(control: PowerControl) -> Router {
    Router::new()
        .route("/turn-on", get(turn_on))
        .route("/turn-off", get(turn_off))
        .route("/is-online", get(is_online))
        .with_state(control)
}

async fn turn_on(State(control): State<PowerControl>) -> (StatusCode, String) {
    info!("wake requested for {}", control.config().mac);
    match control.wake().await {
        Ok(()) => (StatusCode::OK, "Magic packet sent.".to_string()),
        Err(e) => {
            error!("wake failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to send magic packet: {e}"),
            )
        }
    }
}

async fn turn_off(State(control): State<PowerControl>) -> (StatusCode, String) {
    let cfg = control.config();
    info!(
        "shutdown requested for {}:{}",
        cfg.target_addr, cfg.shutdown_port
    );
    match control.shutdown().await {
        Ok(()) => (StatusCode::OK, "Shutdown command sent.".to_string()),
        Err(e) => {
            error!("shutdown failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to send shutdown command: {e}"),
            )
        }
    }
}

async fn is_online(State(control): State<PowerControl>) -> String {
    let online: bool = control.is_online().await;
    info!("liveness probe: target is {}", if online { "online" } else { "offline" });
    online.to_string()
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            // Without a signal handler we can still serve; just never
            // resolve so graceful shutdown stays disarmed.
            error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
