//! # HTTP Intake
//!
//! Accepts receipts over HTTP and prints them one at a time.
//!
//! ## Usage
//!
//! ```bash
//! tipper serve --listen 0.0.0.0:8080 --device /dev/ttyUSB0
//! ```
//!
//! ## Routes
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /` | Submission form |
//! | `GET /submit?message=..&date=..` | Queue a receipt from the query string |
//! | `POST /submit` | Queue a receipt from a urlencoded form or the query string |
//! | anything else | 404, plain text |
//!
//! `/submit` answers as soon as the receipt is queued; printing happens on
//! the worker.

mod handlers;
mod page;
mod state;
pub mod worker;

pub use state::{AppState, ServerConfig};

use axum::{Router, routing::get};
use tokio::sync::mpsc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{Result, TipperError};
use crate::receipt::Receipt;

/// Build the router over an existing job queue.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/submit",
            get(handlers::submit_query).post(handlers::submit_form),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server and the print worker.
///
/// The startup banner is the first job queued.
///
/// ## Example
///
/// ```no_run
/// use tipper::printer::PrinterConfig;
/// use tipper::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), tipper::error::TipperError> {
/// let config = ServerConfig {
///     device_path: "/dev/ttyUSB0".to_string(),
///     listen_addr: "0.0.0.0:8080".to_string(),
///     printer: PrinterConfig::CSN_A5,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<()> {
    let (tx, rx) = mpsc::channel::<Receipt>(worker::QUEUE_CAPACITY);
    let sink = worker::serial_sink(config.device_path.clone(), config.printer);
    tokio::spawn(worker::run(rx, config.printer, sink));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            TipperError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;
    let local = listener
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| config.listen_addr.clone());

    info!(
        listen = %local,
        device = %config.device_path,
        printer = config.printer.name,
        "tipper HTTP server started"
    );

    tx.send(Receipt::banner(&local))
        .await
        .map_err(|_| TipperError::Transport("print worker stopped".to_string()))?;

    axum::serve(listener, router(AppState::new(tx)))
        .await
        .map_err(|e| TipperError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
