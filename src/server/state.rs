//! Server state and configuration.

use tokio::sync::mpsc;

use crate::printer::PrinterConfig;
use crate::receipt::Receipt;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the printer device (e.g., "/dev/ttyUSB0")
    pub device_path: String,
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Paper geometry used to lay out every job
    pub printer: PrinterConfig,
}

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Accepted receipts waiting for the print worker
    pub queue: mpsc::Sender<Receipt>,
}

impl AppState {
    pub fn new(queue: mpsc::Sender<Receipt>) -> Self {
        Self { queue }
    }
}
