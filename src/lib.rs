//! # Tipper - Markdown on Receipt Paper
//!
//! Tipper prints markdown on a 58mm ESC/POS thermal printer that runs in
//! upside-down mode, so notes read top to bottom when they tear off. It
//! provides:
//!
//! - **Protocol implementation**: ESC/POS command builders
//! - **Markdown transducer**: styles, quote indentation and reverse word wrap
//! - **Receipt jobs**: dated receipts with an inverse header
//! - **Transport**: raw serial tty
//! - **HTTP intake**: a small form and `/submit` endpoint feeding a print queue
//!
//! ## Quick Start
//!
//! ```no_run
//! use tipper::{
//!     printer::PrinterConfig,
//!     receipt::{Receipt, current_date},
//!     transport::SerialTransport,
//! };
//!
//! let config = PrinterConfig::CSN_A5;
//! let job = Receipt::message("# Groceries\n\n- milk\n- **eggs**", current_date())
//!     .build(&config)?;
//!
//! let mut transport = SerialTransport::open("/dev/ttyUSB0", &config)?;
//! transport.write_all(&job)?;
//!
//! # Ok::<(), tipper::error::TipperError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`markdown`] | Markdown to printer bytes |
//! | [`receipt`] | Complete print jobs and dates |
//! | [`transport`] | Communication backends |
//! | [`server`] | HTTP intake and print worker |
//! | [`printer`] | Printer configurations |
//! | [`error`] | Error types |

pub mod error;
pub mod markdown;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod server;
pub mod transport;

// Re-exports for convenience
pub use error::TipperError;
pub use printer::PrinterConfig;
pub use transport::SerialTransport;
