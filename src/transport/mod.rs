//! # Printer Transport Layer
//!
//! - [`serial`]: USB-serial tty in raw mode (Linux)
//!
//! Anything else that takes bytes is just an [`std::io::Write`]: the CLI
//! writes jobs to a file with `--output`.

pub mod serial;

pub use serial::SerialTransport;
