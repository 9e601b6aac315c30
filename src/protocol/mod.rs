//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS command
//! set used by small serial thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Device commands (init, upside-down mode, feed)
//! - [`text`]: Text styling (print mode, size, underline, inverse, margin)
//!
//! ## Usage Example
//!
//! ```
//! use tipper::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//!
//! // Initialize printer and flip it
//! data.extend(commands::init());
//! data.extend(commands::upside_down(true));
//!
//! // Inverse header line
//! data.extend(text::inverse(true));
//! data.extend(b"Sat, 06 Jun 2025\n");
//! data.extend(text::inverse(false));
//!
//! data.extend(commands::feed_lines(2));
//!
//! // Send `data` to printer via transport...
//! ```

pub mod commands;
pub mod text;
