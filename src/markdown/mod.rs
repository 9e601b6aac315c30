//! # Markdown Transducer
//!
//! Turns a markdown document into the byte stream for an upside-down
//! thermal printer.
//!
//! ## Pipeline
//!
//! ```text
//! source ──► driver (pulldown-cmark) ──► DocumentHandler events
//!                                              │
//!                                              ▼
//!                                         Transducer
//!                                   ┌──────────┼──────────┐
//!                              StyleStacks  IndentTracker  WrapBuffer
//!                                   └──────────┼──────────┘
//!                                              ▼
//!                                     Emitter ──► io::Write
//! ```
//!
//! ## Example
//!
//! ```
//! use tipper::markdown;
//! use tipper::printer::PrinterConfig;
//!
//! let bytes = markdown::render("# Title", &PrinterConfig::CSN_A5)?;
//! assert_eq!(bytes, b"\x1D!\x22Title\x1D!\x00\x1B!\x00\n");
//! # Ok::<(), tipper::error::TipperError>(())
//! ```

pub mod driver;
pub mod emitter;
pub mod event;
pub mod indent;
pub mod style;
pub mod transducer;
pub mod wrap;

use std::io::Write;

use tracing::warn;

pub use driver::{ParseStatus, translate};
pub use event::{Block, DocumentHandler, Span, TextKind};
pub use transducer::Transducer;

use crate::error::Result;
use crate::printer::PrinterConfig;

/// Render `source` into a fresh byte vector.
///
/// ## Errors
///
/// Infallible for an in-memory sink in practice; the signature matches
/// [`render_to`].
pub fn render(source: &str, config: &PrinterConfig) -> Result<Vec<u8>> {
    render_to(source, config, Vec::new())
}

/// Render `source` into `sink` and hand the sink back.
///
/// ## Errors
///
/// Returns an error if the sink rejected any write. Rendering itself carries
/// on to the end of the document regardless.
pub fn render_to<W: Write>(source: &str, config: &PrinterConfig, sink: W) -> Result<W> {
    let mut transducer = Transducer::new(sink, config);
    let status = translate(source, &mut transducer);
    if !status.is_complete() {
        warn!(unbalanced = status.unbalanced, "markdown structure repaired");
    }
    transducer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_paragraph_reversed() {
        let config = PrinterConfig::CSN_A5.with_columns(10);
        let bytes = render("one two three", &config).unwrap();
        assert_eq!(bytes, b"three\none two\n\n".to_vec());
    }

    #[test]
    fn test_render_empty() {
        assert!(render("", &PrinterConfig::CSN_A5).unwrap().is_empty());
    }
}
