//! Command emitter: the single point where bytes leave the transducer.
//!
//! Writes are fire-and-forget. A failing sink never stops rendering; the
//! first error is kept so the caller can report it once the document is done.

use std::io::{self, Write};

use tracing::warn;

use crate::protocol::commands::LF;

/// Byte writer in front of the printer's output channel.
///
/// No buffering or reordering happens here. Bytes reach the sink in exactly
/// the order the emit calls were made.
#[derive(Debug)]
pub struct Emitter<W: Write> {
    sink: W,
    error: Option<io::Error>,
    written: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            error: None,
            written: 0,
        }
    }

    /// Write one control or text byte.
    #[inline]
    pub fn emit_byte(&mut self, b: u8) {
        self.emit_bytes(&[b]);
    }

    /// Write a run of bytes. Empty slices are a no-op.
    pub fn emit_bytes(&mut self, buf: &[u8]) {
        if buf.is_empty() {
            return;
        }

        match self.sink.write_all(buf) {
            Ok(()) => self.written += buf.len(),
            Err(e) => {
                if self.error.is_none() {
                    warn!(error = %e, "printer sink rejected write, continuing");
                    self.error = Some(e);
                }
            }
        }
    }

    /// Write a line feed.
    #[inline]
    pub fn emit_newline(&mut self) {
        self.emit_byte(LF);
    }

    /// Bytes accepted by the sink so far.
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// First write error seen, if any. Clears it.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that refuses everything.
    struct Unplugged;

    impl Write for Unplugged {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "unplugged"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_bytes_arrive_in_call_order() {
        let mut out = Emitter::new(Vec::new());
        out.emit_byte(0x1B);
        out.emit_bytes(b"!\x08");
        out.emit_bytes(b"hi");
        out.emit_newline();
        assert_eq!(out.bytes_written(), 6);
        assert_eq!(out.into_inner(), b"\x1B!\x08hi\n".to_vec());
    }

    #[test]
    fn test_empty_write_is_noop() {
        let mut out = Emitter::new(Vec::new());
        out.emit_bytes(&[]);
        assert_eq!(out.bytes_written(), 0);
        assert!(out.take_error().is_none());
    }

    #[test]
    fn test_failing_sink_is_recorded_not_fatal() {
        let mut out = Emitter::new(Unplugged);
        out.emit_bytes(b"first");
        out.emit_newline();
        let err = out.take_error().expect("error should be recorded");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(out.bytes_written(), 0);
        // Only the first error is kept
        assert!(out.take_error().is_none());
    }
}
