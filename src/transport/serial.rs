//! # Serial Transport
//!
//! Sends job bytes to a thermal printer wired to a USB-serial adapter.
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode at 115200 baud, 8N1, so ESC/POS bytes
//! reach the printer untouched:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR,
//!   ICRNL and XON/XOFF flow control off
//! - **No output processing**: OPOST off (no LF to CRLF translation)
//! - **8-bit characters**: CS8, no parity
//! - **No echo, non-canonical**: ECHO, ECHONL, ICANON, ISIG, IEXTEN off
//!
//! ## Chunked Writes
//!
//! The printer has a small receive buffer and no flow control on the TX-only
//! wiring, so large jobs go out in chunks with a pause between them. Chunk
//! size and pause come from the [`PrinterConfig`].

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{Result, TipperError};
use crate::printer::PrinterConfig;

/// Default USB-serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// Line speed of the CSN-A5 serial interface
pub const BAUD_RATE: u32 = 115_200;

/// # Serial Printer Transport
///
/// ## Example
///
/// ```no_run
/// use tipper::printer::PrinterConfig;
/// use tipper::transport::SerialTransport;
/// use tipper::protocol::commands;
///
/// let mut transport = SerialTransport::open("/dev/ttyUSB0", &PrinterConfig::CSN_A5)?;
/// transport.write_all(&commands::init())?;
/// # Ok::<(), tipper::error::TipperError>(())
/// ```
#[derive(Debug)]
pub struct SerialTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl SerialTransport {
    /// Open the serial device and put it in raw mode, pacing writes the way
    /// `config` asks.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the dialout group)
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P, config: &PrinterConfig) -> Result<Self> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            TipperError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        #[cfg(unix)]
        configure_tty_raw(file.as_raw_fd())?;
        #[cfg(not(unix))]
        configure_tty_raw()?;
        info!(device = %path.display(), baud = BAUD_RATE, "serial printer opened");

        Ok(Self {
            file,
            chunk_size: config.chunk_size.max(1),
            chunk_delay: Duration::from_millis(config.chunk_delay_ms),
        })
    }

    /// Write a complete job to the printer and flush.
    pub fn write_all(&mut self, data: &[u8]) -> Result<()> {
        write_chunked(&mut self.file, data, self.chunk_size, self.chunk_delay)?;
        debug!(bytes = data.len(), "job sent");
        Ok(())
    }
}

/// Write `data` in `chunk_size` pieces, pausing `delay` after each piece
/// when more than one is needed.
fn write_chunked<W: Write>(
    sink: &mut W,
    data: &[u8],
    chunk_size: usize,
    delay: Duration,
) -> Result<()> {
    if data.len() <= chunk_size {
        sink.write_all(data)
            .map_err(|e| TipperError::Transport(format!("Write failed: {}", e)))?;
    } else {
        for chunk in data.chunks(chunk_size) {
            sink.write_all(chunk)
                .map_err(|e| TipperError::Transport(format!("Write failed: {}", e)))?;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
    }

    sink.flush()
        .map_err(|e| TipperError::Transport(format!("Flush failed: {}", e)))
}

/// Configure a file descriptor for raw TTY mode at [`BAUD_RATE`].
///
/// XON/XOFF must be off: 0x11 and 0x13 are valid bytes in `GS !` size
/// arguments.
#[cfg(unix)]
fn configure_tty_raw(fd: i32) -> Result<()> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(TipperError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // 8N1
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB | libc::CSTOPB);
    termios.c_cflag |= libc::CS8 | libc::CLOCAL;

    let speed_result = unsafe {
        libc::cfsetispeed(&mut termios, libc::B115200) | libc::cfsetospeed(&mut termios, libc::B115200)
    };
    if speed_result != 0 {
        return Err(TipperError::Transport(format!(
            "cfsetspeed failed: {}",
            io::Error::last_os_error()
        )));
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(TipperError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

/// No termios off Unix; the device is used as opened.
#[cfg(not(unix))]
fn configure_tty_raw() -> Result<()> {
    Ok(())
}
