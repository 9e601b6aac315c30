//! # ESC/POS Device Commands
//!
//! This module implements the device-level commands of the ESC/POS command
//! set spoken by small serial thermal receipt printers (CSN-A5 and friends).
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC { n`, `GS L nL nH`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x0100 is sent as bytes `[0x00, 0x01]`
//!
//! ## Compatibility
//!
//! The exact byte values here are the contract with the physical hardware.
//! Changing any of them changes what the printer does.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for character size, inverse video and layout commands.
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line spacing amount.
pub const LF: u8 = 0x0A;

/// CR (Carriage Return)
///
/// Ignored by most ESC/POS firmware; sent ahead of LF where a line is
/// terminated the way a serial console would.
pub const CR: u8 = 0x0D;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Sent at the start of
/// each print job.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Print mode, underline and inverse disabled
/// - Character size reset to 1x1
/// - Left margin reset to 0
/// - Upside-down mode disabled
///
/// ## Example
///
/// ```
/// use tipper::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// ORIENTATION
// ============================================================================

/// # Upside-Down Printing (ESC { n)
///
/// Rotates every printed line by 180°.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC { n |
/// | Hex     | 1B 7B n |
/// | Decimal | 27 123 n |
///
/// ## Line Order
///
/// The printer still prints lines in the order it receives them, so once the
/// receipt is turned around to be read, the last line sent is on top. Text
/// that must read top-to-bottom has to be sent bottom line first.
///
/// ```text
/// sent:  L1, L2, L3        paper (rotated for reading):
///                          ┌──────┐
///                          │  L3  │
///                          │  L2  │
///                          │  L1  │
///                          └──────┘
/// ```
///
/// ## Example
///
/// ```
/// use tipper::protocol::commands;
///
/// assert_eq!(commands::upside_down(true), vec![0x1B, 0x7B, 0x01]);
/// assert_eq!(commands::upside_down(false), vec![0x1B, 0x7B, 0x00]);
/// ```
#[inline]
pub fn upside_down(on: bool) -> Vec<u8> {
    vec![ESC, b'{', on as u8]
}

// ============================================================================
// PAPER FEEDING
// ============================================================================

/// # Feed Lines (LF × n)
///
/// Advances the paper by `n` lines by sending `n` line feeds. The firmware
/// this crate targets does not reliably honour `ESC d`, so plain LFs are used.
///
/// ## Example
///
/// ```
/// use tipper::protocol::commands;
///
/// assert_eq!(commands::feed_lines(2), vec![0x0A, 0x0A]);
/// assert!(commands::feed_lines(0).is_empty());
/// ```
#[inline]
pub fn feed_lines(n: usize) -> Vec<u8> {
    vec![LF; n]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ESC/POS uses little-endian encoding for all multi-byte integers.
///
/// ## Example
///
/// ```
/// use tipper::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(256), [0x00, 0x01]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
