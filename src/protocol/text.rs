//! # ESC/POS Text Styling Commands
//!
//! This module implements the text formatting commands the transducer uses.
//!
//! ## Text Styling Overview
//!
//! Styles live on independent axes; setting one axis leaves the others alone:
//!
//! | Axis | Command | Effect |
//! |------|---------|--------|
//! | Print mode | ESC ! n | Small font, **emphasized** |
//! | Character size | GS ! n | 1-8× width and height |
//! | Underline | ESC - n | 1 or 2 dot underline |
//! | Inverse | GS B n | White on black |
//! | Left margin | GS L nL nH | Indent in dots |
//!
//! ## Unsupported Styles
//!
//! The device has no italic and no strikethrough. Italics are rendered by
//! the transducer as literal `*` markers; strikethrough is dropped.

use super::commands::{ESC, GS, u16_le};

// ============================================================================
// PRINT MODE
// ============================================================================

/// Print mode selector for `ESC ! n`.
///
/// The parameter is a bit field; flags are combined with `|`.
///
/// | Bit | Hex | Meaning |
/// |-----|-----|---------|
/// | 0 | 0x01 | Small characters (font B) |
/// | 3 | 0x08 | Emphasized (bold) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PrintMode(pub u8);

impl PrintMode {
    /// Font A, no emphasis
    pub const DEFAULT: Self = Self(0x00);
    /// Small characters (font B)
    pub const SMALL: Self = Self(0x01);
    /// Emphasized
    pub const BOLD: Self = Self(0x08);

    /// Combine two modes.
    #[inline]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl std::ops::BitOr for PrintMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

/// # Select Print Mode (ESC ! n)
///
/// Selects font and emphasis for subsequent text.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC ! n |
/// | Hex     | 1B 21 n |
/// | Decimal | 27 33 n |
///
/// ## Example
///
/// ```
/// use tipper::protocol::text::{print_mode, PrintMode};
///
/// assert_eq!(print_mode(PrintMode::BOLD), vec![0x1B, 0x21, 0x08]);
/// assert_eq!(print_mode(PrintMode::DEFAULT), vec![0x1B, 0x21, 0x00]);
/// ```
#[inline]
pub fn print_mode(mode: PrintMode) -> Vec<u8> {
    vec![ESC, b'!', mode.0]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Character size for `GS ! n`.
///
/// Width multiplier lives in the high nibble, height in the low nibble,
/// both zero-based (0 = 1×, 1 = 2×, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CharacterSize(pub u8);

impl CharacterSize {
    /// 1× width, 1× height
    pub const NORMAL: Self = Self(0x00);

    /// Build a size from 1-based multipliers, clamped to 1..=8.
    ///
    /// ```
    /// use tipper::protocol::text::CharacterSize;
    ///
    /// assert_eq!(CharacterSize::new(3, 3), CharacterSize(0x22));
    /// assert_eq!(CharacterSize::new(2, 1), CharacterSize(0x10));
    /// ```
    pub const fn new(width: u8, height: u8) -> Self {
        let w = clamp_mult(width);
        let h = clamp_mult(height);
        Self((w << 4) | h)
    }
}

const fn clamp_mult(m: u8) -> u8 {
    match m {
        0 | 1 => 0,
        m if m > 8 => 7,
        m => m - 1,
    }
}

/// # Select Character Size (GS ! n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS ! n |
/// | Hex     | 1D 21 n |
/// | Decimal | 29 33 n |
///
/// ## Size Table (as used for headings)
///
/// | n | Width | Height |
/// |---|-------|--------|
/// | 0x22 | 3× | 3× |
/// | 0x21 | 3× | 2× |
/// | 0x11 | 2× | 2× |
/// | 0x10 | 2× | 1× |
/// | 0x00 | 1× | 1× |
///
/// ## Example
///
/// ```
/// use tipper::protocol::text::{character_size, CharacterSize};
///
/// assert_eq!(character_size(CharacterSize(0x11)), vec![0x1D, 0x21, 0x11]);
/// ```
#[inline]
pub fn character_size(size: CharacterSize) -> Vec<u8> {
    vec![GS, b'!', size.0]
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// Underline thickness for `ESC - n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum UnderlineWeight {
    #[default]
    Off = 0,
    /// 1 dot thick
    Thin = 1,
    /// 2 dots thick
    Thick = 2,
}

/// # Set Underline Mode (ESC - n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC - n |
/// | Hex     | 1B 2D n |
/// | Decimal | 27 45 n |
///
/// ## Parameters
///
/// - `n = 0`: Underline OFF
/// - `n = 1`: Underline ON (1 dot thick)
/// - `n = 2`: Underline ON (2 dots thick)
///
/// ## Note
///
/// Underline does not affect spaces on most firmware.
///
/// ## Example
///
/// ```
/// use tipper::protocol::text::{underline, UnderlineWeight};
///
/// assert_eq!(underline(UnderlineWeight::Thin), vec![0x1B, 0x2D, 0x01]);
/// ```
#[inline]
pub fn underline(weight: UnderlineWeight) -> Vec<u8> {
    vec![ESC, b'-', weight as u8]
}

// ============================================================================
// INVERSE VIDEO
// ============================================================================

/// # White/Black Reverse Printing (GS B n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS B n |
/// | Hex     | 1D 42 n |
/// | Decimal | 29 66 n |
///
/// ## Effect
///
/// ```text
/// Normal:   TEXT
/// Inverted: ████████
///           ░TEXT░░░
///           ████████
/// ```
///
/// Used for the date header of a receipt.
#[inline]
pub fn inverse(on: bool) -> Vec<u8> {
    vec![GS, b'B', on as u8]
}

// ============================================================================
// LEFT MARGIN
// ============================================================================

/// # Set Left Margin (GS L nL nH)
///
/// Sets the left margin to `nL + nH × 256` dots. Takes effect at the start
/// of the next line.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS L nL nH |
/// | Hex     | 1D 4C nL nH |
/// | Decimal | 29 76 nL nH |
///
/// ## Example
///
/// ```
/// use tipper::protocol::text::left_margin;
///
/// assert_eq!(left_margin(32), vec![0x1D, 0x4C, 0x20, 0x00]);
/// assert_eq!(left_margin(256), vec![0x1D, 0x4C, 0x00, 0x01]);
/// ```
pub fn left_margin(dots: u16) -> Vec<u8> {
    let [lo, hi] = u16_le(dots);
    vec![GS, b'L', lo, hi]
}

// ============================================================================
// TESTS
// ============================================================================
