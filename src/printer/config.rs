//! # Printer Configuration
//!
//! This module defines hardware specifications for supported thermal printers.
//!
//! ## Supported Printers
//!
//! | Model | Width (dots) | Columns | Indent unit | Max indent | Serial chunk |
//! |-------|--------------|---------|-------------|------------|--------------|
//! | CSN-A5 (58mm) | 384 | 32 | 16 dots | 16 levels | 256 B / 20 ms |
//! | Generic 80mm | 576 | 48 | 16 dots | 16 levels | 256 B / 20 ms |
//!
//! ## Usage
//!
//! ```
//! use tipper::printer::PrinterConfig;
//!
//! let config = PrinterConfig::CSN_A5;
//! println!("{} columns, {} dots", config.columns, config.width_dots);
//! ```

/// # Printer Configuration
///
/// Defines the characteristics of a thermal printer that the markdown
/// transducer depends on.
///
/// ## Layout Properties
///
/// - **columns**: Characters per line in font A at 1× size. This is the
///   word-wrap width.
/// - **indent_unit**: Left margin added per quote level, in dots
/// - **max_indent_level**: Ceiling for nested quote indentation
///
/// ## Transport Pacing
///
/// - **chunk_size**: Bytes written to the serial port at a time
/// - **chunk_delay_ms**: Pause between chunks, so the receive buffer drains
///
/// ## Calculations
///
/// ```text
/// margin_dots = indent_level * indent_unit
///
/// For CSN-A5 at the ceiling:
///   16 * 16 = 256 dots (of 384)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Maximum print width in dots (pixels)
    pub width_dots: u16,

    /// Characters per line at normal size
    pub columns: usize,

    /// Left margin per indent level, in dots
    pub indent_unit: u16,

    /// Highest indent level the margin is allowed to reach
    pub max_indent_level: u8,

    /// Serial write size in bytes
    pub chunk_size: usize,

    /// Pause after each serial chunk, in milliseconds
    pub chunk_delay_ms: u64,
}

impl PrinterConfig {
    /// # CSN-A5 Configuration
    ///
    /// 58mm paper, serial TTL panel printer.
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Paper width | 58mm |
    /// | Print width | 48mm (384 dots) |
    /// | Characters per line | 32 |
    /// | Interface | TTL serial, 115200 8N1 |
    pub const CSN_A5: Self = Self {
        name: "CSN-A5",
        width_dots: 384,
        columns: 32,
        indent_unit: 16,
        max_indent_level: 16,
        chunk_size: 256,
        chunk_delay_ms: 20,
    };

    /// # Generic 80mm Configuration
    ///
    /// 72mm print head, 48 characters per line in font A.
    pub const GENERIC_80MM: Self = Self {
        name: "Generic 80mm",
        width_dots: 576,
        columns: 48,
        indent_unit: 16,
        max_indent_level: 16,
        chunk_size: 256,
        chunk_delay_ms: 20,
    };

    /// Same printer with a different wrap width.
    ///
    /// ```
    /// use tipper::printer::PrinterConfig;
    ///
    /// let narrow = PrinterConfig::CSN_A5.with_columns(10);
    /// assert_eq!(narrow.columns, 10);
    /// assert_eq!(narrow.width_dots, 384);
    /// ```
    #[must_use]
    pub fn with_columns(self, columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            ..self
        }
    }

    /// Parse a profile name (CLI args).
    ///
    /// Formats:
    /// - `"csn-a5"` / `"58mm"` → [`PrinterConfig::CSN_A5`]
    /// - `"80mm"` → [`PrinterConfig::GENERIC_80MM`]
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "csn-a5" | "csna5" | "58mm" => Ok(Self::CSN_A5),
            "80mm" => Ok(Self::GENERIC_80MM),
            _ => Err(format!(
                "Unknown printer '{}'. Use 'csn-a5', '58mm' or '80mm'",
                s
            )),
        }
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::CSN_A5
    }
}

// ============================================================================
// TESTS
// ============================================================================
