//! # Receipt Jobs
//!
//! A receipt is one complete print job: a message body followed by a dated
//! header line in inverse video.
//!
//! ## Layout
//!
//! The printer runs upside down, so the job is sent bottom-up. The header is
//! sent *after* the body and ends up on top once the paper is turned around:
//!
//! ```text
//! sent                        read
//! ────────────────────        ────────────────────
//! ESC @, ESC { 1              ███ Sat, 07 Jun 2025 ███
//! body (reverse-wrapped)      body line 1
//! ███ header ███ CR LF       body line 2
//! LF LF                       ...
//! ```

use chrono::{NaiveDate, Utc};
use tracing::warn;

use crate::error::Result;
use crate::markdown::{Transducer, translate};
use crate::printer::PrinterConfig;
use crate::protocol::commands::{self, CR, LF};
use crate::protocol::text;

// ============================================================================
// DATES
// ============================================================================

/// Format a date the way receipt headers show it: `"Sat, 07 Jun 2025"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y").to_string()
}

/// Today's date in UTC, formatted for a header.
pub fn current_date() -> String {
    format_date(Utc::now().date_naive())
}

/// Parse a user-supplied date.
///
/// Accepted forms:
/// - `YYYY-MM-DD` (what an HTML date input submits)
/// - `DD/MM/YYYY`
///
/// The day must be 1-31, the month 1-12, the year 1900-2100, and the date
/// must exist in the calendar.
///
/// ```
/// use chrono::NaiveDate;
/// use tipper::receipt::parse_custom_date;
///
/// assert_eq!(parse_custom_date("2025-06-07"), NaiveDate::from_ymd_opt(2025, 6, 7));
/// assert_eq!(parse_custom_date("07/06/2025"), NaiveDate::from_ymd_opt(2025, 6, 7));
/// assert_eq!(parse_custom_date("2025-02-30"), None);
/// ```
pub fn parse_custom_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    let (year, month, day) = if let Some((y, rest)) = raw.split_once('-') {
        let (m, d) = rest.split_once('-')?;
        (y, m, d)
    } else if let Some((d, rest)) = raw.split_once('/') {
        let (m, y) = rest.split_once('/')?;
        (y, m, d)
    } else {
        return None;
    };

    let year: i32 = year.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) || !(1900..=2100).contains(&year) {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Header text for an optional custom date, falling back to today.
pub fn resolve_date(custom: Option<&str>) -> String {
    let Some(raw) = custom else {
        return current_date();
    };

    match parse_custom_date(raw) {
        Some(date) => format_date(date),
        None => {
            warn!(date = raw, "invalid custom date, using current date");
            current_date()
        }
    }
}

// ============================================================================
// RECEIPT
// ============================================================================

/// How the body text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyFormat {
    /// Markdown, through the full transducer
    #[default]
    Markdown,
    /// Plain text, word-wrapped and reversed as one unit
    Plain,
}

/// One print job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Inverse-video line shown on top of the receipt
    pub header: String,
    pub body: String,
    pub format: BodyFormat,
    /// Blank lines fed after the header
    pub feed: usize,
}

impl Receipt {
    /// A markdown message under a date header.
    pub fn message(body: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            header: date.into(),
            body: body.into(),
            format: BodyFormat::Markdown,
            feed: 2,
        }
    }

    /// A markdown document with no header line.
    pub fn untitled(body: impl Into<String>) -> Self {
        Self::message(body, String::new())
    }

    /// The notice printed when the HTTP server comes up.
    pub fn banner(listen_addr: &str) -> Self {
        Self {
            header: "PRINTER SERVER READY".to_string(),
            body: format!("Server started at {}", listen_addr),
            format: BodyFormat::Plain,
            feed: 3,
        }
    }

    /// Build the complete job.
    ///
    /// ## Errors
    ///
    /// Never fails for the in-memory buffer used here; kept fallible so the
    /// signature matches the streaming renderer.
    pub fn build(&self, config: &PrinterConfig) -> Result<Vec<u8>> {
        let mut out = Transducer::new(Vec::with_capacity(256), config);

        out.write_raw(&commands::init());
        out.write_raw(&commands::upside_down(true));

        match self.format {
            BodyFormat::Markdown => {
                translate(&self.body, &mut out);
            }
            BodyFormat::Plain => out.write_wrapped(&self.body),
        }

        if !self.header.is_empty() {
            out.write_raw(&text::inverse(true));
            out.write_raw(self.header.as_bytes());
            out.write_raw(&[CR, LF]);
            out.write_raw(&text::inverse(false));
        }
        out.write_raw(&commands::feed_lines(self.feed));

        out.finish()
    }
}

// ============================================================================
// TEMPLATES
// ============================================================================

/// Markdown showing every construct the printer renders.
pub const MARKDOWN_DEMO: &str = r#"# Coffee Shop

## Order 1234

- Espresso
- Croissant
- Oat milk upgrade

### Payment

1. Subtotal: $8.00
2. **Total: $9.04**

> Thank *you* for your __visit__!

```
wifi: beans4all
```

---

Visit us at `coffeeshop.example`
"#;

/// List available receipt templates
pub fn list_receipts() -> &'static [&'static str] {
    &["markdown", "banner"]
}

/// Get a template receipt by name
pub fn by_name(name: &str) -> Option<Receipt> {
    match name.to_lowercase().as_str() {
        "markdown" => Some(Receipt::message(MARKDOWN_DEMO, current_date())),
        "banner" => Some(Receipt::banner("0.0.0.0:8080")),
        _ => None,
    }
}

/// Check if a name is a receipt template
pub fn is_receipt(name: &str) -> bool {
    list_receipts().contains(&name.to_lowercase().as_str())
}
