//! Reverse-wrap buffer.
//!
//! With upside-down printing turned on, the receipt is read rotated by 180°,
//! so the line sent last ends up on top. A paragraph is therefore collected
//! whole, word-wrapped, and sent bottom line first:
//!
//! ```text
//! logical:  L1 L2 L3     sent:  L3 L2 L1     read:  L1
//!                                                   L2
//!                                                   L3
//! ```
//!
//! Style changes that arrive in the middle of a paragraph are kept at their
//! character offset. Because lines go out of order, every line first puts
//! the printer in the style that was active where the line logically starts,
//! and after the last one the style at the end of the paragraph is restored.

use std::io::Write;
use std::ops::Range;

use super::emitter::Emitter;
use super::style::{StyleChange, StyleState};

/// Greedy word wrap over `chars`, returning the character range of each line.
///
/// A line breaks at the last space whose index (relative to the line start)
/// is within `1..=width`; without one, the line is cut at exactly `width`.
/// Whitespace after a break is skipped. Empty input yields no lines.
fn break_lines(chars: &[char], width: usize) -> Vec<Range<usize>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        if chars.len() - start <= width {
            lines.push(start..chars.len());
            break;
        }

        let window = &chars[start + 1..=start + width];
        let end = window
            .iter()
            .rposition(|&c| c == ' ')
            .map_or(start + width, |i| start + 1 + i);
        lines.push(start..end);

        start = end;
        while start < chars.len() && chars[start].is_whitespace() {
            start += 1;
        }
    }

    lines
}

/// Word-wrap `text` into lines of at most `width` characters, in reading order.
///
/// ```
/// use tipper::markdown::wrap::wrap;
///
/// assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
/// assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
/// assert!(wrap("", 10).is_empty());
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    break_lines(&chars, width)
        .into_iter()
        .map(|range| chars[range].iter().collect())
        .collect()
}

/// Pending content of one text unit.
#[derive(Debug, Default, Clone)]
pub struct WrapBuffer {
    chars: Vec<char>,
    /// Style changes anchored before the character at the given offset.
    /// Offsets never decrease.
    styles: Vec<(usize, StyleChange)>,
}

impl WrapBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, text: &str) {
        self.chars.extend(text.chars());
    }

    pub fn push_style(&mut self, change: StyleChange) {
        self.styles.push((self.chars.len(), change));
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty() && self.styles.is_empty()
    }

    /// Send the buffered unit last line first, each line terminated by LF,
    /// and leave the buffer empty.
    ///
    /// `start` is the printer style in effect when the unit began. Returns the
    /// number of lines written.
    pub fn flush_reversed<W: Write>(
        &mut self,
        width: usize,
        start: StyleState,
        out: &mut Emitter<W>,
    ) -> usize {
        let chars = std::mem::take(&mut self.chars);
        let styles = std::mem::take(&mut self.styles);

        if chars.is_empty() {
            // Nothing to print, but the printer must still end up in the
            // style the unit closed with.
            for (_, change) in styles {
                out.emit_bytes(&change.to_bytes());
            }
            return 0;
        }

        let lines = break_lines(&chars, width);

        // Split the style changes between lines and record the style at the
        // logical start of each line.
        let mut line_styles: Vec<&[(usize, StyleChange)]> = Vec::with_capacity(lines.len());
        let mut line_starts = Vec::with_capacity(lines.len());
        let mut state = start;
        let mut next = 0;
        for (i, _) in lines.iter().enumerate() {
            let upper = lines.get(i + 1).map_or(usize::MAX, |l| l.start);
            line_starts.push(state);
            let first = next;
            while next < styles.len() && styles[next].0 < upper {
                state.apply(styles[next].1);
                next += 1;
            }
            line_styles.push(&styles[first..next]);
        }
        let end_state = state;

        let mut printer = start;
        for i in (0..lines.len()).rev() {
            for change in printer.diff(&line_starts[i]) {
                out.emit_bytes(&change.to_bytes());
            }
            printer = line_starts[i];

            let range = lines[i].clone();
            let mut pos = range.start;
            for &(offset, change) in line_styles[i] {
                // Styles anchored in the whitespace skipped at the break go
                // at the end of the line.
                let at = offset.clamp(range.start, range.end);
                emit_chars(out, &chars[pos..at]);
                pos = at;
                out.emit_bytes(&change.to_bytes());
                printer.apply(change);
            }
            emit_chars(out, &chars[pos..range.end]);
            out.emit_newline();
        }

        for change in printer.diff(&end_state) {
            out.emit_bytes(&change.to_bytes());
        }

        lines.len()
    }
}

fn emit_chars<W: Write>(out: &mut Emitter<W>, chars: &[char]) {
    if chars.is_empty() {
        return;
    }
    let text: String = chars.iter().collect();
    out.emit_bytes(text.as_bytes());
}
