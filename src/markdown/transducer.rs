//! Event-to-printer translation.
//!
//! [`Transducer`] turns structural events into ESC/POS bytes. It owns every
//! piece of output state (style stacks, indent level, pending paragraph), so
//! independent documents never share anything.
//!
//! ## Mapping
//!
//! | Event | Bytes |
//! |-------|-------|
//! | heading enter / leave | size, bold or underline preset / restore, `ESC !` reset, LF |
//! | quote enter / leave | margin in + `"> "` / margin out |
//! | list item enter / leave | `"- "` / LF |
//! | code block enter | `` "```" `` + lang + LF + small font |
//! | code block leave | `` "```" `` + font restore + LF |
//! | paragraph leave | blank line |
//! | strong, underline | bold / 1 dot underline, restored on leave |
//! | code span | `` "`" `` + small font, `` "`" `` + restore |
//! | emphasis | `"*"` on both sides |
//! | strikethrough, anything else | nothing |
//!
//! Paragraph text is collected in a [`WrapBuffer`] and sent bottom line first
//! when the paragraph (or a line break) ends. Heading, list item and code
//! text is short and goes straight out.
//!
//! Quote and item markers are held back until the next text or style arrives.
//! If that lands in a paragraph the marker joins the wrap buffer, so it stays
//! on the paragraph's first line and counts toward its width.

use std::io::Write;

use tracing::debug;

use super::emitter::Emitter;
use super::event::{Block, DocumentHandler, Span, TextKind};
use super::indent::{Direction, IndentTracker};
use super::style::{Style, StyleChange, StyleStacks, StyleState};
use super::wrap::WrapBuffer;
use crate::error::{Result, TipperError};
use crate::printer::PrinterConfig;

const QUOTE_MARKER: &str = "> ";
const ITEM_MARKER: &str = "- ";
const FENCE: &str = "```";
const RULE: &str = "=";

/// Markdown-to-ESC/POS transducer writing into `W`.
#[derive(Debug)]
pub struct Transducer<W: Write> {
    out: Emitter<W>,
    columns: usize,
    styles: StyleStacks,
    indent: IndentTracker,
    wrap: WrapBuffer,
    /// Printer style when the pending wrap unit began.
    wrap_start: StyleState,
    paragraph_depth: usize,
    /// Quote/item markers not yet placed.
    pending_marker: String,
}

impl<W: Write> Transducer<W> {
    pub fn new(sink: W, config: &PrinterConfig) -> Self {
        Self {
            out: Emitter::new(sink),
            columns: config.columns,
            styles: StyleStacks::default(),
            indent: IndentTracker::from_config(config),
            wrap: WrapBuffer::new(),
            wrap_start: StyleState::default(),
            paragraph_depth: 0,
            pending_marker: String::new(),
        }
    }

    pub fn indent_level(&self) -> u8 {
        self.indent.level()
    }

    pub fn style_state(&self) -> StyleState {
        self.styles.state()
    }

    /// Write a complete block of plain text through the reverse-wrap buffer,
    /// outside of any markdown structure.
    pub fn write_wrapped(&mut self, text: &str) {
        self.flush_wrap();
        self.wrap.push_text(text);
        self.flush_wrap();
    }

    /// Write bytes straight to the sink (control codes, pre-laid-out lines).
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.place_marker();
        self.flush_wrap();
        self.out.emit_bytes(bytes);
    }

    /// Flush anything still pending and hand back the sink.
    ///
    /// ## Errors
    ///
    /// Returns the first write error the sink reported while rendering.
    pub fn finish(mut self) -> Result<W> {
        self.place_marker();
        self.flush_wrap();
        match self.out.take_error() {
            Some(e) => Err(TipperError::Transport(format!(
                "printer output failed after {} bytes: {}",
                self.out.bytes_written(),
                e
            ))),
            None => Ok(self.out.into_inner()),
        }
    }

    fn in_paragraph(&self) -> bool {
        self.paragraph_depth > 0
    }

    /// Put any held-back marker where the next output goes.
    fn place_marker(&mut self) {
        if self.pending_marker.is_empty() {
            return;
        }
        let marker = std::mem::take(&mut self.pending_marker);
        if self.in_paragraph() {
            self.wrap.push_text(&marker);
        } else {
            self.out.emit_bytes(marker.as_bytes());
        }
    }

    fn write_text(&mut self, text: &str) {
        self.place_marker();
        if self.in_paragraph() {
            self.wrap.push_text(text);
        } else {
            self.out.emit_bytes(text.as_bytes());
        }
    }

    fn send_style(&mut self, change: StyleChange) {
        self.place_marker();
        if self.in_paragraph() {
            self.wrap.push_style(change);
        } else {
            self.out.emit_bytes(&change.to_bytes());
        }
    }

    fn enter_style(&mut self, style: Style) {
        let change = self.styles.enter(style);
        self.send_style(change);
    }

    fn leave_style(&mut self, style: Style) {
        let change = self.styles.leave(style);
        self.send_style(change);
    }

    /// Send the pending wrap unit, returning how many lines it produced.
    fn flush_wrap(&mut self) -> usize {
        let lines = if self.wrap.is_empty() {
            0
        } else {
            self.wrap
                .flush_reversed(self.columns, self.wrap_start, &mut self.out)
        };
        self.wrap_start = self.styles.state();
        lines
    }

    /// Close the pending wrap unit with `newlines` line feeds. The last line
    /// the flush wrote already ends in one of them.
    fn end_unit(&mut self, newlines: usize) {
        self.place_marker();
        let owed = if self.flush_wrap() > 0 {
            newlines.saturating_sub(1)
        } else {
            newlines
        };
        for _ in 0..owed {
            self.out.emit_newline();
        }
    }
}

impl<W: Write> DocumentHandler for Transducer<W> {
    fn enter_block(&mut self, block: Block<'_>) {
        match block {
            Block::Heading(level) => {
                if let Some(style) = Style::heading(level) {
                    self.enter_style(style);
                }
            }
            Block::ThematicBreak => {
                let rule = RULE.repeat(self.columns);
                self.write_text(&rule);
                self.out.emit_newline();
            }
            Block::Quote => {
                let margin = self.indent.adjust(Direction::In);
                self.out.emit_bytes(&margin);
                self.pending_marker.push_str(QUOTE_MARKER);
            }
            Block::Item => self.pending_marker.push_str(ITEM_MARKER),
            Block::CodeBlock(lang) => {
                self.write_text(FENCE);
                self.write_text(lang);
                self.out.emit_newline();
                self.enter_style(Style::SMALL);
            }
            Block::Paragraph => {
                if !self.in_paragraph() {
                    self.wrap_start = self.styles.state();
                }
                self.paragraph_depth += 1;
            }
            Block::List { .. } => {}
            Block::Other => debug!(?block, "unsupported block ignored"),
        }
    }

    fn leave_block(&mut self, block: Block<'_>) {
        match block {
            Block::Heading(level) => {
                let style = Style::heading(level);
                if let Some(style) = style {
                    self.leave_style(style);
                }
                // The font selector always goes back to the enclosing mode
                if !matches!(style, Some(Style::Mode(_))) {
                    let mode = self.styles.state().mode;
                    self.send_style(StyleChange::Mode(mode));
                }
                self.out.emit_newline();
            }
            Block::Quote => {
                self.place_marker();
                let margin = self.indent.adjust(Direction::Out);
                self.out.emit_bytes(&margin);
            }
            Block::Item => {
                self.place_marker();
                self.out.emit_newline();
            }
            Block::CodeBlock(_) => {
                self.write_text(FENCE);
                self.leave_style(Style::SMALL);
                self.out.emit_newline();
            }
            Block::Paragraph => {
                self.end_unit(2);
                self.paragraph_depth = self.paragraph_depth.saturating_sub(1);
            }
            Block::ThematicBreak | Block::List { .. } | Block::Other => {}
        }
    }

    fn enter_span(&mut self, span: Span) {
        match span {
            Span::Strong => self.enter_style(Style::BOLD),
            Span::Underline => self.enter_style(Style::UNDERLINE),
            Span::Code => {
                self.write_text("`");
                self.enter_style(Style::SMALL);
            }
            Span::Emphasis => self.write_text("*"),
            // No strikethrough on this hardware
            Span::Strikethrough => {}
            Span::Other => debug!("unsupported span ignored"),
        }
    }

    fn leave_span(&mut self, span: Span) {
        match span {
            Span::Strong => self.leave_style(Style::BOLD),
            Span::Underline => self.leave_style(Style::UNDERLINE),
            Span::Code => {
                self.write_text("`");
                self.leave_style(Style::SMALL);
            }
            Span::Emphasis => self.write_text("*"),
            Span::Strikethrough | Span::Other => {}
        }
    }

    fn text(&mut self, kind: TextKind, text: &str) {
        match kind {
            TextKind::Break => {
                if self.in_paragraph() {
                    self.end_unit(1);
                } else {
                    self.place_marker();
                    self.out.emit_newline();
                }
            }
            TextKind::Normal | TextKind::Code => self.write_text(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn transducer() -> Transducer<Vec<u8>> {
        Transducer::new(Vec::new(), &PrinterConfig::CSN_A5)
    }

    fn bytes(t: Transducer<Vec<u8>>) -> Vec<u8> {
        t.finish().expect("vec sink never fails")
    }

    #[test]
    fn test_strong_enter_leave_is_bold_then_default() {
        let mut t = transducer();
        t.enter_span(Span::Strong);
        t.leave_span(Span::Strong);
        assert_eq!(bytes(t), b"\x1B!\x08\x1B!\x00".to_vec());
    }

    #[test]
    fn test_underline_enter_leave() {
        let mut t = transducer();
        t.enter_span(Span::Underline);
        t.leave_span(Span::Underline);
        assert_eq!(bytes(t), b"\x1B-\x01\x1B-\x00".to_vec());
    }

    #[test]
    fn test_heading_level_one() {
        let mut t = transducer();
        t.enter_block(Block::Heading(1));
        t.text(TextKind::Normal, "Title");
        t.leave_block(Block::Heading(1));
        assert_eq!(bytes(t), b"\x1D!\x22Title\x1D!\x00\x1B!\x00\n".to_vec());
    }

    #[test]
    fn test_heading_six_clears_its_underline() {
        let mut t = transducer();
        t.enter_block(Block::Heading(6));
        t.text(TextKind::Normal, "small");
        t.leave_block(Block::Heading(6));
        assert_eq!(bytes(t), b"\x1B-\x02small\x1B-\x00\x1B!\x00\n".to_vec());
    }

    #[test]
    fn test_quote_with_list_item_restores_indent() {
        let mut t = transducer();
        t.enter_block(Block::Quote);
        assert_eq!(t.indent_level(), 1);
        t.enter_block(Block::Item);
        t.text(TextKind::Normal, "x");
        t.leave_block(Block::Item);
        t.leave_block(Block::Quote);
        assert_eq!(t.indent_level(), 0);
        assert_eq!(
            bytes(t),
            b"\x1DL\x10\x00> - x\n\x1DL\x00\x00".to_vec()
        );
    }

    #[test]
    fn test_heading_five_resets_mode_once() {
        let mut t = transducer();
        t.enter_block(Block::Heading(5));
        t.text(TextKind::Normal, "five");
        t.leave_block(Block::Heading(5));
        assert_eq!(bytes(t), b"\x1B!\x08five\x1B!\x00\n".to_vec());
    }

    #[test]
    fn test_quote_marker_joins_first_wrapped_line() {
        let mut t = Transducer::new(Vec::new(), &PrinterConfig::CSN_A5.with_columns(10));
        t.enter_block(Block::Quote);
        t.enter_block(Block::Paragraph);
        t.text(TextKind::Normal, "one two three four");
        t.leave_block(Block::Paragraph);
        t.leave_block(Block::Quote);
        assert_eq!(
            bytes(t),
            b"\x1DL\x10\x00three four\n> one two\n\n\x1DL\x00\x00".to_vec()
        );
    }

    #[test]
    fn test_item_marker_comes_before_bold() {
        let mut t = transducer();
        t.enter_block(Block::Item);
        t.enter_block(Block::Paragraph);
        t.enter_span(Span::Strong);
        t.text(TextKind::Normal, "b");
        t.leave_span(Span::Strong);
        t.leave_block(Block::Paragraph);
        t.leave_block(Block::Item);
        assert_eq!(bytes(t), b"- \x1B!\x08b\x1B!\x00\n\n\n".to_vec());
    }

    #[test]
    fn test_empty_item_still_prints_marker() {
        let mut t = transducer();
        t.enter_block(Block::Item);
        t.leave_block(Block::Item);
        assert_eq!(bytes(t), b"- \n".to_vec());
    }

    #[test]
    fn test_code_block() {
        let mut t = transducer();
        t.enter_block(Block::CodeBlock("rust"));
        t.text(TextKind::Normal, "let x = 1;\n");
        t.leave_block(Block::CodeBlock("rust"));
        assert_eq!(
            bytes(t),
            b"```rust\n\x1B!\x01let x = 1;\n```\x1B!\x00\n".to_vec()
        );
    }

    #[test]
    fn test_code_block_without_lang() {
        let mut t = transducer();
        t.enter_block(Block::CodeBlock(""));
        t.leave_block(Block::CodeBlock(""));
        assert_eq!(bytes(t), b"```\n\x1B!\x01```\x1B!\x00\n".to_vec());
    }

    #[test]
    fn test_emphasis_is_bracketed_with_stars() {
        let mut t = transducer();
        t.enter_span(Span::Emphasis);
        t.text(TextKind::Normal, "it");
        t.leave_span(Span::Emphasis);
        assert_eq!(bytes(t), b"*it*".to_vec());
    }

    #[test]
    fn test_strikethrough_and_unknown_are_silent() {
        let mut t = transducer();
        t.enter_span(Span::Strikethrough);
        t.leave_span(Span::Strikethrough);
        t.enter_span(Span::Other);
        t.leave_span(Span::Other);
        t.enter_block(Block::Other);
        t.leave_block(Block::Other);
        t.enter_block(Block::List { ordered: true });
        t.leave_block(Block::List { ordered: true });
        assert!(bytes(t).is_empty());
    }

    #[test]
    fn test_paragraph_is_wrapped_and_reversed() {
        let mut t = Transducer::new(Vec::new(), &PrinterConfig::CSN_A5.with_columns(10));
        t.enter_block(Block::Paragraph);
        t.text(
            TextKind::Normal,
            "one two three four five six seven eight nine ten eleven",
        );
        t.leave_block(Block::Paragraph);
        assert_eq!(
            bytes(t),
            b"ten eleven\neight nine\nseven\nfive six\nthree four\none two\n\n".to_vec()
        );
    }

    #[test]
    fn test_short_paragraph_ends_with_blank_line() {
        let mut t = transducer();
        t.enter_block(Block::Paragraph);
        t.text(TextKind::Normal, "Hello");
        t.leave_block(Block::Paragraph);
        assert_eq!(bytes(t), b"Hello\n\n".to_vec());
    }

    #[test]
    fn test_empty_paragraph_still_separates() {
        let mut t = transducer();
        t.enter_block(Block::Paragraph);
        t.leave_block(Block::Paragraph);
        assert_eq!(bytes(t), b"\n\n".to_vec());
    }

    #[test]
    fn test_break_splits_wrap_units() {
        let mut t = transducer();
        t.enter_block(Block::Paragraph);
        t.text(TextKind::Normal, "a");
        t.text(TextKind::Break, "\n");
        t.text(TextKind::Normal, "b");
        t.leave_block(Block::Paragraph);
        assert_eq!(bytes(t), b"a\nb\n\n".to_vec());
    }

    #[test]
    fn test_break_outside_paragraph_is_single_newline() {
        let mut t = transducer();
        t.text(TextKind::Normal, "x");
        t.text(TextKind::Break, "\n");
        assert_eq!(bytes(t), b"x\n".to_vec());
    }

    #[test]
    fn test_inline_code_span_in_paragraph() {
        let mut t = transducer();
        t.enter_block(Block::Paragraph);
        t.text(TextKind::Normal, "run ");
        t.enter_span(Span::Code);
        t.text(TextKind::Code, "ls");
        t.leave_span(Span::Code);
        t.leave_block(Block::Paragraph);
        assert_eq!(bytes(t), b"run `\x1B!\x01ls`\x1B!\x00\n\n".to_vec());
    }

    #[test]
    fn test_bold_inside_underline_restores_underline_not_default() {
        let mut t = transducer();
        t.enter_span(Span::Underline);
        t.enter_span(Span::Strong);
        t.leave_span(Span::Strong);
        assert_eq!(
            t.style_state().underline,
            crate::protocol::text::UnderlineWeight::Thin
        );
        t.leave_span(Span::Underline);
        assert_eq!(t.style_state(), StyleState::default());
    }

    #[test]
    fn test_thematic_break_fills_line() {
        let mut t = Transducer::new(Vec::new(), &PrinterConfig::CSN_A5.with_columns(4));
        t.enter_block(Block::ThematicBreak);
        t.leave_block(Block::ThematicBreak);
        assert_eq!(bytes(t), b"====\n".to_vec());
    }

    #[test]
    fn test_write_wrapped_outside_markdown() {
        let mut t = Transducer::new(Vec::new(), &PrinterConfig::CSN_A5.with_columns(5));
        t.write_wrapped("ab cd ef");
        assert_eq!(bytes(t), b"ef\nab cd\n".to_vec());
    }
}
