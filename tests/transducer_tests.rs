//! # Transducer Tests
//!
//! End-to-end checks from markdown source to the exact bytes sent to the
//! printer. Byte strings are spelled out in full so a diff points at the
//! control code that moved.

use pretty_assertions::assert_eq;
use std::io::{self, Write};

use tipper::markdown::indent::{Direction, IndentTracker};
use tipper::markdown::wrap::wrap;
use tipper::markdown::{self, Block, DocumentHandler, TextKind, Transducer};
use tipper::receipt::Receipt;
use tipper::{PrinterConfig, TipperError};

fn render(source: &str) -> Vec<u8> {
    markdown::render(source, &PrinterConfig::CSN_A5).unwrap()
}

fn render_columns(source: &str, columns: usize) -> Vec<u8> {
    markdown::render(source, &PrinterConfig::CSN_A5.with_columns(columns)).unwrap()
}

// ============================================================================
// WRAPPING
// ============================================================================

#[test]
fn short_paragraph_is_one_line() {
    assert_eq!(render("hello there"), b"hello there\n\n".to_vec());
}

#[test]
fn long_paragraph_is_wrapped_and_reversed() {
    let bytes = render_columns("one two three four five six seven eight nine ten eleven", 10);
    assert_eq!(
        bytes,
        b"ten eleven\neight nine\nseven\nfive six\nthree four\none two\n\n".to_vec()
    );
}

#[test]
fn flush_order_is_reverse_of_reading_order() {
    let text = "the quick brown fox jumps over the lazy dog again and again";
    let lines = wrap(text, 12);
    assert!(lines.len() > 3);

    let mut expected: String = lines.iter().rev().map(|l| format!("{}\n", l)).collect();
    expected.push('\n');
    assert_eq!(String::from_utf8(render_columns(text, 12)).unwrap(), expected);
}

#[test]
fn unbroken_word_is_split_losslessly() {
    let text = "abcdefghijklmnopqrstuvwxyz";
    let bytes = String::from_utf8(render_columns(text, 10)).unwrap();
    let mut lines: Vec<&str> = bytes.split('\n').filter(|l| !l.is_empty()).collect();
    assert_eq!(lines, vec!["uvwxyz", "klmnopqrst", "abcdefghij"]);
    lines.reverse();
    assert_eq!(lines.concat(), text);
}

#[test]
fn bold_across_a_wrap_is_reestablished() {
    let bytes = render_columns("aa **bb cc** dd", 5);
    assert_eq!(
        bytes,
        b"\x1B!\x08cc\x1B!\x00 dd\naa \x1B!\x08bb\n\x1B!\x00\n".to_vec()
    );
}

#[test]
fn paragraphs_are_separated_by_blank_lines() {
    assert_eq!(render("a\n\nb"), b"a\n\nb\n\n".to_vec());
}

#[test]
fn line_breaks_end_the_wrap_unit() {
    assert_eq!(render("a  \nb"), b"a\nb\n\n".to_vec());
    assert_eq!(render("a\nb"), b"a\nb\n\n".to_vec());
}

// ============================================================================
// STYLES
// ============================================================================

#[test]
fn heading_one_sets_and_resets_size() {
    assert_eq!(
        render("# Title"),
        b"\x1D!\x22Title\x1D!\x00\x1B!\x00\n".to_vec()
    );
}

#[test]
fn heading_presets() {
    assert_eq!(render("## Two"), b"\x1D!\x21Two\x1D!\x00\x1B!\x00\n".to_vec());
    assert_eq!(render("##### Five"), b"\x1B!\x08Five\x1B!\x00\n".to_vec());
    assert_eq!(
        render("###### Six"),
        b"\x1B-\x02Six\x1B-\x00\x1B!\x00\n".to_vec()
    );
}

#[test]
fn every_heading_ends_with_font_reset() {
    for level in 1..=6 {
        let source = format!("{} h", "#".repeat(level));
        let bytes = render(&source);
        assert!(
            bytes.ends_with(b"\x1B!\x00\n"),
            "level {} ended with {:?}",
            level,
            bytes
        );
    }
}

#[test]
fn strong_is_bold_then_default() {
    assert_eq!(render("**b**"), b"\x1B!\x08b\x1B!\x00\n\n".to_vec());
}

#[test]
fn underscores_underline() {
    assert_eq!(render("_u_"), b"\x1B-\x01u\x1B-\x00\n\n".to_vec());
    assert_eq!(render("__u__"), b"\x1B-\x01u\x1B-\x00\n\n".to_vec());
}

#[test]
fn bold_inside_underline_keeps_underline() {
    assert_eq!(
        render("__a **b** c__"),
        b"\x1B-\x01a \x1B!\x08b\x1B!\x00 c\x1B-\x00\n\n".to_vec()
    );
}

#[test]
fn emphasis_is_bracketed_with_stars() {
    assert_eq!(render("*it*"), b"*it*\n\n".to_vec());
}

#[test]
fn inline_code_is_small_between_backticks() {
    assert_eq!(
        render("run `ls`"),
        b"run `\x1B!\x01ls`\x1B!\x00\n\n".to_vec()
    );
}

#[test]
fn unsupported_markup_degrades_to_text() {
    assert_eq!(render("~~gone~~"), b"gone\n\n".to_vec());
    assert_eq!(render("[link](http://example.com)"), b"link\n\n".to_vec());
}

// ============================================================================
// BLOCKS
// ============================================================================

#[test]
fn quote_with_list_item_returns_to_base_indent() {
    assert_eq!(
        render("> - x"),
        b"\x1DL\x10\x00> - x\n\x1DL\x00\x00".to_vec()
    );
}

#[test]
fn quote_paragraph_is_indented() {
    assert_eq!(
        render("> note"),
        b"\x1DL\x10\x00> note\n\n\x1DL\x00\x00".to_vec()
    );
}

#[test]
fn quote_marker_stays_on_first_line_of_wrapped_paragraph() {
    let bytes = render_columns("> one two three four", 10);
    assert_eq!(
        bytes,
        b"\x1DL\x10\x00three four\n> one two\n\n\x1DL\x00\x00".to_vec()
    );
}

#[test]
fn loose_list_item_bullet_reads_first() {
    let bytes = render_columns("- alpha beta gamma\n\n- b", 10);
    assert_eq!(bytes, b"beta gamma\n- alpha\n\n\n- b\n\n\n".to_vec());
}

#[test]
fn wrapped_lines_never_exceed_columns() {
    let bytes = render_columns("> a quoted remark that needs several lines", 12);
    let text = String::from_utf8(bytes).unwrap();
    for line in text.split('\n') {
        let visible = line.trim_start_matches("\x1DL\x10\x00");
        assert!(visible.chars().count() <= 12, "line too wide: {:?}", visible);
    }
}

#[test]
fn ordered_list_uses_bullets() {
    assert_eq!(render("1. one\n2. two"), b"- one\n- two\n".to_vec());
}

#[test]
fn fenced_code_block() {
    assert_eq!(
        render("```rust\nlet x = 1;\n```"),
        b"```rust\n\x1B!\x01let x = 1;\n```\x1B!\x00\n".to_vec()
    );
}

#[test]
fn thematic_break_spans_the_line() {
    let mut expected = "=".repeat(32).into_bytes();
    expected.push(b'\n');
    assert_eq!(render("---"), expected);
}

#[test]
fn deep_quotes_clamp_indent() {
    let mut t = Transducer::new(Vec::new(), &PrinterConfig::CSN_A5);
    for _ in 0..20 {
        t.enter_block(Block::Quote);
    }
    assert_eq!(t.indent_level(), 16);
    for _ in 0..20 {
        t.leave_block(Block::Quote);
    }
    assert_eq!(t.indent_level(), 0);

    let bytes = t.finish().unwrap();
    // Level 16 is 256 dots, past one byte
    let deepest = b"\x1DL\x00\x01";
    assert!(bytes.windows(4).any(|w| w == deepest));
    assert!(bytes.ends_with(b"\x1DL\x00\x00"));
}

#[test]
fn indent_never_goes_below_zero() {
    let mut tracker = IndentTracker::new(16, 16);
    for _ in 0..3 {
        assert_eq!(tracker.adjust(Direction::Out), b"\x1DL\x00\x00".to_vec());
    }
    assert_eq!(tracker.level(), 0);
}

// ============================================================================
// INSTANCES AND SINKS
// ============================================================================

#[test]
fn transducers_share_no_state() {
    let mut first = Transducer::new(Vec::new(), &PrinterConfig::CSN_A5);
    let mut second = Transducer::new(Vec::new(), &PrinterConfig::CSN_A5);

    first.enter_block(Block::Quote);
    first.text(TextKind::Normal, "x");
    second.text(TextKind::Normal, "y");

    assert_eq!(first.indent_level(), 1);
    assert_eq!(second.indent_level(), 0);
    assert_eq!(second.finish().unwrap(), b"y".to_vec());
}

#[derive(Debug)]
struct Unplugged;

impl Write for Unplugged {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::NotConnected, "unplugged"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_surfaces_after_rendering() {
    let err = markdown::render_to("# a\n\nb", &PrinterConfig::CSN_A5, Unplugged).unwrap_err();
    assert!(matches!(err, TipperError::Transport(_)));
}

#[test]
fn receipt_places_header_after_body() {
    let data = Receipt::message("# Hi", "Sat, 07 Jun 2025")
        .build(&PrinterConfig::CSN_A5)
        .unwrap();

    let mut expected: Vec<u8> = Vec::new();
    expected.extend(b"\x1B@\x1B{\x01");
    expected.extend(b"\x1D!\x22Hi\x1D!\x00\x1B!\x00\n");
    expected.extend(b"\x1DB\x01Sat, 07 Jun 2025\r\n\x1DB\x00");
    expected.extend(b"\n\n");
    assert_eq!(data, expected);
}
