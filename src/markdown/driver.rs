//! Dispatch driver: walks `pulldown-cmark` output and feeds a
//! [`DocumentHandler`].
//!
//! The printer's markdown dialect differs from CommonMark in two
//! places, both handled here:
//!
//! - `_x_` and `__x__` mean *underline*, not emphasis/strong. pulldown-cmark
//!   has no underline extension, so the delimiter is read back from the
//!   source range of the span.
//! - Every line break is a hard break.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};
use tracing::{debug, instrument};

use super::event::{BlockKind, DocumentHandler, Span, TextKind};

/// What a `Start` tag opened, so the matching `End` can be delivered with the
/// same kind and detail.
enum Open {
    Block(BlockKind),
    Span(Span),
}

/// Outcome of a [`translate`] run.
///
/// CommonMark parsing itself never fails: malformed markup degrades to text.
/// What can go wrong is structural, an `End` with no open `Start` or a
/// `Start` never closed, and those are counted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseStatus {
    /// Events delivered to the handler
    pub events: usize,
    /// Tags that could not be paired
    pub unbalanced: usize,
}

impl ParseStatus {
    /// Every start tag was matched by an end tag.
    pub fn is_complete(&self) -> bool {
        self.unbalanced == 0
    }
}

fn parser_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

/// Parse `source` and deliver its structure to `handler`, depth-first.
///
/// Tags left open at the end of input are closed so the handler always sees
/// balanced enter/leave pairs; they still count against the status.
#[instrument(skip_all, fields(len = source.len()))]
pub fn translate<H: DocumentHandler + ?Sized>(source: &str, handler: &mut H) -> ParseStatus {
    let mut open: Vec<Open> = Vec::new();
    let mut delivered = 0;
    let mut unbalanced = 0;

    for (event, range) in Parser::new_ext(source, parser_options()).into_offset_iter() {
        match event {
            Event::Start(tag) => {
                let underscored = source[range].starts_with('_');
                match classify(tag, underscored) {
                    Open::Block(kind) => {
                        handler.enter_block(kind.as_block());
                        open.push(Open::Block(kind));
                    }
                    Open::Span(span) => {
                        handler.enter_span(span);
                        open.push(Open::Span(span));
                    }
                }
            }
            Event::End(_) => match open.pop() {
                Some(Open::Block(kind)) => handler.leave_block(kind.as_block()),
                Some(Open::Span(span)) => handler.leave_span(span),
                None => {
                    debug!("end tag without start, skipped");
                    unbalanced += 1;
                    continue;
                }
            },
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                handler.text(TextKind::Normal, &text);
            }
            Event::Code(code) => {
                handler.enter_span(Span::Code);
                handler.text(TextKind::Code, &code);
                handler.leave_span(Span::Code);
                delivered += 2;
            }
            Event::SoftBreak | Event::HardBreak => handler.text(TextKind::Break, "\n"),
            Event::Rule => {
                let rule = BlockKind::ThematicBreak;
                handler.enter_block(rule.as_block());
                handler.leave_block(rule.as_block());
                delivered += 1;
            }
            other => {
                debug!(event = ?other, "unsupported event ignored");
                continue;
            }
        }
        delivered += 1;
    }

    while let Some(tag) = open.pop() {
        match tag {
            Open::Block(kind) => handler.leave_block(kind.as_block()),
            Open::Span(span) => handler.leave_span(span),
        }
        delivered += 1;
        unbalanced += 1;
    }

    ParseStatus {
        events: delivered,
        unbalanced,
    }
}

fn classify(tag: Tag<'_>, underscored: bool) -> Open {
    match tag {
        Tag::Paragraph => Open::Block(BlockKind::Paragraph),
        Tag::Heading { level, .. } => Open::Block(BlockKind::Heading(level as u8)),
        Tag::BlockQuote(_) => Open::Block(BlockKind::Quote),
        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => {
            let lang = info.split_whitespace().next().unwrap_or_default();
            Open::Block(BlockKind::CodeBlock(lang.to_string()))
        }
        Tag::CodeBlock(CodeBlockKind::Indented) => {
            Open::Block(BlockKind::CodeBlock(String::new()))
        }
        Tag::List(start) => Open::Block(BlockKind::List {
            ordered: start.is_some(),
        }),
        Tag::Item => Open::Block(BlockKind::Item),
        Tag::Strong | Tag::Emphasis if underscored => Open::Span(Span::Underline),
        Tag::Strong => Open::Span(Span::Strong),
        Tag::Emphasis => Open::Span(Span::Emphasis),
        Tag::Strikethrough => Open::Span(Span::Strikethrough),
        Tag::Link { .. } | Tag::Image { .. } => Open::Span(Span::Other),
        _ => Open::Block(BlockKind::Other),
    }
}
