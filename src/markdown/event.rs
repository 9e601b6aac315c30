//! Structural document events and the handler interface that consumes them.
//!
//! A parser front end walks a document depth-first and reports what it sees
//! through [`DocumentHandler`]. Events are transient: details such as a code
//! block's language tag are borrowed for the duration of the call only.

/// A block-level construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// ATX/setext heading, level 1-6
    Heading(u8),
    /// `---`, `***`, `___`
    ThematicBreak,
    /// `> quoted`
    Quote,
    /// Container for list items. Ordered lists are rendered like
    /// unordered ones; the flag is informational.
    List { ordered: bool },
    /// One list item
    Item,
    /// Fenced or indented code block with its language tag (may be empty)
    CodeBlock(&'a str),
    /// Paragraph of flowing text
    Paragraph,
    /// Anything the printer has no rendering for (tables, HTML blocks, ...)
    Other,
}

/// An inline formatting region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Strong,
    Underline,
    Strikethrough,
    Code,
    Emphasis,
    /// Links, images, ...
    Other,
}

/// Sub-kind of a text event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Plain text
    Normal,
    /// Contents of an inline code span
    Code,
    /// Hard or soft line break
    Break,
}

/// Receiver of structural events, in document order.
///
/// Every `enter_*` call is matched by a `leave_*` call with the same kind
/// once the construct's children have been delivered.
pub trait DocumentHandler {
    fn enter_block(&mut self, block: Block<'_>);
    fn leave_block(&mut self, block: Block<'_>);
    fn enter_span(&mut self, span: Span);
    fn leave_span(&mut self, span: Span);
    fn text(&mut self, kind: TextKind, text: &str);
}

/// Owned form of an event, handy for recording what a parser produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    EnterBlock(BlockKind),
    LeaveBlock(BlockKind),
    EnterSpan(Span),
    LeaveSpan(Span),
    Text(TextKind, String),
}

/// Owned counterpart of [`Block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Heading(u8),
    ThematicBreak,
    Quote,
    List { ordered: bool },
    Item,
    CodeBlock(String),
    Paragraph,
    Other,
}

impl BlockKind {
    /// Borrow as the event form.
    pub fn as_block(&self) -> Block<'_> {
        match self {
            Self::Heading(level) => Block::Heading(*level),
            Self::ThematicBreak => Block::ThematicBreak,
            Self::Quote => Block::Quote,
            Self::List { ordered } => Block::List { ordered: *ordered },
            Self::Item => Block::Item,
            Self::CodeBlock(lang) => Block::CodeBlock(lang),
            Self::Paragraph => Block::Paragraph,
            Self::Other => Block::Other,
        }
    }
}

impl From<Block<'_>> for BlockKind {
    fn from(block: Block<'_>) -> Self {
        match block {
            Block::Heading(level) => Self::Heading(level),
            Block::ThematicBreak => Self::ThematicBreak,
            Block::Quote => Self::Quote,
            Block::List { ordered } => Self::List { ordered },
            Block::Item => Self::Item,
            Block::CodeBlock(lang) => Self::CodeBlock(lang.to_string()),
            Block::Paragraph => Self::Paragraph,
            Block::Other => Self::Other,
        }
    }
}

/// Collects events instead of acting on them.
impl DocumentHandler for Vec<DocumentEvent> {
    fn enter_block(&mut self, block: Block<'_>) {
        self.push(DocumentEvent::EnterBlock(block.into()));
    }

    fn leave_block(&mut self, block: Block<'_>) {
        self.push(DocumentEvent::LeaveBlock(block.into()));
    }

    fn enter_span(&mut self, span: Span) {
        self.push(DocumentEvent::EnterSpan(span));
    }

    fn leave_span(&mut self, span: Span) {
        self.push(DocumentEvent::LeaveSpan(span));
    }

    fn text(&mut self, kind: TextKind, text: &str) {
        self.push(DocumentEvent::Text(kind, text.to_string()));
    }
}
