//! Style state: one stack of frames per printer axis.
//!
//! Entering a styled scope pushes a frame, leaving pops it and restores the
//! frame underneath. Nested scopes therefore come back to the enclosing
//! style instead of a hard-coded default:
//!
//! ```text
//! __under **bold** still under__
//!   ESC - 1   ESC ! 08   ESC ! 00   ESC - 0
//! ```

use crate::protocol::text::{
    CharacterSize, PrintMode, UnderlineWeight, character_size, print_mode, underline,
};

/// A style scope to enter or leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Print mode flags, combined with the enclosing mode
    Mode(PrintMode),
    /// Character size, replaces the enclosing size
    Size(CharacterSize),
    /// Underline weight, replaces the enclosing weight
    Underline(UnderlineWeight),
}

impl Style {
    pub const BOLD: Self = Self::Mode(PrintMode::BOLD);
    pub const SMALL: Self = Self::Mode(PrintMode::SMALL);
    pub const UNDERLINE: Self = Self::Underline(UnderlineWeight::Thin);

    /// Heading presets. Levels outside 1-6 have no style.
    ///
    /// | Level | Effect |
    /// |-------|--------|
    /// | 1 | 3× width, 3× height |
    /// | 2 | 3× width, 2× height |
    /// | 3 | 2× width, 2× height |
    /// | 4 | 2× width |
    /// | 5 | bold |
    /// | 6 | 2 dot underline |
    pub fn heading(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Size(CharacterSize::new(3, 3))),
            2 => Some(Self::Size(CharacterSize::new(3, 2))),
            3 => Some(Self::Size(CharacterSize::new(2, 2))),
            4 => Some(Self::Size(CharacterSize::new(2, 1))),
            5 => Some(Self::BOLD),
            6 => Some(Self::Underline(UnderlineWeight::Thick)),
            _ => None,
        }
    }
}

/// A single axis set to a concrete value; what actually goes to the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChange {
    Mode(PrintMode),
    Size(CharacterSize),
    Underline(UnderlineWeight),
}

impl StyleChange {
    pub fn to_bytes(self) -> Vec<u8> {
        match self {
            Self::Mode(mode) => print_mode(mode),
            Self::Size(size) => character_size(size),
            Self::Underline(weight) => underline(weight),
        }
    }
}

/// Snapshot of every axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleState {
    pub mode: PrintMode,
    pub size: CharacterSize,
    pub underline: UnderlineWeight,
}

impl StyleState {
    pub fn apply(&mut self, change: StyleChange) {
        match change {
            StyleChange::Mode(mode) => self.mode = mode,
            StyleChange::Size(size) => self.size = size,
            StyleChange::Underline(weight) => self.underline = weight,
        }
    }

    /// Changes that take a printer in state `self` to state `target`.
    pub fn diff(&self, target: &StyleState) -> Vec<StyleChange> {
        let mut changes = Vec::new();
        if self.mode != target.mode {
            changes.push(StyleChange::Mode(target.mode));
        }
        if self.size != target.size {
            changes.push(StyleChange::Size(target.size));
        }
        if self.underline != target.underline {
            changes.push(StyleChange::Underline(target.underline));
        }
        changes
    }
}

/// Stack of frames over a base value that can never be popped.
#[derive(Debug, Clone)]
pub struct StyleStack<T> {
    base: T,
    frames: Vec<T>,
}

impl<T: Copy> StyleStack<T> {
    pub fn new(base: T) -> Self {
        Self {
            base,
            frames: Vec::new(),
        }
    }

    pub fn current(&self) -> T {
        self.frames.last().copied().unwrap_or(self.base)
    }

    pub fn push(&mut self, value: T) -> T {
        self.frames.push(value);
        value
    }

    /// Drop the top frame and return what is now in effect. Popping an empty
    /// stack leaves the base in place.
    pub fn pop(&mut self) -> T {
        self.frames.pop();
        self.current()
    }
}

/// The three axis stacks together.
#[derive(Debug, Clone)]
pub struct StyleStacks {
    mode: StyleStack<PrintMode>,
    size: StyleStack<CharacterSize>,
    underline: StyleStack<UnderlineWeight>,
}

impl Default for StyleStacks {
    fn default() -> Self {
        Self {
            mode: StyleStack::new(PrintMode::DEFAULT),
            size: StyleStack::new(CharacterSize::NORMAL),
            underline: StyleStack::new(UnderlineWeight::Off),
        }
    }
}

impl StyleStacks {
    /// Open a scope; returns the change to send.
    pub fn enter(&mut self, style: Style) -> StyleChange {
        match style {
            Style::Mode(flags) => {
                let mode = self.mode.current() | flags;
                StyleChange::Mode(self.mode.push(mode))
            }
            Style::Size(size) => StyleChange::Size(self.size.push(size)),
            Style::Underline(weight) => StyleChange::Underline(self.underline.push(weight)),
        }
    }

    /// Close the innermost scope on `style`'s axis; returns the change that
    /// restores the enclosing frame.
    pub fn leave(&mut self, style: Style) -> StyleChange {
        match style {
            Style::Mode(_) => StyleChange::Mode(self.mode.pop()),
            Style::Size(_) => StyleChange::Size(self.size.pop()),
            Style::Underline(_) => StyleChange::Underline(self.underline.pop()),
        }
    }

    pub fn state(&self) -> StyleState {
        StyleState {
            mode: self.mode.current(),
            size: self.size.current(),
            underline: self.underline.current(),
        }
    }
}
