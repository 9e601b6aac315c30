//! Quote/list nesting depth, turned into a left margin.

use crate::printer::PrinterConfig;
use crate::protocol::text::left_margin;

/// Which way to move the margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

/// Bounded indent counter.
///
/// The level stays within `0..=max_level`; steps past either end are
/// silently absorbed.
#[derive(Debug, Clone)]
pub struct IndentTracker {
    level: u8,
    max_level: u8,
    unit: u16,
}

impl IndentTracker {
    pub fn new(max_level: u8, unit: u16) -> Self {
        Self {
            level: 0,
            max_level,
            unit,
        }
    }

    pub fn from_config(config: &PrinterConfig) -> Self {
        Self::new(config.max_indent_level, config.indent_unit)
    }

    /// Step one level and return the `GS L` command for the new margin.
    pub fn adjust(&mut self, direction: Direction) -> Vec<u8> {
        self.level = match direction {
            Direction::In => self.level.saturating_add(1).min(self.max_level),
            Direction::Out => self.level.saturating_sub(1),
        };
        left_margin(self.margin_dots())
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn margin_dots(&self) -> u16 {
        u16::from(self.level).saturating_mul(self.unit)
    }
}
