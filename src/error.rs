//! # Error Types
//!
//! This module defines error types used throughout the tipper library.

use thiserror::Error;

/// Main error type for tipper operations
#[derive(Debug, Error)]
pub enum TipperError {
    /// Transport-level errors (connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Rejected user input (empty message, unknown printer profile)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TipperError>;
