//! Session error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that end a menu session before or while it runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The active party must fill between one and four character windows
    #[error("Active party has {size} characters, expected 1 to {max}")]
    InvalidPartySize { size: usize, max: usize },

    /// A state or controller could not be assembled
    #[error("Menu construction failed: {0}")]
    Build(#[from] BuildError),
}

/// Cosmetic problems; logged and drawn blank, never fatal.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AssetIssue {
    #[error("Couldn't load {kind} '{path}'")]
    Missing { kind: &'static str, path: String },
}
