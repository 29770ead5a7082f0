//! Build errors for transition tables and menu controllers.

use thiserror::Error;

/// Errors that can occur when building transition tables and controllers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Option {index} of '{state}' targets '{state}' itself")]
    SelfTransition { state: String, index: usize },

    #[error("Option {index} of '{state}' is past the last allowed option ({max})")]
    OptionOutOfRange {
        state: String,
        index: usize,
        max: usize,
    },

    #[error("Option {index} of '{state}' is mapped more than once")]
    DuplicateOption { state: String, index: usize },

    #[error("Sub-windows not specified. Call .windows(windows) before .build()")]
    MissingWindows,
}
