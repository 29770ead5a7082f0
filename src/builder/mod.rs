//! Builder API for ergonomic menu construction.
//!
//! This module provides fluent builders and macros for creating transition
//! tables and whole menu sessions with minimal boilerplate. Mistakes a table
//! could encode (self-targets, an option mapped twice) are rejected when the
//! table is built rather than when the option is confirmed.

pub mod error;
pub mod macros;
pub mod session;
pub mod table;

pub use error::BuildError;
pub use session::MenuControllerBuilder;
pub use table::{TransitionTableBuilder, MAX_OPTIONS};
