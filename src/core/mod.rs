//! Core state machine types and logic.
//!
//! This module contains the pure pieces of the menu state machine:
//! - State identities via the `State` trait and the `MenuStateId`/`WindowId` sets
//! - Transition tables mapping option indices to outcomes
//! - The bounded diagnostic transition log
//!
//! Nothing in here touches input, windows or the outside world.

mod history;
mod state;
mod table;

pub use history::{StateHistory, StateTransition, TransitionKind};
pub use state::{MenuStateId, State, WindowId};
pub use table::{Outcome, TransitionTable};
