//! The running menu session.
//!
//! [`MenuController`] owns the states, windows and overlay of one open menu
//! and routes frames to the current state. The per-frame input algorithm is
//! in [`dispatch`]; it reports a [`StepResult`] that the controller applies,
//! so making a state current and logging the transition happen in one place.

pub mod controller;
pub mod dispatch;

pub use controller::MenuController;
pub use dispatch::StepResult;
