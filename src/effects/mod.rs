//! What a frame asks of the outside world.
//!
//! The state machine never plays a sound, pops a mode or paints a pixel
//! itself. `update` returns [`Effects`] and `draw` returns a list of
//! [`DrawCommand`]s; the game's shell carries them out.
//!
//! # Key Concepts
//!
//! - **Effect requests**: sound cues, session exit and suspension, raised at
//!   the exact points in the dispatch where the device call used to sit
//! - **Display list**: painter's-order draw steps for the current screen

mod draw;
mod request;

pub use draw::{DrawCommand, OptionsView};
pub use request::{Cue, EffectRequest, Effects, SuspendReason};
