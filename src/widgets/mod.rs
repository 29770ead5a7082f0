//! Contracts for the collaborators the menu drives but does not own.
//!
//! Rendering, audio and device polling stay outside the crate. What remains
//! here are the traits the state machine calls through:
//! - `OptionSelector`, with `OptionBox` as the stock implementation
//! - `SubWindow`, the embedded widgets that can take input focus
//! - `InputSource` and its per-frame snapshot `InputFrame`
//! - `GameData` and `AssetStore`, read-only providers

mod data;
mod input;
mod selector;
#[cfg(test)]
pub(crate) mod testing;
mod window;

pub use data::{AssetStore, GameData, StaticGameData};
pub use input::{InputFrame, InputSource};
pub use selector::{OptionBox, OptionSelector, SelectorEvent};
pub use window::{
    ActivationMode, Location, MenuWindows, MessageBox, MessageWindow, SubWindow,
};
