//! menu-mode: the in-game menu of a role-playing game as a state machine
//!
//! The menu is a fixed set of screens (main menu, inventory, equipment,
//! party, skills, quests, world map). Each frame the current screen gets the
//! frame's input and either hands it to an embedded window that holds focus,
//! or moves its option cursor and, on confirm, follows its transition table.
//! Cancelling goes back exactly one hop, to the screen it was entered from.
//!
//! The crate does no rendering, audio or device polling of its own. `update`
//! returns effect requests (sound cues, exit, suspend) and `draw` returns a
//! display list; the game's shell carries both out.
//!
//! # Core Concepts
//!
//! - **State identities**: `MenuStateId` values implementing the `State` trait
//! - **Transition tables**: option index to "go to state" or "activate window"
//! - **MenuState**: the hook set every screen implements
//! - **MenuController**: owns one session's screens and routes each frame
//!
//! # Example
//!
//! ```rust
//! use menu_mode::core::MenuStateId;
//! use menu_mode::effects::{Cue, EffectRequest};
//! use menu_mode::widgets::{
//!     ActivationMode, InputFrame, MenuWindows, StaticGameData, SubWindow,
//! };
//! use menu_mode::MenuController;
//! use std::time::Duration;
//!
//! #[derive(Default)]
//! struct Panel {
//!     active: bool,
//! }
//!
//! impl SubWindow for Panel {
//!     fn is_active(&self) -> bool {
//!         self.active
//!     }
//!
//!     fn update(&mut self, input: &InputFrame) {
//!         if input.cancel {
//!             self.active = false;
//!         }
//!     }
//!
//!     fn activate(&mut self, enable: bool, _mode: ActivationMode) {
//!         self.active = enable;
//!     }
//! }
//!
//! let windows = MenuWindows {
//!     inventory: Box::new(Panel::default()),
//!     party: Box::new(Panel::default()),
//!     skills: Box::new(Panel::default()),
//!     equip: Box::new(Panel::default()),
//!     quest: Box::new(Panel::default()),
//!     quest_list: Box::new(Panel::default()),
//!     world_map: Box::new(Panel::default()),
//! };
//! let data = StaticGameData {
//!     play_time: Duration::from_secs(3723),
//!     currency: 250,
//!     party_size: 2,
//!     location_name: "Harrvah".to_string(),
//!     location_graphic: None,
//! };
//!
//! let mut menu = MenuController::new(windows, &data, &|_: &str| true).unwrap();
//!
//! let effects = menu.update(&InputFrame::confirm(), &data);
//! assert!(effects.contains(EffectRequest::PlayCue(Cue::Confirm)));
//! assert_eq!(menu.current_state(), MenuStateId::Inventory);
//!
//! menu.update(&InputFrame::cancel(), &data);
//! assert_eq!(menu.current_state(), MenuStateId::MainMenu);
//!
//! let effects = menu.update(&InputFrame::cancel(), &data);
//! assert!(effects.exit_requested());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod machine;
pub mod session;
pub mod states;
pub mod widgets;

// Re-export commonly used types
pub use builder::{BuildError, MenuControllerBuilder, TransitionTableBuilder};
pub use config::{ConfigError, MenuConfig};
pub use core::{MenuStateId, State, StateHistory, StateTransition, WindowId};
pub use effects::{DrawCommand, EffectRequest, Effects};
pub use machine::MenuController;
pub use session::SessionError;
pub use states::{MenuContext, MenuState};
