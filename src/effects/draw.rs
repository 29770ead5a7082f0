//! Display list produced by `draw`.

use crate::core::{MenuStateId, WindowId};

/// Snapshot of a state's option selector for the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionsView {
    pub state: MenuStateId,
    pub labels: Vec<String>,
    pub selection: usize,
    pub cursor_visible: bool,
}

/// One rendering step, in painter's order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    /// Screen captured when the menu opened.
    SavedScreen,
    /// Frame around the option row shared by every screen.
    Chrome,
    BottomWindow,
    Window(WindowId),
    /// Portrait windows of the active party.
    CharacterWindows { count: usize },
    HelpText(String),
    StatusLine {
        locale: String,
        time: String,
        currency: String,
    },
    LocaleGraphic(String),
    LocationInfo {
        name: String,
        image: Option<String>,
    },
    Options(OptionsView),
    Message(String),
}
