//! State identity trait and the menu's closed sets of screens and windows.
//!
//! A menu state is identified by a small `Copy` value; the behaviour behind
//! that identity lives in [`crate::states`]. Keeping identities plain values
//! lets origins, transition tables and the transition log refer to states
//! without borrowing them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identities.
///
/// All methods are pure. Identities are cheap values that name a position in
/// the menu hierarchy.
///
/// # Example
///
/// ```rust
/// use menu_mode::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Screen {
///     Title,
///     Options,
/// }
///
/// impl State for Screen {
///     fn name(&self) -> &str {
///         match self {
///             Self::Title => "Title",
///             Self::Options => "Options",
///         }
///     }
///
///     fn is_root(&self) -> bool {
///         matches!(self, Self::Title)
///     }
/// }
///
/// assert!(Screen::Title.is_root());
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is the root of the hierarchy.
    ///
    /// Cancelling out of the root leaves the whole menu session instead of
    /// returning to another state.
    ///
    /// Default implementation returns `false`.
    fn is_root(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// The fixed set of menu screens.
    pub enum MenuStateId {
        MainMenu,
        Inventory,
        Party,
        Skills,
        Equip,
        Quests,
        WorldMap,
    }
    root: [MainMenu]
}

/// Embedded sub-windows a state can hand input focus to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum WindowId {
    Inventory,
    Party,
    Skills,
    Equip,
    /// Quest detail pane.
    Quest,
    /// Quest list pane; the one that takes focus on the quest screen.
    QuestList,
    WorldMap,
}

impl WindowId {
    pub const ALL: [WindowId; 7] = [
        WindowId::Inventory,
        WindowId::Party,
        WindowId::Skills,
        WindowId::Equip,
        WindowId::Quest,
        WindowId::QuestList,
        WindowId::WorldMap,
    ];
}
