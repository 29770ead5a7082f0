//! Embedded sub-window contracts and the per-session window set.

use super::input::InputFrame;
use crate::core::WindowId;

/// Mode flag passed along with an activation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivationMode {
    #[default]
    Default,
    /// Equip window picking gear to put on.
    Equip,
    /// Equip window picking gear to take off.
    Remove,
}

/// A world map location as reported by the map window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub image: Option<String>,
}

/// A widget that can claim exclusive input focus.
///
/// While `is_active()` reports true, the owning state forwards each frame to
/// `update()` and does nothing else. The window gives focus back by turning
/// itself inactive, typically on its own cancel handling.
pub trait SubWindow {
    fn is_active(&self) -> bool;
    fn update(&mut self, input: &InputFrame);
    fn activate(&mut self, enable: bool, mode: ActivationMode);

    /// The location currently under the cursor. Only the world map window
    /// reports one.
    fn viewing_location(&self) -> Option<Location> {
        None
    }

    /// True while a swap waits for its second pick. Only the party window
    /// swaps.
    fn picking_second(&self) -> bool {
        false
    }
}

/// Modal message overlay.
pub trait MessageWindow {
    fn update(&mut self);
    fn text(&self) -> &str;
}

/// Plain text message overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageBox {
    text: String,
}

impl MessageBox {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl MessageWindow for MessageBox {
    fn update(&mut self) {}

    fn text(&self) -> &str {
        &self.text
    }
}

/// Every sub-window of one menu session.
pub struct MenuWindows {
    pub inventory: Box<dyn SubWindow>,
    pub party: Box<dyn SubWindow>,
    pub skills: Box<dyn SubWindow>,
    pub equip: Box<dyn SubWindow>,
    pub quest: Box<dyn SubWindow>,
    pub quest_list: Box<dyn SubWindow>,
    pub world_map: Box<dyn SubWindow>,
}

impl MenuWindows {
    pub fn get(&self, id: WindowId) -> &dyn SubWindow {
        match id {
            WindowId::Inventory => self.inventory.as_ref(),
            WindowId::Party => self.party.as_ref(),
            WindowId::Skills => self.skills.as_ref(),
            WindowId::Equip => self.equip.as_ref(),
            WindowId::Quest => self.quest.as_ref(),
            WindowId::QuestList => self.quest_list.as_ref(),
            WindowId::WorldMap => self.world_map.as_ref(),
        }
    }

    pub fn get_mut(&mut self, id: WindowId) -> &mut dyn SubWindow {
        match id {
            WindowId::Inventory => self.inventory.as_mut(),
            WindowId::Party => self.party.as_mut(),
            WindowId::Skills => self.skills.as_mut(),
            WindowId::Equip => self.equip.as_mut(),
            WindowId::Quest => self.quest.as_mut(),
            WindowId::QuestList => self.quest_list.as_mut(),
            WindowId::WorldMap => self.world_map.as_mut(),
        }
    }

    pub fn is_active(&self, id: WindowId) -> bool {
        self.get(id).is_active()
    }

    pub fn activate(&mut self, id: WindowId, mode: ActivationMode) {
        self.get_mut(id).activate(true, mode);
    }

    pub fn deactivate(&mut self, id: WindowId) {
        self.get_mut(id).activate(false, ActivationMode::Default);
    }
}

impl std::fmt::Debug for MenuWindows {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for id in WindowId::ALL {
            map.entry(&id, &self.is_active(id));
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::testing::{window_set, FakeWindow};

    #[test]
    fn get_routes_to_matching_window() {
        let (mut windows, spies) = window_set();

        windows.activate(WindowId::QuestList, ActivationMode::Default);
        assert!(windows.is_active(WindowId::QuestList));
        assert!(!windows.is_active(WindowId::Quest));
        assert!(spies.get(WindowId::QuestList).borrow().active);
    }

    #[test]
    fn activation_mode_reaches_window() {
        let (mut windows, spies) = window_set();

        windows.activate(WindowId::Equip, ActivationMode::Remove);
        assert_eq!(
            spies.get(WindowId::Equip).borrow().last_mode,
            Some(ActivationMode::Remove)
        );

        windows.deactivate(WindowId::Equip);
        assert!(!windows.is_active(WindowId::Equip));
    }

    #[test]
    fn default_window_has_no_location() {
        let (window, _spy) = FakeWindow::new();
        assert!(window.viewing_location().is_none());
    }

    #[test]
    fn message_box_reports_text() {
        let mut message = MessageBox::new("Saved.");
        message.update();
        assert_eq!(message.text(), "Saved.");
    }
}
