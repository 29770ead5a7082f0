//! Item list with the equip and remove shortcuts.

use super::{DrawContext, MenuState, StateCore};
use crate::builder::{BuildError, TransitionTableBuilder};
use crate::core::{MenuStateId, WindowId};
use crate::effects::DrawCommand;
use crate::widgets::{MenuWindows, OptionSelector};

const HELP: &str = "Select an item to Equip or Use.";

pub struct InventoryState {
    core: StateCore,
}

impl InventoryState {
    pub const USE: usize = 0;
    pub const EQUIP: usize = 1;
    pub const REMOVE: usize = 2;
    pub const BACK: usize = 3;

    const LABELS: [&'static str; 4] = ["Items", "Equip", "Remove", "Back"];

    pub fn new(options: Box<dyn OptionSelector>) -> Result<Self, BuildError> {
        let table = TransitionTableBuilder::new(MenuStateId::Inventory)
            .activate(Self::USE, WindowId::Inventory)
            .goto(Self::EQUIP, MenuStateId::Equip)
            .goto(Self::REMOVE, MenuStateId::Equip)
            .goto(Self::BACK, MenuStateId::MainMenu)
            .build()?;
        Ok(Self {
            core: StateCore::new(MenuStateId::Inventory, options, table),
        })
    }
}

impl MenuState for InventoryState {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn reset(&mut self, _windows: &mut MenuWindows) {
        self.core.install(&Self::LABELS, Self::USE);
    }

    fn active_window(&self) -> Option<WindowId> {
        Some(WindowId::Inventory)
    }

    fn draw_main(&self, view: &DrawContext<'_>, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::BottomWindow);
        // Help belongs to the item window while it has focus.
        if self.is_active(view.windows) {
            view.help(HELP, out);
        }
        match self.core.selection() {
            Self::EQUIP | Self::REMOVE => out.push(DrawCommand::Window(WindowId::Equip)),
            _ => out.push(DrawCommand::Window(WindowId::Inventory)),
        }
    }
}
