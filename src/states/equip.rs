//! Equipment screen, reached only through the inventory shortcuts.

use super::{DrawContext, Entry, InventoryState, MenuState, StateCore};
use crate::builder::{BuildError, TransitionTableBuilder};
use crate::core::{MenuStateId, WindowId};
use crate::effects::DrawCommand;
use crate::widgets::{ActivationMode, MenuWindows, OptionSelector};
use tracing::debug;

pub struct EquipState {
    core: StateCore,
}

impl EquipState {
    pub const BACK: usize = 0;

    const LABELS: [&'static str; 1] = ["Back"];

    pub fn new(options: Box<dyn OptionSelector>) -> Result<Self, BuildError> {
        let table = TransitionTableBuilder::new(MenuStateId::Equip)
            .goto(Self::BACK, MenuStateId::Inventory)
            .build()?;
        Ok(Self {
            core: StateCore::new(MenuStateId::Equip, options, table),
        })
    }
}

impl MenuState for EquipState {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn reset(&mut self, _windows: &mut MenuWindows) {
        self.core.install(&Self::LABELS, Self::BACK);
    }

    /// Entering from the inventory picks equip or remove mode from the
    /// option that was confirmed there.
    fn on_entry(&mut self, entry: Entry, windows: &mut MenuWindows) {
        self.core.set_origin(entry.from);
        if entry.from != MenuStateId::Inventory {
            return;
        }

        let mode = if entry.from_selection == InventoryState::EQUIP {
            ActivationMode::Equip
        } else {
            ActivationMode::Remove
        };
        debug!(?mode, "opening equip window");
        windows.activate(WindowId::Equip, mode);
    }

    fn active_window(&self) -> Option<WindowId> {
        Some(WindowId::Equip)
    }

    fn draw_main(&self, _view: &DrawContext<'_>, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::BottomWindow);
        out.push(DrawCommand::Window(WindowId::Equip));
    }
}
