//! Party overview and formation changes.

use super::{ActiveOutcome, DrawContext, MenuContext, MenuState, StateCore};
use crate::builder::{BuildError, TransitionTableBuilder};
use crate::core::{MenuStateId, WindowId};
use crate::effects::DrawCommand;
use crate::widgets::{MenuWindows, OptionSelector};

const ACTIVE_HELP: &str = "Select a character to change formation.";
const SECOND_PICK_HELP: &str = "Select a character to change position with.";
const HELP: &str = "View character Information.\nSelect a character to change formation.";

pub struct PartyState {
    core: StateCore,
}

impl PartyState {
    pub const VIEW: usize = 0;
    pub const BACK: usize = 1;

    const LABELS: [&'static str; 2] = ["View/Reorder", "Back"];

    pub fn new(options: Box<dyn OptionSelector>) -> Result<Self, BuildError> {
        let table = TransitionTableBuilder::new(MenuStateId::Party)
            .activate(Self::VIEW, WindowId::Party)
            .goto(Self::BACK, MenuStateId::MainMenu)
            .build()?;
        Ok(Self {
            core: StateCore::new(MenuStateId::Party, options, table),
        })
    }
}

impl MenuState for PartyState {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn reset(&mut self, _windows: &mut MenuWindows) {
        self.core.install(&Self::LABELS, Self::VIEW);
    }

    fn active_window(&self) -> Option<WindowId> {
        Some(WindowId::Party)
    }

    // Reordering can change what the status line shows.
    fn active_window_update(&mut self, ctx: &mut MenuContext<'_>) -> ActiveOutcome {
        ctx.windows.get_mut(WindowId::Party).update(ctx.input);
        ctx.refresh_status();
        ActiveOutcome::Continue
    }

    fn draw_main(&self, view: &DrawContext<'_>, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::BottomWindow);
        if self.is_active(view.windows) {
            if view.windows.get(WindowId::Party).picking_second() {
                view.help(SECOND_PICK_HELP, out);
            } else {
                view.help(ACTIVE_HELP, out);
            }
        } else {
            view.help(HELP, out);
        }
        out.push(DrawCommand::Window(WindowId::Party));
    }
}
