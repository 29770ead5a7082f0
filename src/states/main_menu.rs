//! Root screen: one option per sub-screen.

use super::{DrawContext, MenuContext, MenuState, StateCore};
use crate::builder::{BuildError, TransitionTableBuilder};
use crate::core::{MenuStateId, WindowId};
use crate::effects::DrawCommand;
use crate::widgets::{InputFrame, MenuWindows, OptionSelector};

const QUEST_HELP: &str = "Select to view Quest Log.";
const MAP_HELP: &str = "Select to view current world map.\nUse left / right to cycle through locations. Press 'cancel' to return";

pub struct MainMenuState {
    core: StateCore,
}

impl MainMenuState {
    pub const INVENTORY: usize = 0;
    pub const SKILLS: usize = 1;
    pub const PARTY: usize = 2;
    pub const QUESTS: usize = 3;
    pub const MAP: usize = 4;

    const LABELS: [&'static str; 5] = ["Inventory", "Skills", "Party", "Quests", "Map"];

    pub fn new(options: Box<dyn OptionSelector>) -> Result<Self, BuildError> {
        let table = TransitionTableBuilder::new(MenuStateId::MainMenu)
            .goto(Self::INVENTORY, MenuStateId::Inventory)
            .goto(Self::SKILLS, MenuStateId::Skills)
            .goto(Self::PARTY, MenuStateId::Party)
            .goto(Self::QUESTS, MenuStateId::Quests)
            .goto(Self::MAP, MenuStateId::WorldMap)
            .build()?;
        Ok(Self {
            core: StateCore::new(MenuStateId::MainMenu, options, table),
        })
    }
}

impl MenuState for MainMenuState {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn reset(&mut self, _windows: &mut MenuWindows) {
        self.core.install(&Self::LABELS, Self::INVENTORY);
    }

    // Live preview of the map while its option is highlighted.
    fn on_update_state(&mut self, ctx: &mut MenuContext<'_>) {
        if self.core.selection() == Self::MAP {
            ctx.windows
                .get_mut(WindowId::WorldMap)
                .update(&InputFrame::idle());
        }
    }

    fn draw_main(&self, view: &DrawContext<'_>, out: &mut Vec<DrawCommand>) {
        match self.core.selection() {
            Self::QUESTS => {
                out.push(DrawCommand::BottomWindow);
                view.help(QUEST_HELP, out);
                out.push(DrawCommand::Window(WindowId::Quest));
            }
            Self::MAP => {
                out.push(DrawCommand::BottomWindow);
                view.help(MAP_HELP, out);
                out.push(DrawCommand::Window(WindowId::WorldMap));
            }
            Self::SKILLS => {
                view.bottom_menu(out);
                out.push(DrawCommand::Window(WindowId::Skills));
            }
            Self::PARTY => {
                view.bottom_menu(out);
                out.push(DrawCommand::Window(WindowId::Party));
            }
            _ => {
                view.bottom_menu(out);
                out.push(DrawCommand::Window(WindowId::Inventory));
            }
        }
    }

    fn draw_side(&self, view: &DrawContext<'_>, out: &mut Vec<DrawCommand>) {
        match self.core.selection() {
            Self::QUESTS => out.push(DrawCommand::Window(WindowId::QuestList)),
            Self::MAP => {}
            _ => out.push(DrawCommand::CharacterWindows {
                count: view.party_size,
            }),
        }
    }
}
