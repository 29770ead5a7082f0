//! Skill list screen.

use super::{DrawContext, MenuState, StateCore};
use crate::builder::{BuildError, TransitionTableBuilder};
use crate::core::{MenuStateId, WindowId};
use crate::effects::DrawCommand;
use crate::widgets::{MenuWindows, OptionSelector};

pub struct SkillsState {
    core: StateCore,
}

impl SkillsState {
    pub const USE: usize = 0;
    pub const BACK: usize = 1;

    const LABELS: [&'static str; 2] = ["Use", "Back"];

    pub fn new(options: Box<dyn OptionSelector>) -> Result<Self, BuildError> {
        let table = TransitionTableBuilder::new(MenuStateId::Skills)
            .activate(Self::USE, WindowId::Skills)
            .goto(Self::BACK, MenuStateId::MainMenu)
            .build()?;
        Ok(Self {
            core: StateCore::new(MenuStateId::Skills, options, table),
        })
    }
}

impl MenuState for SkillsState {
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
        Some(WindowId::Skills)
    }

    fn draw_main(&self, _view: &DrawContext<'_>, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::BottomWindow);
        out.push(DrawCommand::Window(WindowId::Skills));
    }
}
