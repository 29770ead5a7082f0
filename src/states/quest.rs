//! Quest log: a detail window driven by a list window.

use super::{ActiveOutcome, DrawContext, Entry, MenuContext, MenuState, StateCore};
use crate::builder::{BuildError, TransitionTableBuilder};
use crate::core::{MenuStateId, WindowId};
use crate::effects::DrawCommand;
use crate::widgets::{ActivationMode, MenuWindows, OptionSelector};

pub struct QuestState {
    core: StateCore,
}

impl QuestState {
    pub const VIEW: usize = 0;
    pub const BACK: usize = 1;

    const LABELS: [&'static str; 2] = ["View", "Back"];

    pub fn new(options: Box<dyn OptionSelector>) -> Result<Self, BuildError> {
        let table = TransitionTableBuilder::new(MenuStateId::Quests)
            .activate(Self::VIEW, WindowId::QuestList)
            .goto(Self::BACK, MenuStateId::MainMenu)
            .build()?;
        Ok(Self {
            core: StateCore::new(MenuStateId::Quests, options, table),
        })
    }
}

impl MenuState for QuestState {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn reset(&mut self, _windows: &mut MenuWindows) {
        self.core.install(&Self::LABELS, Self::BACK);
    }

    /// Always lands on "View" with the list focused, however it was reached.
    fn on_entry(&mut self, entry: Entry, windows: &mut MenuWindows) {
        self.core.set_origin(entry.from);
        windows.activate(WindowId::QuestList, ActivationMode::Default);
        let options = self.core.options_mut();
        options.set_selection(Self::VIEW);
        options.set_cursor_visible(true);
    }

    fn active_window(&self) -> Option<WindowId> {
        Some(WindowId::QuestList)
    }

    fn active_window_update(&mut self, ctx: &mut MenuContext<'_>) -> ActiveOutcome {
        ctx.windows.get_mut(WindowId::Quest).update(ctx.input);
        ctx.windows.get_mut(WindowId::QuestList).update(ctx.input);
        ActiveOutcome::Continue
    }

    fn draw_main(&self, _view: &DrawContext<'_>, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::BottomWindow);
        out.push(DrawCommand::Window(WindowId::Quest));
    }

    fn draw_side(&self, _view: &DrawContext<'_>, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::Window(WindowId::QuestList));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::StatusLine;
    use crate::widgets::testing::window_set;
    use crate::widgets::{InputFrame, OptionBox, StaticGameData};

    #[test]
    fn reset_defaults_to_back() {
        let (mut windows, _) = window_set();
        let mut state = QuestState::new(Box::new(OptionBox::new())).unwrap();
        state.reset(&mut windows);
        assert_eq!(state.core().selection(), QuestState::BACK);
    }

    #[test]
    fn entry_forces_view_and_focuses_list() {
        let (mut windows, _) = window_set();
        let mut state = QuestState::new(Box::new(OptionBox::new())).unwrap();
        state.reset(&mut windows);
        state.core_mut().options_mut().set_cursor_visible(false);

        state.on_entry(
            Entry {
                from: MenuStateId::MainMenu,
                from_selection: 3,
            },
            &mut windows,
        );

        assert_eq!(state.core().selection(), QuestState::VIEW);
        assert!(state.core().options().cursor_visible());
        assert!(state.is_active(&windows));
    }

    #[test]
    fn active_update_drives_both_windows() {
        let (mut windows, spies) = window_set();
        let mut status = StatusLine::new("Drunes");
        let data = StaticGameData::default();
        let input = InputFrame::idle();
        let mut state = QuestState::new(Box::new(OptionBox::new())).unwrap();

        state.active_window_update(&mut MenuContext {
            windows: &mut windows,
            input: &input,
            data: &data,
            status: &mut status,
        });

        assert_eq!(spies.get(WindowId::Quest).borrow().updates, 1);
        assert_eq!(spies.get(WindowId::QuestList).borrow().updates, 1);
    }
}
