//! World map viewer. It has no options of its own; the map window owns all
//! input while the screen is current and leaving it is driven by that window.

use super::{ActiveOutcome, DrawContext, Entry, MenuContext, MenuState, StateCore};
use crate::builder::{BuildError, TransitionTableBuilder};
use crate::core::{MenuStateId, WindowId};
use crate::effects::DrawCommand;
use crate::widgets::{ActivationMode, InputFrame, Location, MenuWindows, OptionSelector};

pub struct WorldMapState {
    core: StateCore,
    location: Option<Location>,
}

impl WorldMapState {
    pub fn new(options: Box<dyn OptionSelector>) -> Result<Self, BuildError> {
        let table = TransitionTableBuilder::new(MenuStateId::WorldMap).build()?;
        Ok(Self {
            core: StateCore::new(MenuStateId::WorldMap, options, table),
            location: None,
        })
    }

    /// Location under the map cursor as of the last active frame.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

impl MenuState for WorldMapState {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn reset(&mut self, windows: &mut MenuWindows) {
        windows
            .get_mut(WindowId::WorldMap)
            .update(&InputFrame::idle());
        self.core.install(&[], 0);
        self.location = None;
    }

    fn on_entry(&mut self, entry: Entry, windows: &mut MenuWindows) {
        self.core.set_origin(entry.from);
        windows.activate(WindowId::WorldMap, ActivationMode::Default);
    }

    fn active_window(&self) -> Option<WindowId> {
        Some(WindowId::WorldMap)
    }

    fn active_window_update(&mut self, ctx: &mut MenuContext<'_>) -> ActiveOutcome {
        let map = ctx.windows.get_mut(WindowId::WorldMap);
        map.update(ctx.input);
        if !map.is_active() {
            return ActiveOutcome::Cancel;
        }
        self.location = map.viewing_location();
        ActiveOutcome::Continue
    }

    fn draw_main(&self, view: &DrawContext<'_>, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::Window(WindowId::WorldMap));
        out.push(DrawCommand::BottomWindow);
        if !self.is_active(view.windows) {
            return;
        }
        if let Some(location) = &self.location {
            out.push(DrawCommand::LocationInfo {
                name: location.name.clone(),
                image: location.image.clone(),
            });
        }
    }

    fn draw_side(&self, _view: &DrawContext<'_>, _out: &mut Vec<DrawCommand>) {}
}
