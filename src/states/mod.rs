//! Menu screens and the hook set they share.
//!
//! Every screen implements [`MenuState`]. The per-frame algorithm that calls
//! these hooks lives in [`crate::machine`]; a state only says what its options
//! lead to and what happens around entry, cancel and activation.
//!
//! States never hold a pointer back to the session. Whatever they need from
//! it (windows, input, data) arrives through [`MenuContext`] on each call.

mod equip;
mod inventory;
mod main_menu;
mod party;
mod quest;
mod skills;
mod status;
mod world_map;

pub use equip::EquipState;
pub use inventory::InventoryState;
pub use main_menu::MainMenuState;
pub use party::PartyState;
pub use quest::QuestState;
pub use skills::SkillsState;
pub use status::StatusLine;
pub use world_map::WorldMapState;

use crate::builder::BuildError;
use crate::core::{MenuStateId, Outcome, State, TransitionTable, WindowId};
use crate::effects::{DrawCommand, OptionsView};
use crate::session::CosmeticAssets;
use crate::widgets::{ActivationMode, GameData, InputFrame, MenuWindows, OptionSelector};
use tracing::{debug, warn};

/// Session handle passed to every per-frame hook.
pub struct MenuContext<'a> {
    pub windows: &'a mut MenuWindows,
    pub input: &'a InputFrame,
    pub data: &'a dyn GameData,
    pub status: &'a mut StatusLine,
}

impl MenuContext<'_> {
    pub fn refresh_status(&mut self) {
        self.status.refresh(self.data);
    }
}

/// Read-only session view for drawing.
pub struct DrawContext<'a> {
    pub windows: &'a MenuWindows,
    pub status: &'a StatusLine,
    pub assets: &'a CosmeticAssets,
    pub locale_name: &'a str,
    pub party_size: usize,
}

impl DrawContext<'_> {
    /// Bottom window with location, play time, money and location banner.
    pub fn bottom_menu(&self, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::BottomWindow);
        out.push(DrawCommand::StatusLine {
            locale: self.locale_name.to_string(),
            time: self.status.time().to_string(),
            currency: self.status.currency().to_string(),
        });
        if let Some(graphic) = &self.assets.locale_graphic {
            out.push(DrawCommand::LocaleGraphic(graphic.clone()));
        }
    }

    pub fn help(&self, text: &str, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::HelpText(text.to_string()));
    }
}

/// How a state was entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The state that was current before.
    pub from: MenuStateId,
    /// The option confirmed in `from` to get here.
    pub from_selection: usize,
}

/// Result of a frame spent inside an active sub-window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveOutcome {
    Continue,
    /// The state wants to run its own cancel handling now.
    Cancel,
}

/// Data every state carries: identity, selector, table, origin.
pub struct StateCore {
    id: MenuStateId,
    options: Box<dyn OptionSelector>,
    table: TransitionTable<MenuStateId>,
    origin: Option<MenuStateId>,
}

impl StateCore {
    pub fn new(
        id: MenuStateId,
        options: Box<dyn OptionSelector>,
        table: TransitionTable<MenuStateId>,
    ) -> Self {
        Self {
            id,
            options,
            table,
            origin: None,
        }
    }

    pub fn id(&self) -> MenuStateId {
        self.id
    }

    pub fn origin(&self) -> Option<MenuStateId> {
        self.origin
    }

    pub fn set_origin(&mut self, from: MenuStateId) {
        self.origin = Some(from);
    }

    pub fn options(&self) -> &dyn OptionSelector {
        self.options.as_ref()
    }

    pub fn options_mut(&mut self) -> &mut dyn OptionSelector {
        self.options.as_mut()
    }

    pub fn table(&self) -> &TransitionTable<MenuStateId> {
        &self.table
    }

    pub fn selection(&self) -> usize {
        self.options.selection()
    }

    /// Replace the option labels and select `selection`.
    pub fn install(&mut self, labels: &[&str], selection: usize) {
        self.options
            .set_options(labels.iter().map(|label| label.to_string()).collect());
        self.options.set_selection(selection);
    }

    /// Where a plain cancel returns to: the origin, unless it is this state.
    pub fn default_cancel(&self) -> Option<MenuStateId> {
        self.origin.filter(|origin| *origin != self.id)
    }

    /// Table-driven transition lookup.
    ///
    /// `Activate` outcomes switch the window on and yield no target.
    pub fn resolve(&self, selection: usize, windows: &mut MenuWindows) -> Option<MenuStateId> {
        match self.table.resolve(selection) {
            Some(Outcome::Goto(target)) => Some(target),
            Some(Outcome::Activate(window)) => {
                debug!(state = self.id.name(), ?window, "activating sub-window");
                windows.activate(window, ActivationMode::Default);
                None
            }
            None => {
                warn!(
                    state = self.id.name(),
                    selection, "invalid option in transition table"
                );
                None
            }
        }
    }

    pub fn options_view(&self) -> OptionsView {
        OptionsView {
            state: self.id,
            labels: self.options.options().to_vec(),
            selection: self.options.selection(),
            cursor_visible: self.options.cursor_visible(),
        }
    }
}

/// The hook set of one menu screen.
///
/// Only [`core`](Self::core), [`core_mut`](Self::core_mut),
/// [`reset`](Self::reset) and [`draw_main`](Self::draw_main) are required;
/// the rest default to the behaviour shared by most screens.
pub trait MenuState {
    fn core(&self) -> &StateCore;
    fn core_mut(&mut self) -> &mut StateCore;

    fn id(&self) -> MenuStateId {
        self.core().id()
    }

    fn origin(&self) -> Option<MenuStateId> {
        self.core().origin()
    }

    /// Install option labels and the default selection.
    fn reset(&mut self, windows: &mut MenuWindows);

    /// Target for the confirmed option, or `None` after a local activation.
    fn transition_state(
        &mut self,
        selection: usize,
        windows: &mut MenuWindows,
    ) -> Option<MenuStateId> {
        self.core().resolve(selection, windows)
    }

    fn on_entry(&mut self, entry: Entry, _windows: &mut MenuWindows) {
        self.core_mut().set_origin(entry.from);
    }

    /// State to make current on cancel, if any.
    fn on_cancel(&mut self) -> Option<MenuStateId> {
        self.core().default_cancel()
    }

    /// Sub-window this state hands input to while it is active.
    fn active_window(&self) -> Option<WindowId> {
        None
    }

    fn is_active(&self, windows: &MenuWindows) -> bool {
        self.active_window()
            .is_some_and(|window| windows.is_active(window))
    }

    fn active_window_update(&mut self, ctx: &mut MenuContext<'_>) -> ActiveOutcome {
        if let Some(window) = self.active_window() {
            ctx.windows.get_mut(window).update(ctx.input);
        }
        ActiveOutcome::Continue
    }

    /// Runs after transition handling on frames without an active window.
    fn on_update_state(&mut self, _ctx: &mut MenuContext<'_>) {}

    fn draw_main(&self, view: &DrawContext<'_>, out: &mut Vec<DrawCommand>);

    fn draw_side(&self, view: &DrawContext<'_>, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::CharacterWindows {
            count: view.party_size,
        });
    }
}

/// Every state of a session, keyed by [`MenuStateId`].
pub struct StateSet {
    states: Vec<Box<dyn MenuState>>,
}

impl StateSet {
    /// Construct all seven states, each with a selector from `selectors`.
    pub fn build(
        selectors: &mut dyn FnMut() -> Box<dyn OptionSelector>,
    ) -> Result<Self, BuildError> {
        let states = MenuStateId::ALL
            .iter()
            .map(|id| build_state(*id, selectors()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { states })
    }

    pub fn get(&self, id: MenuStateId) -> &dyn MenuState {
        self.states[id.index()].as_ref()
    }

    pub fn get_mut(&mut self, id: MenuStateId) -> &mut dyn MenuState {
        self.states[id.index()].as_mut()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn MenuState>> {
        self.states.iter_mut()
    }
}

fn build_state(
    id: MenuStateId,
    options: Box<dyn OptionSelector>,
) -> Result<Box<dyn MenuState>, BuildError> {
    Ok(match id {
        MenuStateId::MainMenu => Box::new(MainMenuState::new(options)?),
        MenuStateId::Inventory => Box::new(InventoryState::new(options)?),
        MenuStateId::Party => Box::new(PartyState::new(options)?),
        MenuStateId::Skills => Box::new(SkillsState::new(options)?),
        MenuStateId::Equip => Box::new(EquipState::new(options)?),
        MenuStateId::Quests => Box::new(QuestState::new(options)?),
        MenuStateId::WorldMap => Box::new(WorldMapState::new(options)?),
    })
}
