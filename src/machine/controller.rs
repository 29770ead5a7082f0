//! The menu session: owns every state and routes frames to the current one.

use super::dispatch::{self, StepResult};
use crate::builder::MenuControllerBuilder;
use crate::config::MenuConfig;
use crate::core::{MenuStateId, State, StateHistory, StateTransition, TransitionKind, WindowId};
use crate::effects::{DrawCommand, EffectRequest, Effects, SuspendReason};
use crate::session::{validate_party, CosmeticAssets, SessionError};
use crate::states::{DrawContext, MenuContext, MenuState, StateSet, StatusLine};
use crate::widgets::{AssetStore, GameData, InputFrame, MenuWindows, MessageWindow};
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

const ROOT: MenuStateId = MenuStateId::MainMenu;

/// One open menu.
///
/// All seven states are built with the controller and live until it is
/// dropped. Exactly one of them is current. Call [`update`](Self::update)
/// then [`draw`](Self::draw) once per frame.
pub struct MenuController {
    pub(crate) session_id: Uuid,
    pub(crate) states: StateSet,
    pub(crate) current: MenuStateId,
    pub(crate) windows: MenuWindows,
    pub(crate) message: Option<Box<dyn MessageWindow>>,
    pub(crate) status: StatusLine,
    pub(crate) assets: CosmeticAssets,
    pub(crate) locale_name: String,
    pub(crate) party_size: usize,
    pub(crate) history: StateHistory<MenuStateId>,
    pub(crate) config: MenuConfig,
    pub(crate) exit_requested: bool,
}

impl MenuController {
    /// Open a menu with the default configuration and option boxes.
    pub fn new(
        windows: MenuWindows,
        data: &dyn GameData,
        store: &dyn AssetStore,
    ) -> Result<Self, SessionError> {
        MenuControllerBuilder::new().windows(windows).build(data, store)
    }

    pub fn builder() -> MenuControllerBuilder {
        MenuControllerBuilder::new()
    }

    /// Reinitialise every state, close the item window and return to the
    /// root. Origins are left as they are; the next entry overwrites them.
    pub fn reset(&mut self, data: &dyn GameData) {
        self.windows.deactivate(WindowId::Inventory);
        for state in self.states.iter_mut() {
            state.reset(&mut self.windows);
        }
        self.current = ROOT;
        self.exit_requested = false;
        self.status.refresh(data);
        info!(session = %self.session_id, "menu reset");
    }

    /// Process one frame of input.
    ///
    /// Once cancel on the root has asked to leave, further updates do
    /// nothing until [`reset`](Self::reset).
    pub fn update(&mut self, input: &InputFrame, data: &dyn GameData) -> Effects {
        let mut effects = Effects::new();
        if self.exit_requested {
            return effects;
        }

        if input.quit {
            effects.push(EffectRequest::Suspend(SuspendReason::Quit));
            return effects;
        }
        if input.pause {
            effects.push(EffectRequest::Suspend(SuspendReason::Pause));
            return effects;
        }

        if let Some(message) = self.message.as_mut() {
            message.update();
            if input.confirm || input.cancel {
                debug!(session = %self.session_id, "message dismissed");
                self.message = None;
            }
            return effects;
        }

        let mut ctx = MenuContext {
            windows: &mut self.windows,
            input,
            data,
            status: &mut self.status,
        };
        let result = dispatch::step(&mut self.states, self.current, &mut ctx, &mut effects);
        self.apply_result(result);
        effects
    }

    fn apply_result(&mut self, result: StepResult) {
        let from = self.current;
        let (to, kind) = match result {
            StepResult::Stayed => return,
            StepResult::Exit => {
                info!(session = %self.session_id, "leaving menu");
                self.exit_requested = true;
                return;
            }
            StepResult::Entered { to, .. } => (to, TransitionKind::Entry),
            StepResult::Returned(to) => (to, TransitionKind::Cancel),
        };

        debug!(
            session = %self.session_id,
            from = from.name(),
            to = to.name(),
            ?kind,
            "menu transition"
        );
        self.history.record(StateTransition {
            from,
            to,
            kind,
            timestamp: Utc::now(),
        });
        self.current = to;
    }

    /// Display list for this frame, in painter's order.
    pub fn draw(&self) -> Vec<DrawCommand> {
        let view = DrawContext {
            windows: &self.windows,
            status: &self.status,
            assets: &self.assets,
            locale_name: &self.locale_name,
            party_size: self.party_size,
        };
        let state = self.states.get(self.current);

        let mut out = vec![DrawCommand::SavedScreen, DrawCommand::Chrome];
        state.draw_main(&view, &mut out);
        state.draw_side(&view, &mut out);
        out.push(DrawCommand::Options(state.core().options_view()));
        if let Some(message) = &self.message {
            out.push(DrawCommand::Message(message.text().to_string()));
        }
        out
    }

    /// Show a modal message over the menu until confirm or cancel.
    pub fn post_message(&mut self, message: Box<dyn MessageWindow>) {
        debug!(session = %self.session_id, text = message.text(), "message posted");
        self.message = Some(message);
    }

    /// Re-read the party after it changed outside the menu.
    pub fn reload_party(&mut self, data: &dyn GameData) -> Result<(), SessionError> {
        self.party_size = validate_party(data)?;
        Ok(())
    }

    pub fn current_state(&self) -> MenuStateId {
        self.current
    }

    pub fn state(&self, id: MenuStateId) -> &dyn MenuState {
        self.states.get(id)
    }

    pub fn origin_of(&self, id: MenuStateId) -> Option<MenuStateId> {
        self.states.get(id).origin()
    }

    pub fn selection_of(&self, id: MenuStateId) -> usize {
        self.states.get(id).core().selection()
    }

    /// Move the cursor of `id` without going through input.
    pub fn select(&mut self, id: MenuStateId, index: usize) {
        self.states
            .get_mut(id)
            .core_mut()
            .options_mut()
            .set_selection(index);
    }

    /// Enable or grey out one option of `id`.
    pub fn set_option_enabled(&mut self, id: MenuStateId, index: usize, enabled: bool) {
        self.states
            .get_mut(id)
            .core_mut()
            .options_mut()
            .set_option_enabled(index, enabled);
    }

    pub fn windows(&self) -> &MenuWindows {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut MenuWindows {
        &mut self.windows
    }

    pub fn history(&self) -> &StateHistory<MenuStateId> {
        &self.history
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn assets(&self) -> &CosmeticAssets {
        &self.assets
    }

    pub fn party_size(&self) -> usize {
        self.party_size
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn message_posted(&self) -> bool {
        self.message.is_some()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }
}

impl Drop for MenuController {
    fn drop(&mut self) {
        debug!(session = %self.session_id, "menu closed");
    }
}

impl std::fmt::Debug for MenuController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuController")
            .field("session_id", &self.session_id)
            .field("current", &self.current)
            .field("windows", &self.windows)
            .field("message_posted", &self.message.is_some())
            .field("exit_requested", &self.exit_requested)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Cue;
    use crate::states::MainMenuState;
    use crate::widgets::testing::{window_set, Spies};
    use crate::widgets::{MessageBox, StaticGameData};

    fn party(size: usize) -> StaticGameData {
        StaticGameData {
            party_size: size,
            location_name: "Harrvah".to_string(),
            ..StaticGameData::default()
        }
    }

    fn open() -> (MenuController, Spies, StaticGameData) {
        let (windows, spies) = window_set();
        let data = party(3);
        let menu = MenuController::new(windows, &data, &|_: &str| true).unwrap();
        (menu, spies, data)
    }

    #[test]
    fn opens_on_root() {
        let (menu, _, _) = open();
        assert_eq!(menu.current_state(), MenuStateId::MainMenu);
        assert_eq!(menu.party_size(), 3);
        assert!(menu.history().is_empty());
    }

    #[test]
    fn empty_party_refuses_to_open() {
        let (windows, _) = window_set();
        let result = MenuController::new(windows, &party(0), &|_: &str| true);
        assert!(matches!(
            result,
            Err(SessionError::InvalidPartySize { size: 0, .. })
        ));
    }

    #[test]
    fn exit_is_requested_exactly_once() {
        let (mut menu, _, data) = open();

        let first = menu.update(&InputFrame::cancel(), &data);
        let second = menu.update(&InputFrame::cancel(), &data);

        assert_eq!(first.count(EffectRequest::ExitSession), 1);
        assert!(second.is_empty());
        assert!(menu.exit_requested());

        menu.reset(&data);
        assert!(!menu.exit_requested());
    }

    #[test]
    fn quit_and_pause_preempt_everything() {
        let (mut menu, _, data) = open();
        let mut input = InputFrame::quit();
        input.confirm = true;

        let effects = menu.update(&input, &data);
        assert_eq!(
            effects.as_slice(),
            [EffectRequest::Suspend(SuspendReason::Quit)]
        );
        assert_eq!(menu.current_state(), MenuStateId::MainMenu);

        let effects = menu.update(&InputFrame::pause(), &data);
        assert_eq!(
            effects.as_slice(),
            [EffectRequest::Suspend(SuspendReason::Pause)]
        );
    }

    #[test]
    fn message_swallows_input_until_dismissed() {
        let (mut menu, _, data) = open();
        menu.post_message(Box::new(MessageBox::new("Saved.")));

        let effects = menu.update(&InputFrame::right(), &data);
        assert!(effects.is_empty());
        assert_eq!(menu.selection_of(MenuStateId::MainMenu), 0);
        assert!(menu.message_posted());

        menu.update(&InputFrame::confirm(), &data);
        assert!(!menu.message_posted());
        assert_eq!(menu.current_state(), MenuStateId::MainMenu);
    }

    #[test]
    fn transitions_are_logged() {
        let (mut menu, _, data) = open();

        menu.update(&InputFrame::confirm(), &data);
        menu.update(&InputFrame::cancel(), &data);

        let kinds: Vec<_> = menu.history().transitions().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TransitionKind::Entry, TransitionKind::Cancel]);
        assert_eq!(
            menu.history().get_path(),
            vec![
                &MenuStateId::MainMenu,
                &MenuStateId::Inventory,
                &MenuStateId::MainMenu
            ]
        );
    }

    #[test]
    fn draw_follows_fixed_order() {
        let (mut menu, _, _) = open();
        menu.post_message(Box::new(MessageBox::new("Saved.")));

        let list = menu.draw();

        assert_eq!(list[0], DrawCommand::SavedScreen);
        assert_eq!(list[1], DrawCommand::Chrome);
        assert!(matches!(
            list[list.len() - 2],
            DrawCommand::Options(ref view) if view.state == MenuStateId::MainMenu
        ));
        assert_eq!(list[list.len() - 1], DrawCommand::Message("Saved.".to_string()));
    }

    #[test]
    fn reset_returns_to_root_and_closes_items() {
        let (mut menu, spies, data) = open();
        menu.update(&InputFrame::confirm(), &data);
        menu.update(&InputFrame::confirm(), &data);
        assert!(menu.windows().is_active(WindowId::Inventory));

        menu.reset(&data);

        assert_eq!(menu.current_state(), MenuStateId::MainMenu);
        assert!(!spies.get(WindowId::Inventory).borrow().active);
        assert_eq!(
            menu.selection_of(MenuStateId::MainMenu),
            MainMenuState::INVENTORY
        );
        assert_eq!(
            menu.origin_of(MenuStateId::Inventory),
            Some(MenuStateId::MainMenu)
        );
    }

    #[test]
    fn reload_party_rejects_empty_party() {
        let (mut menu, _, _) = open();

        assert!(menu.reload_party(&party(4)).is_ok());
        assert_eq!(menu.party_size(), 4);
        assert!(menu.reload_party(&party(0)).is_err());
        assert_eq!(menu.party_size(), 4);
    }

    #[test]
    fn cue_sounds_resolve_from_config() {
        let (menu, _, _) = open();
        assert_eq!(menu.config().cue_sound(Cue::Cancel), "snd/cancel.wav");
    }
}
