//! Builder for constructing menu controllers.

use crate::builder::error::BuildError;
use crate::config::MenuConfig;
use crate::core::{MenuStateId, StateHistory};
use crate::machine::MenuController;
use crate::session::{load_assets, validate_party, SessionError};
use crate::states::{StateSet, StatusLine};
use crate::widgets::{AssetStore, GameData, MenuWindows, OptionBox, OptionSelector};
use tracing::{debug, info};
use uuid::Uuid;

type SelectorFactory = Box<dyn FnMut() -> Box<dyn OptionSelector>>;

/// Builder for menu controllers with a fluent API.
pub struct MenuControllerBuilder {
    config: MenuConfig,
    windows: Option<MenuWindows>,
    selectors: SelectorFactory,
}

impl MenuControllerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: MenuConfig::default(),
            windows: None,
            selectors: Box::new(stock_selector),
        }
    }

    pub fn config(mut self, config: MenuConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the sub-windows (required).
    pub fn windows(mut self, windows: MenuWindows) -> Self {
        self.windows = Some(windows);
        self
    }

    /// Replace the option selector handed to each state.
    pub fn selectors<F>(mut self, factory: F) -> Self
    where
        F: FnMut() -> Box<dyn OptionSelector> + 'static,
    {
        self.selectors = Box::new(factory);
        self
    }

    /// Build the controller, validating the party and resolving assets.
    ///
    /// An invalid party is fatal. Missing assets are logged and drawn blank.
    pub fn build(
        self,
        data: &dyn GameData,
        store: &dyn AssetStore,
    ) -> Result<MenuController, SessionError> {
        let Self {
            config,
            windows,
            mut selectors,
        } = self;
        let windows = windows.ok_or(BuildError::MissingWindows)?;
        let party_size = validate_party(data)?;
        let states = StateSet::build(&mut *selectors)?;
        let assets = load_assets(&config, data, store);

        let session_id = Uuid::new_v4();
        info!(
            session = %session_id,
            party_size,
            locale = data.location_name(),
            "opening menu"
        );
        debug!(session = %session_id, ?assets, "cosmetic assets resolved");

        let mut controller = MenuController {
            session_id,
            states,
            current: MenuStateId::MainMenu,
            windows,
            message: None,
            status: StatusLine::new(config.currency_label.clone()),
            assets,
            locale_name: data.location_name().to_string(),
            party_size,
            history: StateHistory::with_capacity(config.history_capacity),
            config,
            exit_requested: false,
        };
        controller.reset(data);
        Ok(controller)
    }
}

impl Default for MenuControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn stock_selector() -> Box<dyn OptionSelector> {
    Box::new(OptionBox::new())
}
