//! Checks run when a menu session is assembled.
//!
//! Party checks are fatal. Asset checks use `Validation` so that every
//! missing file is reported in one pass, then degrade each one to a blank.

use crate::config::MenuConfig;
use crate::session::error::{AssetIssue, SessionError};
use crate::widgets::{AssetStore, GameData};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{error, warn};

/// Most characters the side panel has windows for.
pub const MAX_PARTY_SIZE: usize = 4;

const KEY_ITEM_SYMBOL: &str = "key item symbol";
const SHARD_SYMBOL: &str = "shard symbol";
const LOCALE_GRAPHIC: &str = "location graphic";

/// Cosmetic assets that were found; `None` means draw nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CosmeticAssets {
    pub key_item_symbol: Option<String>,
    pub shard_symbol: Option<String>,
    pub locale_graphic: Option<String>,
}

impl CosmeticAssets {
    fn forget(&mut self, issue: &AssetIssue) {
        let AssetIssue::Missing { kind, .. } = issue;
        match *kind {
            KEY_ITEM_SYMBOL => self.key_item_symbol = None,
            SHARD_SYMBOL => self.shard_symbol = None,
            LOCALE_GRAPHIC => self.locale_graphic = None,
            _ => {}
        }
    }
}

/// Number of character windows for the active party.
pub fn validate_party(data: &dyn GameData) -> Result<usize, SessionError> {
    let size = data.party_size();
    if (1..=MAX_PARTY_SIZE).contains(&size) {
        Ok(size)
    } else {
        error!(size, "no usable party for the menu");
        Err(SessionError::InvalidPartySize {
            size,
            max: MAX_PARTY_SIZE,
        })
    }
}

fn check_asset(
    store: &dyn AssetStore,
    kind: &'static str,
    path: &str,
) -> Validation<(), NonEmptyVec<AssetIssue>> {
    if store.exists(path) {
        Validation::success(())
    } else {
        Validation::fail(AssetIssue::Missing {
            kind,
            path: path.to_string(),
        })
    }
}

/// Check every cosmetic asset, accumulating ALL missing ones.
pub fn check_assets(
    config: &MenuConfig,
    data: &dyn GameData,
    store: &dyn AssetStore,
) -> Validation<(), NonEmptyVec<AssetIssue>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<AssetIssue>>> = vec![
        check_asset(store, KEY_ITEM_SYMBOL, &config.key_item_symbol),
        check_asset(store, SHARD_SYMBOL, &config.shard_symbol),
    ];
    if let Some(graphic) = data.location_graphic() {
        checks.push(check_asset(store, LOCALE_GRAPHIC, graphic));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Resolve cosmetic assets, logging and blanking the missing ones.
pub fn load_assets(
    config: &MenuConfig,
    data: &dyn GameData,
    store: &dyn AssetStore,
) -> CosmeticAssets {
    let mut assets = CosmeticAssets {
        key_item_symbol: Some(config.key_item_symbol.clone()),
        shard_symbol: Some(config.shard_symbol.clone()),
        locale_graphic: data.location_graphic().map(str::to_string),
    };

    if let Validation::Failure(issues) = check_assets(config, data, store) {
        for issue in issues.iter() {
            warn!(%issue, "drawing blank in its place");
            assets.forget(issue);
        }
    }
    assets
}
