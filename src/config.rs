//! Menu session configuration.

use crate::effects::Cue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid menu configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sound file played for each cue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueSounds {
    #[serde(default = "default_confirm_sound")]
    pub confirm: String,
    #[serde(default = "default_cancel_sound")]
    pub cancel: String,
}

impl Default for CueSounds {
    fn default() -> Self {
        Self {
            confirm: default_confirm_sound(),
            cancel: default_cancel_sound(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Label in front of the party's money on the status line.
    #[serde(default = "default_currency_label")]
    pub currency_label: String,
    #[serde(default)]
    pub sounds: CueSounds,
    #[serde(default = "default_key_item_symbol")]
    pub key_item_symbol: String,
    #[serde(default = "default_shard_symbol")]
    pub shard_symbol: String,
    /// Transitions kept in the diagnostic log; zero disables it.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_currency_label() -> String {
    "Drunes".to_string()
}
fn default_confirm_sound() -> String {
    "snd/confirm.wav".to_string()
}
fn default_cancel_sound() -> String {
    "snd/cancel.wav".to_string()
}
fn default_key_item_symbol() -> String {
    "img/menus/key.png".to_string()
}
fn default_shard_symbol() -> String {
    "img/menus/shard.png".to_string()
}
fn default_history_capacity() -> usize {
    64
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            currency_label: default_currency_label(),
            sounds: CueSounds::default(),
            key_item_symbol: default_key_item_symbol(),
            shard_symbol: default_shard_symbol(),
            history_capacity: default_history_capacity(),
        }
    }
}

impl MenuConfig {
    /// Parse a configuration, filling every missing field with its default.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sound file for `cue`.
    pub fn cue_sound(&self, cue: Cue) -> &str {
        match cue {
            Cue::Confirm => &self.sounds.confirm,
            Cue::Cancel => &self.sounds.cancel,
        }
    }
}
