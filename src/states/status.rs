//! Play time and money shown in the bottom window.

use crate::widgets::GameData;
use std::time::Duration;

/// Derived status text, refreshed from [`GameData`] each frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    currency_label: String,
    time: String,
    currency: String,
}

impl StatusLine {
    pub fn new(currency_label: impl Into<String>) -> Self {
        let currency_label = currency_label.into();
        Self {
            time: format_play_time(Duration::ZERO),
            currency: format!("{currency_label}: 0"),
            currency_label,
        }
    }

    pub fn refresh(&mut self, data: &dyn GameData) {
        self.time = format_play_time(data.play_time());
        self.currency = format!("{}: {}", self.currency_label, data.currency());
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

fn format_play_time(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);
    format!("Time: {hours:02}:{minutes:02}:{seconds:02}")
}
