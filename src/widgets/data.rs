//! Read-only game data consumed for display.

use std::time::Duration;

/// Providers of the figures the menu shows but never decides on.
pub trait GameData {
    /// Total play time of the current save.
    fn play_time(&self) -> Duration;

    /// Money held by the party.
    fn currency(&self) -> u64;

    /// Number of characters in the active party.
    fn party_size(&self) -> usize;

    /// Display name of the map the menu was opened from.
    fn location_name(&self) -> &str;

    /// Banner image path for that map, if it has one.
    fn location_graphic(&self) -> Option<&str> {
        None
    }
}

/// Lookup for cosmetic assets such as icons and banners.
pub trait AssetStore {
    fn exists(&self, path: &str) -> bool;
}

impl<F> AssetStore for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}

/// Fixed-value game data, handy for tools and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticGameData {
    pub play_time: Duration,
    pub currency: u64,
    pub party_size: usize,
    pub location_name: String,
    pub location_graphic: Option<String>,
}

impl GameData for StaticGameData {
    fn play_time(&self) -> Duration {
        self.play_time
    }

    fn currency(&self) -> u64 {
        self.currency
    }

    fn party_size(&self) -> usize {
        self.party_size
    }

    fn location_name(&self) -> &str {
        &self.location_name
    }

    fn location_graphic(&self) -> Option<&str> {
        self.location_graphic.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_asset_stores() {
        let store = |path: &str| path.ends_with(".png");
        assert!(store.exists("img/menus/key.png"));
        assert!(!store.exists("img/menus/key.jpg"));
    }

    #[test]
    fn static_data_reports_fields() {
        let data = StaticGameData {
            play_time: Duration::from_secs(61),
            currency: 250,
            party_size: 3,
            location_name: "Harrvah Capital".to_string(),
            location_graphic: None,
        };

        assert_eq!(data.party_size(), 3);
        assert_eq!(data.location_name(), "Harrvah Capital");
        assert!(data.location_graphic().is_none());
    }
}
