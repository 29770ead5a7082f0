//! Option selector contract and the stock horizontal option box.

/// Pending event reported by a selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectorEvent {
    #[default]
    None,
    /// An enabled option was confirmed since the last `update()`.
    Confirm,
}

/// Navigable single-selection list with an edge-triggered confirm event.
///
/// The event armed by `input_confirm` stays readable through `event()` until
/// the next `update()`, which clears it.
pub trait OptionSelector {
    fn set_options(&mut self, labels: Vec<String>);
    fn options(&self) -> &[String];
    fn set_selection(&mut self, index: usize);
    fn selection(&self) -> usize;
    fn input_left(&mut self);
    fn input_right(&mut self);
    fn input_confirm(&mut self);
    fn event(&self) -> SelectorEvent;
    /// Advance one frame, clearing the pending event.
    fn update(&mut self);
    fn is_option_enabled(&self, index: usize) -> bool;
    fn set_option_enabled(&mut self, index: usize, enabled: bool);
    fn cursor_visible(&self) -> bool;
    fn set_cursor_visible(&mut self, visible: bool);
}

/// Single-row option box that wraps around at both ends.
#[derive(Clone, Debug)]
pub struct OptionBox {
    labels: Vec<String>,
    enabled: Vec<bool>,
    selection: usize,
    event: SelectorEvent,
    cursor_visible: bool,
}

impl Default for OptionBox {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionBox {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            enabled: Vec::new(),
            selection: 0,
            event: SelectorEvent::None,
            cursor_visible: true,
        }
    }

    pub fn with_options<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let mut option_box = Self::new();
        option_box.set_options(labels.into_iter().map(Into::into).collect());
        option_box
    }
}

impl OptionSelector for OptionBox {
    fn set_options(&mut self, labels: Vec<String>) {
        self.enabled = vec![true; labels.len()];
        self.labels = labels;
        self.selection = 0;
        self.event = SelectorEvent::None;
    }

    fn options(&self) -> &[String] {
        &self.labels
    }

    fn set_selection(&mut self, index: usize) {
        if index < self.labels.len() {
            self.selection = index;
        }
    }

    fn selection(&self) -> usize {
        self.selection
    }

    fn input_left(&mut self) {
        let count = self.labels.len();
        if count == 0 {
            return;
        }
        self.selection = (self.selection + count - 1) % count;
    }

    fn input_right(&mut self) {
        let count = self.labels.len();
        if count == 0 {
            return;
        }
        self.selection = (self.selection + 1) % count;
    }

    fn input_confirm(&mut self) {
        if self.is_option_enabled(self.selection) {
            self.event = SelectorEvent::Confirm;
        }
    }

    fn event(&self) -> SelectorEvent {
        self.event
    }

    fn update(&mut self) {
        self.event = SelectorEvent::None;
    }

    fn is_option_enabled(&self, index: usize) -> bool {
        self.enabled.get(index).copied().unwrap_or(false)
    }

    fn set_option_enabled(&mut self, index: usize, enabled: bool) {
        if let Some(slot) = self.enabled.get_mut(index) {
            *slot = enabled;
        }
    }

    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_at_both_ends() {
        let mut options = OptionBox::with_options(["Use", "Back"]);
        options.input_left();
        assert_eq!(options.selection(), 1);
        options.input_right();
        assert_eq!(options.selection(), 0);
    }

    #[test]
    fn confirm_event_survives_until_update() {
        let mut options = OptionBox::with_options(["View", "Back"]);
        options.input_confirm();
        assert_eq!(options.event(), SelectorEvent::Confirm);
        assert_eq!(options.event(), SelectorEvent::Confirm);

        options.update();
        assert_eq!(options.event(), SelectorEvent::None);
    }

    #[test]
    fn disabled_option_does_not_arm_confirm() {
        let mut options = OptionBox::with_options(["Items", "Equip"]);
        options.set_option_enabled(0, false);
        options.input_confirm();
        assert_eq!(options.event(), SelectorEvent::None);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut options = OptionBox::with_options(["Back"]);
        options.set_selection(3);
        assert_eq!(options.selection(), 0);
        assert!(!options.is_option_enabled(3));
    }

    #[test]
    fn empty_box_tolerates_input() {
        let mut options = OptionBox::new();
        options.input_left();
        options.input_right();
        options.input_confirm();
        assert_eq!(options.selection(), 0);
        assert_eq!(options.event(), SelectorEvent::None);
    }

    #[test]
    fn set_options_resets_selection_and_enables_all() {
        let mut options = OptionBox::with_options(["A", "B", "C"]);
        options.set_selection(2);
        options.set_option_enabled(1, false);

        options.set_options(vec!["X".to_string(), "Y".to_string()]);
        assert_eq!(options.selection(), 0);
        assert!(options.is_option_enabled(1));
        assert_eq!(options.options(), ["X".to_string(), "Y".to_string()]);
    }
}
