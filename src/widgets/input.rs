//! Per-frame input snapshot.

/// Edge-triggered input queries.
///
/// Each query must report `true` at most once per physical press; polling
/// and debouncing belong to the implementor.
pub trait InputSource {
    fn cancel_press(&self) -> bool;
    fn left_press(&self) -> bool;
    fn right_press(&self) -> bool;
    fn confirm_press(&self) -> bool;
    fn quit_press(&self) -> bool;
    fn pause_press(&self) -> bool;
}

/// The presses observed during one frame.
///
/// The controller reads a snapshot rather than the live source so that every
/// hook in a frame sees the same edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub cancel: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
    pub quit: bool,
    pub pause: bool,
}

impl InputFrame {
    /// Snapshot every query of `source` once.
    pub fn poll(source: &impl InputSource) -> Self {
        Self {
            cancel: source.cancel_press(),
            left: source.left_press(),
            right: source.right_press(),
            confirm: source.confirm_press(),
            quit: source.quit_press(),
            pause: source.pause_press(),
        }
    }

    /// A frame with no presses.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn cancel() -> Self {
        Self {
            cancel: true,
            ..Self::default()
        }
    }

    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::default()
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    pub fn pause() -> Self {
        Self {
            pause: true,
            ..Self::default()
        }
    }

    /// True when nothing was pressed.
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

impl InputSource for InputFrame {
    fn cancel_press(&self) -> bool {
        self.cancel
    }

    fn left_press(&self) -> bool {
        self.left
    }

    fn right_press(&self) -> bool {
        self.right
    }

    fn confirm_press(&self) -> bool {
        self.confirm
    }

    fn quit_press(&self) -> bool {
        self.quit
    }

    fn pause_press(&self) -> bool {
        self.pause
    }
}
