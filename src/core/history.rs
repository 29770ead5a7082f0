//! Diagnostic log of menu transitions.
//!
//! The log records what happened for debugging and tests. It plays no part in
//! cancel handling: returning to a previous screen is decided solely by each
//! state's one-level origin link.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// How the current state changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// A confirmed option entered a new state.
    Entry,
    /// The current state returned to its origin.
    Cancel,
}

/// Record of a single change of the current state.
///
/// # Example
///
/// ```rust
/// use menu_mode::core::{MenuStateId, StateTransition, TransitionKind};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: MenuStateId::MainMenu,
///     to: MenuStateId::Inventory,
///     kind: TransitionKind::Entry,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, MenuStateId::Inventory);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state that was current
    pub from: S,
    /// The state that became current
    pub to: S,
    /// Whether this was an entry or a return
    pub kind: TransitionKind,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered history of state transitions.
///
/// Once `capacity` records are held, recording drops the oldest one.
/// A capacity of zero disables recording.
///
/// # Example
///
/// ```rust
/// use menu_mode::core::{MenuStateId, StateHistory, StateTransition, TransitionKind};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_capacity(8);
/// history.record(StateTransition {
///     from: MenuStateId::MainMenu,
///     to: MenuStateId::Quests,
///     kind: TransitionKind::Entry,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: MenuStateId::Quests,
///     to: MenuStateId::MainMenu,
///     kind: TransitionKind::Cancel,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // MainMenu -> Quests -> MainMenu
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    capacity: usize,
    transitions: VecDeque<StateTransition<S>>,
}

/// Records kept when no capacity is configured.
const DEFAULT_CAPACITY: usize = 64;

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history holding at most `capacity` records.
    ///
    /// Storage grows on demand; only a default-sized log is reserved up
    /// front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            transitions: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
        }
    }

    /// Record a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.capacity == 0 {
            return;
        }
        if self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest record followed by the `to`
    /// state of each record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest record, if any.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All held transitions, oldest first.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}
