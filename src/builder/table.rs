//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{Outcome, State, TransitionTable, WindowId};

/// Highest option index a table accepts, plus one.
pub const MAX_OPTIONS: usize = 64;

/// Builder for transition tables with a fluent API.
///
/// Errors are deferred to [`build`](Self::build) so a table reads as one
/// chained expression.
pub struct TransitionTableBuilder<S: State> {
    owner: S,
    entries: Vec<(usize, Outcome<S>)>,
}

impl<S: State> TransitionTableBuilder<S> {
    /// Create a new builder for the state owning the table.
    pub fn new(owner: S) -> Self {
        Self {
            owner,
            entries: Vec::new(),
        }
    }

    /// Confirming option `index` makes `target` current.
    pub fn goto(self, index: usize, target: S) -> Self {
        self.on(index, Outcome::Goto(target))
    }

    /// Confirming option `index` activates `window` in place.
    pub fn activate(self, index: usize, window: WindowId) -> Self {
        self.on(index, Outcome::Activate(window))
    }

    /// Map option `index` to an arbitrary outcome.
    pub fn on(mut self, index: usize, outcome: Outcome<S>) -> Self {
        self.entries.push((index, outcome));
        self
    }

    /// Build the table.
    /// Returns an error if an option targets the owner, is mapped twice or
    /// is not below [`MAX_OPTIONS`].
    pub fn build(self) -> Result<TransitionTable<S>, BuildError> {
        if let Some((index, _)) = self.entries.iter().find(|(index, _)| *index >= MAX_OPTIONS) {
            return Err(BuildError::OptionOutOfRange {
                state: self.owner.name().to_string(),
                index: *index,
                max: MAX_OPTIONS - 1,
            });
        }

        let len = self
            .entries
            .iter()
            .map(|(index, _)| index + 1)
            .max()
            .unwrap_or(0);
        let mut slots: Vec<Option<Outcome<S>>> = vec![None; len];

        for (index, outcome) in self.entries {
            if outcome == Outcome::Goto(self.owner) {
                return Err(BuildError::SelfTransition {
                    state: self.owner.name().to_string(),
                    index,
                });
            }
            if slots[index].is_some() {
                return Err(BuildError::DuplicateOption {
                    state: self.owner.name().to_string(),
                    index,
                });
            }
            slots[index] = Some(outcome);
        }

        Ok(TransitionTable::from_entries(self.owner, slots))
    }
}
