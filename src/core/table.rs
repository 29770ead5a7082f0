//! Transition tables: option index to outcome.

use super::state::{State, WindowId};
use crate::builder::TransitionTableBuilder;
use serde::{Deserialize, Serialize};

/// What confirming an option does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Outcome<S: State> {
    /// Make another state current.
    Goto(S),

    /// Stay put and hand input focus to an embedded window.
    Activate(WindowId),
}

/// Pure mapping from a state's option indices to outcomes.
///
/// Tables are built once per state with [`TransitionTableBuilder`], which
/// rejects self-targets and duplicate indices, and are never mutated
/// afterwards. Resolution is therefore deterministic.
///
/// # Example
///
/// ```rust
/// use menu_mode::core::{MenuStateId, Outcome, TransitionTable, WindowId};
///
/// let table = TransitionTable::builder(MenuStateId::Party)
///     .activate(0, WindowId::Party)
///     .goto(1, MenuStateId::MainMenu)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.resolve(1), Some(Outcome::Goto(MenuStateId::MainMenu)));
/// assert_eq!(table.resolve(7), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionTable<S: State> {
    owner: S,
    entries: Vec<Option<Outcome<S>>>,
}

impl<S: State> TransitionTable<S> {
    /// Start building a table for `owner`.
    pub fn builder(owner: S) -> TransitionTableBuilder<S> {
        TransitionTableBuilder::new(owner)
    }

    pub(crate) fn from_entries(owner: S, entries: Vec<Option<Outcome<S>>>) -> Self {
        Self { owner, entries }
    }

    /// The state this table belongs to.
    pub fn owner(&self) -> S {
        self.owner
    }

    /// Number of option slots, mapped or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the outcome for `selection`.
    ///
    /// Returns `None` for indices outside the table or left unmapped.
    pub fn resolve(&self, selection: usize) -> Option<Outcome<S>> {
        self.entries.get(selection).copied().flatten()
    }

    /// Every state this table can lead to.
    pub fn targets(&self) -> impl Iterator<Item = S> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            Some(Outcome::Goto(target)) => Some(*target),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MenuStateId;

    fn inventory_table() -> TransitionTable<MenuStateId> {
        TransitionTable::builder(MenuStateId::Inventory)
            .activate(0, WindowId::Inventory)
            .goto(1, MenuStateId::Equip)
            .goto(2, MenuStateId::Equip)
            .goto(3, MenuStateId::MainMenu)
            .build()
            .unwrap()
    }

    #[test]
    fn resolve_returns_mapped_outcomes() {
        let table = inventory_table();

        assert_eq!(table.resolve(0), Some(Outcome::Activate(WindowId::Inventory)));
        assert_eq!(table.resolve(1), Some(Outcome::Goto(MenuStateId::Equip)));
        assert_eq!(table.resolve(2), Some(Outcome::Goto(MenuStateId::Equip)));
        assert_eq!(table.resolve(3), Some(Outcome::Goto(MenuStateId::MainMenu)));
    }

    #[test]
    fn resolve_out_of_range_is_none() {
        let table = inventory_table();
        assert_eq!(table.len(), 4);
        assert_eq!(table.resolve(4), None);
        assert_eq!(table.resolve(usize::MAX), None);
    }

    #[test]
    fn gaps_resolve_to_none() {
        let table = TransitionTable::builder(MenuStateId::Skills)
            .goto(2, MenuStateId::MainMenu)
            .build()
            .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.resolve(0), None);
        assert_eq!(table.resolve(1), None);
        assert_eq!(table.resolve(2), Some(Outcome::Goto(MenuStateId::MainMenu)));
    }

    #[test]
    fn resolve_is_deterministic() {
        let table = inventory_table();
        for i in 0..6 {
            assert_eq!(table.resolve(i), table.resolve(i));
        }
    }

    #[test]
    fn targets_lists_goto_entries_only() {
        let table = inventory_table();
        let targets: Vec<_> = table.targets().collect();
        assert_eq!(
            targets,
            vec![MenuStateId::Equip, MenuStateId::Equip, MenuStateId::MainMenu]
        );
    }

    #[test]
    fn empty_table_resolves_nothing() {
        let table = TransitionTable::builder(MenuStateId::WorldMap)
            .build()
            .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.resolve(0), None);
    }
}
