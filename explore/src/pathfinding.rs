use crate::combobox::ComboboxState;
use crate::items::SearchValue;
use crate::tabs::SearchMode;
use std::mem;

/// Source and destination endpoints for pathfinding. A committed
/// pathfinding search needs both; a single committed endpoint degrades
/// to a node search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathfindingSearchState {
    pub source: ComboboxState,
    pub destination: ComboboxState,
}

impl PathfindingSearchState {
    /// Which search the current commitments justify, if any.
    pub fn committed_search_type(&self) -> Option<SearchMode> {
        match (self.source.is_committed(), self.destination.is_committed()) {
            (true, true) => Some(SearchMode::Pathfinding),
            (true, false) | (false, true) => Some(SearchMode::Node),
            (false, false) => None,
        }
    }

    pub fn committed_pair(&self) -> Option<(&SearchValue, &SearchValue)> {
        Some((self.source.committed()?, self.destination.committed()?))
    }

    /// Swap is only meaningful once both endpoints are committed; the UI
    /// disables the control otherwise.
    pub fn can_swap(&self) -> bool {
        self.source.is_committed() && self.destination.is_committed()
    }

    /// Exchanges source and destination, both term and selection, in one
    /// step. Its own inverse.
    pub fn swap(&mut self) {
        mem::swap(&mut self.source, &mut self.destination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn committed(id: &str, name: &str) -> ComboboxState {
        let mut state = ComboboxState::default();
        state.select(SearchValue::new(id, name, "User"));
        state
    }

    #[test]
    fn search_type_degrades_with_missing_endpoints() {
        let mut state = PathfindingSearchState::default();
        assert_eq!(state.committed_search_type(), None);

        state.source = committed("1", "admin");
        assert_eq!(state.committed_search_type(), Some(SearchMode::Node));

        state.destination = committed("2", "computer");
        assert_eq!(state.committed_search_type(), Some(SearchMode::Pathfinding));

        state.destination.edit("comp");
        assert_eq!(state.committed_search_type(), Some(SearchMode::Node));
    }

    #[test]
    fn swap_twice_is_identity() {
        let mut state = PathfindingSearchState {
            source: committed("1", "admin"),
            destination: committed("2", "computer"),
        };
        let before = state.clone();
        state.swap();
        assert_eq!(state.source.term(), "computer");
        assert_eq!(state.destination.term(), "admin");
        state.swap();
        assert_eq!(state, before);
    }

    #[test]
    fn swap_is_gated_on_two_commitments() {
        let mut state = PathfindingSearchState::default();
        assert!(!state.can_swap());
        state.source = committed("1", "admin");
        assert!(!state.can_swap());
        state.destination = committed("2", "computer");
        assert!(state.can_swap());
    }
}
