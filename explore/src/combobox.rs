use crate::items::SearchValue;

/// Input state shared by the node-search box and each pathfinding
/// endpoint: free text, an optional committed selection, and an
/// edit-dirty flag.
///
/// Editing never drops the stored selection outright — the combobox may
/// still be showing it — but an edited selection no longer counts as
/// committed, so tab teardown treats the field as free text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboboxState {
    term: String,
    selected: Option<SearchValue>,
    edited: bool,
}

impl ComboboxState {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn selected(&self) -> Option<&SearchValue> {
        self.selected.as_ref()
    }

    /// The committed selection, if the text has not been edited since it
    /// was picked.
    pub fn committed(&self) -> Option<&SearchValue> {
        if self.edited {
            None
        } else {
            self.selected.as_ref()
        }
    }

    pub fn is_committed(&self) -> bool {
        self.committed().is_some()
    }

    /// User typed into the field.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.term = text.into();
        self.edited = true;
    }

    /// User picked an entity from lookahead results. The visible text
    /// always becomes the item's name.
    pub fn select(&mut self, item: SearchValue) {
        self.term = item.name.clone();
        self.selected = Some(item);
        self.edited = false;
    }

    /// Carries raw text over from another tab's field at teardown time.
    /// The text arrives uncommitted.
    pub fn prefill(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.term = text;
        self.selected = None;
        self.edited = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn admin() -> SearchValue {
        SearchValue::new("1", "admin", "User")
    }

    #[test]
    fn selecting_reflects_the_name_into_the_term() {
        let mut state = ComboboxState::default();
        state.edit("adm");
        state.select(admin());
        assert_eq!(state.term(), "admin");
        assert!(state.is_committed());
    }

    #[test]
    fn editing_after_selection_uncommits_without_dropping_it() {
        let mut state = ComboboxState::default();
        state.select(admin());
        state.edit("admin2");
        assert_eq!(state.committed(), None);
        assert_eq!(state.selected(), Some(&admin()));
        assert_eq!(state.term(), "admin2");
    }

    #[test]
    fn reselecting_recommits() {
        let mut state = ComboboxState::default();
        state.select(admin());
        state.edit("adm");
        state.select(admin());
        assert!(state.is_committed());
    }

    #[test]
    fn prefill_ignores_empty_carry_over() {
        let mut state = ComboboxState::default();
        state.select(admin());
        state.prefill("");
        assert_eq!(state.term(), "admin");
        state.prefill("computer");
        assert_eq!(state.term(), "computer");
        assert_eq!(state.selected(), None);
    }
}
