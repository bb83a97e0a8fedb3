use crate::edge_types::ALL_EDGE_TYPES;

/// Aggregate checkbox display state for a category or subcategory row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupState {
    Checked,
    Unchecked,
    Indeterminate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct EdgeCheckbox {
    category: &'static str,
    subcategory: &'static str,
    edge_type: &'static str,
    checked: bool,
}

/// One checkbox row per edge type in the taxonomy. Category and
/// subcategory checkboxes are derived: checked iff every descendant is,
/// unchecked iff none is, indeterminate otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeFilterSet {
    boxes: Vec<EdgeCheckbox>,
}

impl Default for EdgeFilterSet {
    fn default() -> Self {
        Self::all_checked()
    }
}

impl EdgeFilterSet {
    /// The initial filter: every edge type participates in pathfinding.
    pub fn all_checked() -> Self {
        let mut boxes = Vec::new();
        for category in ALL_EDGE_TYPES {
            for subcategory in category.subcategories {
                for edge_type in subcategory.edge_types {
                    boxes.push(EdgeCheckbox {
                        category: category.name,
                        subcategory: subcategory.name,
                        edge_type,
                        checked: true,
                    });
                }
            }
        }
        Self { boxes }
    }

    pub fn set_edge_type(&mut self, edge_type: &str, checked: bool) {
        if let Some(row) = self
            .boxes
            .iter_mut()
            .find(|row| row.edge_type == edge_type)
        {
            row.checked = checked;
        }
    }

    pub fn edge_type_checked(&self, edge_type: &str) -> Option<bool> {
        self.boxes
            .iter()
            .find(|row| row.edge_type == edge_type)
            .map(|row| row.checked)
    }

    pub fn category_state(&self, category: &str) -> GroupState {
        group_state(
            self.boxes
                .iter()
                .filter(|row| row.category == category)
                .map(|row| row.checked),
        )
    }

    pub fn subcategory_state(&self, subcategory: &str) -> GroupState {
        group_state(
            self.boxes
                .iter()
                .filter(|row| row.subcategory == subcategory)
                .map(|row| row.checked),
        )
    }

    /// Writes one value to every edge type under the category.
    pub fn set_category(&mut self, category: &str, checked: bool) {
        for row in self.boxes.iter_mut().filter(|row| row.category == category) {
            row.checked = checked;
        }
    }

    pub fn set_subcategory(&mut self, subcategory: &str, checked: bool) {
        for row in self
            .boxes
            .iter_mut()
            .filter(|row| row.subcategory == subcategory)
        {
            row.checked = checked;
        }
    }

    /// A fully checked group toggles to unchecked; anything else checks
    /// every descendant.
    pub fn toggle_category(&mut self, category: &str) {
        let next = self.category_state(category) != GroupState::Checked;
        self.set_category(category, next);
    }

    pub fn toggle_subcategory(&mut self, subcategory: &str) {
        let next = self.subcategory_state(subcategory) != GroupState::Checked;
        self.set_subcategory(subcategory, next);
    }

    /// The edge types the pathfinding query should traverse.
    pub fn selected_edge_types(&self) -> Vec<&'static str> {
        self.boxes
            .iter()
            .filter(|row| row.checked)
            .map(|row| row.edge_type)
            .collect()
    }
}

fn group_state(mut checks: impl Iterator<Item = bool>) -> GroupState {
    let Some(first) = checks.next() else {
        return GroupState::Unchecked;
    };
    if checks.all(|checked| checked == first) {
        if first {
            GroupState::Checked
        } else {
            GroupState::Unchecked
        }
    } else {
        GroupState::Indeterminate
    }
}

/// An open edge-filter dialog. The live selection is snapshotted when
/// the dialog opens; Cancel rolls back to the snapshot, Apply publishes
/// the in-dialog edits.
#[derive(Clone, Debug)]
pub struct EdgeFilterDialog {
    snapshot: EdgeFilterSet,
    working: EdgeFilterSet,
}

impl EdgeFilterDialog {
    pub fn open(live: &EdgeFilterSet) -> Self {
        Self {
            snapshot: live.clone(),
            working: live.clone(),
        }
    }

    pub fn working(&self) -> &EdgeFilterSet {
        &self.working
    }

    pub fn working_mut(&mut self) -> &mut EdgeFilterSet {
        &mut self.working
    }

    /// Discards the in-dialog edits and restores the state captured at
    /// open time.
    pub fn cancel(self) -> EdgeFilterSet {
        self.snapshot
    }

    /// Persists the in-dialog edits; the caller re-plans the pathfinding
    /// search with the returned set.
    pub fn apply(self) -> EdgeFilterSet {
        self.working
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn group_checkboxes_track_their_descendants() {
        let mut filters = EdgeFilterSet::all_checked();
        assert_eq!(
            filters.category_state("Active Directory"),
            GroupState::Checked
        );

        filters.set_edge_type("MemberOf", false);
        assert_eq!(
            filters.subcategory_state("Active Directory Structure"),
            GroupState::Indeterminate
        );
        assert_eq!(
            filters.category_state("Active Directory"),
            GroupState::Indeterminate
        );
        // The sibling category is untouched.
        assert_eq!(filters.category_state("Azure"), GroupState::Checked);

        filters.set_subcategory("Active Directory Structure", false);
        assert_eq!(
            filters.subcategory_state("Active Directory Structure"),
            GroupState::Unchecked
        );
    }

    #[test]
    fn toggling_a_category_writes_one_value_to_every_descendant() {
        let mut filters = EdgeFilterSet::all_checked();
        filters.toggle_category("Azure");
        assert_eq!(filters.category_state("Azure"), GroupState::Unchecked);
        assert_eq!(filters.edge_type_checked("AZGetKeys"), Some(false));

        // A mixed category checks everything rather than clearing.
        filters.set_edge_type("AZGetKeys", true);
        filters.toggle_category("Azure");
        assert_eq!(filters.category_state("Azure"), GroupState::Checked);
    }

    #[test]
    fn selected_edge_types_reflect_the_checks() {
        let mut filters = EdgeFilterSet::all_checked();
        let total = filters.selected_edge_types().len();
        filters.set_subcategory("Lateral Movement", false);
        let selected = filters.selected_edge_types();
        assert_eq!(selected.len(), total - 7);
        assert!(!selected.contains(&"AdminTo"));
        assert!(selected.contains(&"DCSync"));
    }

    #[test]
    fn cancel_restores_the_open_time_snapshot() {
        let mut live = EdgeFilterSet::all_checked();
        live.set_edge_type("DCSync", false);

        let mut dialog = EdgeFilterDialog::open(&live);
        dialog.working_mut().set_category("Azure", false);
        dialog.working_mut().set_edge_type("DCSync", true);

        let restored = dialog.cancel();
        assert_eq!(restored, live);
    }

    #[test]
    fn apply_publishes_the_in_dialog_edits() {
        let live = EdgeFilterSet::all_checked();
        let mut dialog = EdgeFilterDialog::open(&live);
        dialog.working_mut().toggle_subcategory("Credential Access");
        let applied = dialog.apply();
        assert_eq!(
            applied.subcategory_state("Credential Access"),
            GroupState::Unchecked
        );
        assert_eq!(applied.edge_type_checked("HasSession"), Some(false));
    }
}
