use crate::combobox::ComboboxState;
use crate::cypher::CypherSearchState;
use crate::items::SearchValue;
use crate::params::ExploreParams;
use crate::params::ParamUpdate;
use crate::pathfinding::PathfindingSearchState;
use crate::tabs::SearchMode;
use tracing::debug;

/// The explore-search coordinator. Exactly one tab is active at a time;
/// every user event is an explicit method that returns the atomic
/// [`ParamUpdate`] the caller applies to the shared URL state. Free text
/// never reaches the shared params — only committed selections do.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExploreSearch {
    active_tab: SearchMode,
    pub node: ComboboxState,
    pub pathfinding: PathfindingSearchState,
    pub cypher: CypherSearchState,
}

impl ExploreSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrates from existing URL params on mount. The tab and the
    /// Cypher text come straight from the params; `primarySearch` and
    /// `secondarySearch` carry bare object ids, so the caller resolves
    /// those against the backend and commits them through
    /// [`ExploreSearch::hydrate_primary`] / [`ExploreSearch::hydrate_secondary`].
    pub fn from_params(params: &ExploreParams) -> Self {
        let mut state = Self {
            active_tab: params.resolved_tab(),
            ..Self::default()
        };
        if let Some(cypher) = &params.cypher_search {
            state.cypher.set_query(cypher.clone());
        }
        state
    }

    pub fn active_tab(&self) -> SearchMode {
        self.active_tab
    }

    /// Commits a resolved `primarySearch` entity into the active tab's
    /// primary field.
    pub fn hydrate_primary(&mut self, item: SearchValue) {
        match self.active_tab {
            SearchMode::Pathfinding => self.pathfinding.source.select(item),
            SearchMode::Node | SearchMode::Cypher => self.node.select(item),
        }
    }

    /// Commits a resolved `secondarySearch` entity; only pathfinding has
    /// a secondary slot.
    pub fn hydrate_secondary(&mut self, item: SearchValue) {
        self.pathfinding.destination.select(item);
    }

    /// Switches tabs: tears down the outgoing mode's contribution to the
    /// shared params, sets up the incoming mode's, and returns the two
    /// halves merged into one atomic update.
    pub fn handle_tab_change(&mut self, next: SearchMode) -> ParamUpdate {
        if next == self.active_tab {
            return ParamUpdate::default();
        }
        debug!(from = %self.active_tab, to = %next, "explore tab change");
        let teardown = self.teardown(self.active_tab);
        let setup = self.setup(next);
        self.active_tab = next;
        teardown.merge(setup)
    }

    fn teardown(&mut self, outgoing: SearchMode) -> ParamUpdate {
        let mut update = ParamUpdate::default();
        match outgoing {
            SearchMode::Node => {
                // A committed selection survives the switch and seeds the
                // pathfinding start node; raw text carries over but its
                // param contribution is dropped.
                if let Some(item) = self.node.committed().cloned() {
                    self.pathfinding.source.select(item);
                } else {
                    update = update.clear_primary();
                    self.pathfinding.source.prefill(self.node.term());
                }
            }
            SearchMode::Pathfinding => {
                if let Some(item) = self.pathfinding.source.committed().cloned() {
                    self.node.select(item);
                } else {
                    update = update.clear_primary();
                    self.node.prefill(self.pathfinding.source.term());
                }
                if !self.pathfinding.destination.is_committed() {
                    update = update.clear_secondary();
                }
            }
            SearchMode::Cypher => {
                if !self.cypher.is_committed() {
                    update = update.clear_cypher();
                }
            }
        }
        update
    }

    fn setup(&self, incoming: SearchMode) -> ParamUpdate {
        let mut update = ParamUpdate::default();
        match incoming {
            SearchMode::Node => {
                if self.node.is_committed() {
                    update = update.set_search_type(SearchMode::Node);
                }
            }
            SearchMode::Pathfinding => {
                if let Some(search_type) = self.pathfinding.committed_search_type() {
                    update = update.set_search_type(search_type);
                }
            }
            SearchMode::Cypher => {
                update = update
                    .set_search_type(SearchMode::Cypher)
                    .set_cypher(self.cypher.query());
            }
        }
        update.set_tab(incoming)
    }

    /// Free-text edit in the node search box. Nothing leaks to params.
    pub fn handle_node_edited(&mut self, text: impl Into<String>) {
        self.node.edit(text);
    }

    /// Commits a node selection: exact-match node search.
    pub fn handle_node_selected(&mut self, item: SearchValue) -> ParamUpdate {
        let object_id = item.object_id.clone();
        self.node.select(item);
        ParamUpdate::default()
            .set_primary(object_id)
            .set_search_type(SearchMode::Node)
    }

    pub fn handle_source_edited(&mut self, text: impl Into<String>) {
        self.pathfinding.source.edit(text);
    }

    pub fn handle_destination_edited(&mut self, text: impl Into<String>) {
        self.pathfinding.destination.edit(text);
    }

    /// Commits the pathfinding start node. A lone endpoint degrades the
    /// search type to a node search of that endpoint.
    pub fn handle_source_selected(&mut self, item: SearchValue) -> ParamUpdate {
        let object_id = item.object_id.clone();
        self.pathfinding.source.select(item);
        let mut update = ParamUpdate::default().set_primary(object_id);
        if let Some(search_type) = self.pathfinding.committed_search_type() {
            update = update.set_search_type(search_type);
        }
        update
    }

    /// Commits the pathfinding destination node.
    pub fn handle_destination_selected(&mut self, item: SearchValue) -> ParamUpdate {
        let object_id = item.object_id.clone();
        self.pathfinding.destination.select(item);
        let mut update = ParamUpdate::default().set_secondary(object_id);
        if let Some(search_type) = self.pathfinding.committed_search_type() {
            update = update.set_search_type(search_type);
        }
        update
    }

    /// Exchanges the pathfinding endpoints. No-op until both are
    /// committed; the UI disables the control in that case.
    pub fn handle_swap(&mut self) -> ParamUpdate {
        if !self.pathfinding.can_swap() {
            debug!("swap requested with an uncommitted endpoint; ignored");
            return ParamUpdate::default();
        }
        self.pathfinding.swap();
        match self.pathfinding.committed_pair() {
            Some((source, destination)) => ParamUpdate::default()
                .set_primary(source.object_id.clone())
                .set_secondary(destination.object_id.clone()),
            None => ParamUpdate::default(),
        }
    }

    pub fn handle_cypher_edited(&mut self, text: impl Into<String>) {
        self.cypher.set_query(text);
    }

    /// Runs the Cypher query: publishes the text and search type to the
    /// shared params. Returns `None` for blank text.
    pub fn handle_cypher_run(&mut self) -> Option<ParamUpdate> {
        if !self.cypher.is_committed() {
            return None;
        }
        Some(
            ParamUpdate::default()
                .set_search_type(SearchMode::Cypher)
                .set_cypher(self.cypher.query()),
        )
    }
}
