use crate::coordinator::ExploreSearch;
use crate::edge_filter::EdgeFilterSet;
use crate::tabs::SearchMode;

/// What the active tab's committed state asks the backend for. Planned
/// synchronously; executing it is the caller's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchDirective {
    /// Exact-match lookup of a single committed entity.
    NodeLookup { object_id: String },
    /// Shortest path between two committed endpoints, restricted to the
    /// selected edge types.
    Pathfinding {
        start: String,
        end: String,
        edge_types: Vec<&'static str>,
    },
    /// Raw Cypher, dispatched verbatim.
    Cypher { query: String },
}

impl ExploreSearch {
    /// Plans the query the current state justifies. Uncommitted modes
    /// plan nothing; a pathfinding tab with one committed endpoint
    /// degrades to a node lookup of that endpoint.
    pub fn plan_search(&self, filters: &EdgeFilterSet) -> Option<SearchDirective> {
        match self.active_tab() {
            SearchMode::Node => {
                let item = self.node.committed()?;
                Some(SearchDirective::NodeLookup {
                    object_id: item.object_id.clone(),
                })
            }
            SearchMode::Pathfinding => {
                if let Some((source, destination)) = self.pathfinding.committed_pair() {
                    return Some(SearchDirective::Pathfinding {
                        start: source.object_id.clone(),
                        end: destination.object_id.clone(),
                        edge_types: filters.selected_edge_types(),
                    });
                }
                let lone = self
                    .pathfinding
                    .source
                    .committed()
                    .or(self.pathfinding.destination.committed())?;
                Some(SearchDirective::NodeLookup {
                    object_id: lone.object_id.clone(),
                })
            }
            SearchMode::Cypher => {
                if !self.cypher.is_committed() {
                    return None;
                }
                Some(SearchDirective::Cypher {
                    query: self.cypher.query().to_string(),
                })
            }
        }
    }
}

/// Generation counter guarding one logical request slot (for example
/// "lookahead suggestions for the start node") against superseded
/// responses. Issue a token per request; when the response lands, only
/// apply it if the slot still accepts the token.
#[derive(Debug, Default)]
pub struct RequestSlot {
    issued: u64,
}

/// Proof of which generation a request belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestSlot {
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Whether a response carrying `token` is still current.
    pub fn accepts(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }

    /// Drops every outstanding request without issuing a new one, e.g.
    /// on tab switch.
    pub fn invalidate(&mut self) {
        self.issued += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::SearchValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn uncommitted_state_plans_nothing() {
        let mut search = ExploreSearch::new();
        search.handle_node_edited("adm");
        assert_eq!(search.plan_search(&EdgeFilterSet::all_checked()), None);
    }

    #[test]
    fn pathfinding_with_one_endpoint_degrades_to_a_lookup() {
        let mut search = ExploreSearch::new();
        search.handle_tab_change(SearchMode::Pathfinding);
        search.handle_destination_selected(SearchValue::new("2", "computer", "Computer"));
        assert_eq!(
            search.plan_search(&EdgeFilterSet::all_checked()),
            Some(SearchDirective::NodeLookup {
                object_id: "2".to_string()
            })
        );
    }

    #[test]
    fn pathfinding_directive_carries_the_edge_selection() {
        let mut search = ExploreSearch::new();
        search.handle_tab_change(SearchMode::Pathfinding);
        search.handle_source_selected(SearchValue::new("1", "admin", "User"));
        search.handle_destination_selected(SearchValue::new("2", "computer", "Computer"));

        let mut filters = EdgeFilterSet::all_checked();
        let total = filters.selected_edge_types().len();
        filters.set_edge_type("MemberOf", false);

        match search.plan_search(&filters) {
            Some(SearchDirective::Pathfinding {
                start,
                end,
                edge_types,
            }) => {
                assert_eq!(start, "1");
                assert_eq!(end, "2");
                assert_eq!(edge_types.len(), total - 1);
                assert!(!edge_types.contains(&"MemberOf"));
            }
            other => panic!("expected pathfinding directive, got {other:?}"),
        }
    }

    #[test]
    fn stale_tokens_are_rejected() {
        let mut slot = RequestSlot::default();
        let first = slot.issue();
        let second = slot.issue();
        assert!(!slot.accepts(first));
        assert!(slot.accepts(second));
        slot.invalidate();
        assert!(!slot.accepts(second));
    }
}
