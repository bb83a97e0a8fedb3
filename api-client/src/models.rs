use pathlens_explore::EdgeItem;
use pathlens_explore::GraphItem;
use pathlens_explore::NodeItem;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Every successful reply wraps its payload in a `data` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// Error replies carry a list of messages; the first one is what the UI
/// surfaces.
#[derive(Debug, Deserialize)]
pub(crate) struct ServerErrors {
    pub errors: Vec<ServerError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServerError {
    pub message: String,
}

/// Wire shape of graph query replies: nodes keyed by their internal
/// graph id, plus the edges connecting those ids.
#[derive(Debug, Deserialize)]
pub struct GraphResponse {
    #[serde(default)]
    pub nodes: BTreeMap<String, GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

#[derive(Debug, Deserialize)]
pub struct GraphNode {
    pub label: String,
    pub kind: String,
    #[serde(rename = "objectId")]
    pub object_id: String,
    #[serde(default, rename = "isTierZero")]
    pub is_tier_zero: bool,
}

#[derive(Debug, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub kind: String,
    #[serde(default, rename = "lastSeen")]
    pub last_seen: Option<String>,
}

impl GraphResponse {
    /// Flattens the wire shape into renderable items, nodes first so
    /// edges always refer to ids the consumer has already seen.
    pub fn into_items(self) -> Vec<GraphItem> {
        let mut items = Vec::with_capacity(self.nodes.len() + self.edges.len());
        for node in self.nodes.into_values() {
            items.push(GraphItem::Node(NodeItem {
                object_id: node.object_id,
                label: node.label,
                kind: node.kind,
                is_tier_zero: node.is_tier_zero,
            }));
        }
        for edge in self.edges {
            items.push(GraphItem::Edge(EdgeItem {
                source: edge.source,
                target: edge.target,
                kind: edge.kind,
                last_seen: edge.last_seen,
            }));
        }
        items
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SavedQuery {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub query: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateSavedQueryRequest<'a> {
    pub name: &'a str,
    pub query: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CypherRequest<'a> {
    pub query: &'a str,
    pub include_properties: bool,
}

/// Server-side feature flag, e.g. whether Cypher mutations are allowed.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FeatureFlag {
    pub id: i64,
    pub key: String,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn graph_response_flattens_nodes_before_edges() {
        let response: GraphResponse = serde_json::from_value(json!({
            "nodes": {
                "7": {
                    "label": "ADMIN@CORP.LOCAL",
                    "kind": "User",
                    "objectId": "S-1-5-21-1",
                    "isTierZero": true,
                },
                "9": {
                    "label": "DC01.CORP.LOCAL",
                    "kind": "Computer",
                    "objectId": "S-1-5-21-2",
                },
            },
            "edges": [
                { "source": "7", "target": "9", "kind": "AdminTo" },
            ],
        }))
        .unwrap();

        let items = response.into_items();
        assert_eq!(items.len(), 3);
        match &items[0] {
            GraphItem::Node(node) => {
                assert_eq!(node.object_id, "S-1-5-21-1");
                assert!(node.is_tier_zero);
            }
            other => panic!("expected node, got {other:?}"),
        }
        match &items[2] {
            GraphItem::Edge(edge) => assert_eq!(edge.kind, "AdminTo"),
            other => panic!("expected edge, got {other:?}"),
        }
    }
}
