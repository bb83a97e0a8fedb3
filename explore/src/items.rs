use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// A concrete graph entity committed from lookahead results. Identity is
/// owned by the backend; this layer treats `object_id` as opaque.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchValue {
    #[serde(rename = "objectid")]
    pub object_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl SearchValue {
    pub fn new(
        object_id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            object_id: object_id.into(),
            name: name.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for SearchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// A rendered graph element. An explicit discriminant replaces the
/// field-presence sniffing the renderer events used to rely on, so every
/// consumer match is exhaustive.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum GraphItem {
    Node(NodeItem),
    Edge(EdgeItem),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NodeItem {
    #[serde(rename = "objectId")]
    pub object_id: String,
    pub label: String,
    pub kind: String,
    #[serde(default)]
    pub is_tier_zero: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EdgeItem {
    pub source: String,
    pub target: String,
    pub kind: String,
    #[serde(default)]
    pub last_seen: Option<String>,
}

impl GraphItem {
    pub fn kind(&self) -> &str {
        match self {
            GraphItem::Node(node) => &node.kind,
            GraphItem::Edge(edge) => &edge.kind,
        }
    }
}

impl fmt::Display for GraphItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphItem::Node(node) => write!(f, "{} [{}]", node.label, node.kind),
            GraphItem::Edge(edge) => {
                write!(f, "{} -[{}]-> {}", edge.source, edge.kind, edge.target)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn search_value_round_trips_wire_field_names() {
        let value: SearchValue = serde_json::from_value(json!({
            "objectid": "S-1-5-21-1",
            "name": "ADMIN@CORP.LOCAL",
            "type": "User",
        }))
        .unwrap();
        assert_eq!(value.object_id, "S-1-5-21-1");
        assert_eq!(value.kind, "User");
        let back = serde_json::to_value(&value).unwrap();
        assert_eq!(back["objectid"], json!("S-1-5-21-1"));
        assert_eq!(back["type"], json!("User"));
    }

    #[test]
    fn graph_item_carries_an_explicit_discriminant() {
        let item = GraphItem::Edge(EdgeItem {
            source: "1".to_string(),
            target: "2".to_string(),
            kind: "AdminTo".to_string(),
            last_seen: None,
        });
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["item"], json!("edge"));
    }
}
