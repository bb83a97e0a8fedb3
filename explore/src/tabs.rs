use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// One of the three explore search modes. The same value set backs both
/// the `exploreSearchTab` param (which tab is showing) and the
/// `searchType` param (which query should currently be executed).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Node,
    Pathfinding,
    Cypher,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Node => "node",
            SearchMode::Pathfinding => "pathfinding",
            SearchMode::Cypher => "cypher",
        }
    }

    /// Strict parse; `None` for anything outside the supported set.
    /// Fallback to the node default happens at the params layer.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "node" => Some(SearchMode::Node),
            "pathfinding" => Some(SearchMode::Pathfinding),
            "cypher" => Some(SearchMode::Cypher),
            _ => None,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_accepts_the_three_supported_tabs() {
        assert_eq!(SearchMode::parse("node"), Some(SearchMode::Node));
        assert_eq!(
            SearchMode::parse("pathfinding"),
            Some(SearchMode::Pathfinding)
        );
        assert_eq!(SearchMode::parse("cypher"), Some(SearchMode::Cypher));
        assert_eq!(SearchMode::parse("composition"), None);
    }

    #[test]
    fn serializes_lowercase() {
        let value = serde_json::to_value(SearchMode::Pathfinding).unwrap();
        assert_eq!(value, serde_json::json!("pathfinding"));
    }
}
