/// The magic phrase that unlocks the decorative banner. Display-only:
/// query execution is identical with or without it.
pub const EASTER_EGG_QUERY: &str = "match (n) return n limit 5";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CypherSearchState {
    query: String,
}

impl CypherSearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// A Cypher search is committed once there is non-blank text.
    pub fn is_committed(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn shows_easter_egg(&self) -> bool {
        self.query.to_lowercase().contains(EASTER_EGG_QUERY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_not_committed() {
        let mut state = CypherSearchState::default();
        assert!(!state.is_committed());
        state.set_query("   \n");
        assert!(!state.is_committed());
        state.set_query("MATCH (u:User) RETURN u");
        assert!(state.is_committed());
    }

    #[test]
    fn easter_egg_matches_case_insensitively_as_a_substring() {
        let mut state = CypherSearchState::default();
        state.set_query("MATCH (n) RETURN n LIMIT 5");
        assert!(state.shows_easter_egg());
        state.set_query("explain match (n) return n limit 5;");
        assert!(state.shows_easter_egg());
        state.set_query("match (u:User) return u");
        assert!(!state.shows_easter_egg());
    }
}
