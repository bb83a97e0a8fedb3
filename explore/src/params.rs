use crate::tabs::SearchMode;
use std::borrow::Cow;
use url::Url;

pub const EXPLORE_SEARCH_TAB: &str = "exploreSearchTab";
pub const SEARCH_TYPE: &str = "searchType";
pub const PRIMARY_SEARCH: &str = "primarySearch";
pub const SECONDARY_SEARCH: &str = "secondarySearch";
pub const CYPHER_SEARCH: &str = "cypherSearch";

/// Structured view over the explore query parameters. Values are stored
/// decoded; encoding happens only at the URL boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExploreParams {
    pub explore_search_tab: Option<SearchMode>,
    pub search_type: Option<SearchMode>,
    pub primary_search: Option<String>,
    pub secondary_search: Option<String>,
    pub cypher_search: Option<String>,
}

impl ExploreParams {
    pub fn from_url(url: &Url) -> Self {
        Self::from_query_pairs(url.query_pairs())
    }

    pub fn from_query_pairs<'a>(
        pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
    ) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                EXPLORE_SEARCH_TAB => params.explore_search_tab = SearchMode::parse(&value),
                SEARCH_TYPE => params.search_type = SearchMode::parse(&value),
                PRIMARY_SEARCH => params.primary_search = Some(value.into_owned()),
                SECONDARY_SEARCH => params.secondary_search = Some(value.into_owned()),
                CYPHER_SEARCH => params.cypher_search = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }

    /// The tab to show on first render. Malformed or absent values
    /// resolve to node search rather than an error.
    pub fn resolved_tab(&self) -> SearchMode {
        self.explore_search_tab.unwrap_or_default()
    }

    /// Applies one atomic batch of edits.
    pub fn apply(&mut self, update: &ParamUpdate) {
        if let Some(tab) = &update.explore_search_tab {
            self.explore_search_tab = *tab;
        }
        if let Some(search_type) = &update.search_type {
            self.search_type = *search_type;
        }
        if let Some(primary) = &update.primary_search {
            self.primary_search = primary.clone();
        }
        if let Some(secondary) = &update.secondary_search {
            self.secondary_search = secondary.clone();
        }
        if let Some(cypher) = &update.cypher_search {
            self.cypher_search = cypher.clone();
        }
    }

    /// Serializes to a query string with a stable key order. Free-form
    /// values are percent-encoded; the tab and search type are fixed
    /// tokens that need no escaping.
    pub fn to_query(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(tab) = self.explore_search_tab {
            parts.push(format!("{EXPLORE_SEARCH_TAB}={tab}"));
        }
        if let Some(search_type) = self.search_type {
            parts.push(format!("{SEARCH_TYPE}={search_type}"));
        }
        if let Some(primary) = &self.primary_search {
            parts.push(format!("{PRIMARY_SEARCH}={}", urlencoding::encode(primary)));
        }
        if let Some(secondary) = &self.secondary_search {
            parts.push(format!(
                "{SECONDARY_SEARCH}={}",
                urlencoding::encode(secondary)
            ));
        }
        if let Some(cypher) = &self.cypher_search {
            parts.push(format!("{CYPHER_SEARCH}={}", urlencoding::encode(cypher)));
        }
        parts.join("&")
    }

    /// Rewrites the query component of `url` to match this state.
    pub fn write_to_url(&self, url: &mut Url) {
        let query = self.to_query();
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&query));
        }
    }
}

/// One atomic batch of query-parameter edits. Each field is either
/// untouched (`None`), cleared (`Some(None)`), or set (`Some(Some(v))`).
/// The teardown and setup halves of a tab switch merge into a single
/// update so no consumer observes an intermediate param state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamUpdate {
    pub explore_search_tab: Option<Option<SearchMode>>,
    pub search_type: Option<Option<SearchMode>>,
    pub primary_search: Option<Option<String>>,
    pub secondary_search: Option<Option<String>>,
    pub cypher_search: Option<Option<String>>,
}

impl ParamUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn set_tab(mut self, tab: SearchMode) -> Self {
        self.explore_search_tab = Some(Some(tab));
        self
    }

    pub fn set_search_type(mut self, search_type: SearchMode) -> Self {
        self.search_type = Some(Some(search_type));
        self
    }

    pub fn set_primary(mut self, object_id: impl Into<String>) -> Self {
        self.primary_search = Some(Some(object_id.into()));
        self
    }

    pub fn clear_primary(mut self) -> Self {
        self.primary_search = Some(None);
        self
    }

    pub fn set_secondary(mut self, object_id: impl Into<String>) -> Self {
        self.secondary_search = Some(Some(object_id.into()));
        self
    }

    pub fn clear_secondary(mut self) -> Self {
        self.secondary_search = Some(None);
        self
    }

    pub fn set_cypher(mut self, query: impl Into<String>) -> Self {
        self.cypher_search = Some(Some(query.into()));
        self
    }

    pub fn clear_cypher(mut self) -> Self {
        self.cypher_search = Some(None);
        self
    }

    /// Merges two updates into one batch; where both touch a key, the
    /// `later` edit wins.
    pub fn merge(self, later: Self) -> Self {
        Self {
            explore_search_tab: later.explore_search_tab.or(self.explore_search_tab),
            search_type: later.search_type.or(self.search_type),
            primary_search: later.primary_search.or(self.primary_search),
            secondary_search: later.secondary_search.or(self.secondary_search),
            cypher_search: later.cypher_search.or(self.cypher_search),
        }
    }
}
