//! Explore-search coordination for the Pathlens graph explorer.
//!
//! Three mutually exclusive search modes (node, pathfinding, Cypher) are
//! multiplexed onto one set of URL query parameters so browser navigation
//! and share-links always reflect the active search. This crate owns the
//! state machine behind that: per-mode input state, the tab-switch
//! coordinator, the query-parameter adapter, search-dispatch planning,
//! and the pathfinding edge-filter tree. Rendering and network I/O live
//! elsewhere.

mod combobox;
mod coordinator;
mod cypher;
mod dispatch;
mod edge_filter;
mod edge_types;
mod items;
mod params;
mod pathfinding;
mod tabs;

pub use combobox::ComboboxState;
pub use coordinator::ExploreSearch;
pub use cypher::CypherSearchState;
pub use cypher::EASTER_EGG_QUERY;
pub use dispatch::RequestSlot;
pub use dispatch::RequestToken;
pub use dispatch::SearchDirective;
pub use edge_filter::EdgeFilterDialog;
pub use edge_filter::EdgeFilterSet;
pub use edge_filter::GroupState;
pub use edge_types::ALL_EDGE_TYPES;
pub use edge_types::Category;
pub use edge_types::Subcategory;
pub use items::EdgeItem;
pub use items::GraphItem;
pub use items::NodeItem;
pub use items::SearchValue;
pub use params::CYPHER_SEARCH;
pub use params::EXPLORE_SEARCH_TAB;
pub use params::ExploreParams;
pub use params::PRIMARY_SEARCH;
pub use params::ParamUpdate;
pub use params::SEARCH_TYPE;
pub use params::SECONDARY_SEARCH;
pub use pathfinding::PathfindingSearchState;
pub use tabs::SearchMode;
