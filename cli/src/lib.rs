//! Terminal front end for the explore search. The same node,
//! pathfinding, and Cypher modes the web UI exposes, driven through the
//! shared coordinator so the CLI plans exactly the query the UI would.

mod config;

pub use config::Config;

use anyhow::Context;
use anyhow::Result;
use anyhow::anyhow;
use clap::ArgAction;
use clap::Parser;
use clap::Subcommand;
use pathlens_api_client::ApiClient;
use pathlens_explore::EdgeFilterSet;
use pathlens_explore::ExploreParams;
use pathlens_explore::ExploreSearch;
use pathlens_explore::SearchDirective;
use pathlens_explore::SearchMode;
use pathlens_explore::SearchValue;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "pathlens", about = "Explore attack paths from the terminal")]
pub struct Cli {
    /// API base URL, e.g. https://bh.corp.local.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token for the API.
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search for a single entity by name or object id.
    Node(NodeCommand),
    /// Shortest path between two entities.
    Path(PathCommand),
    /// Run a raw Cypher query.
    Cypher(CypherCommand),
    /// Inspect a shared explore URL.
    Url(UrlCommand),
    /// Manage saved Cypher queries.
    Queries(QueriesCommand),
}

#[derive(Debug, Parser)]
pub struct NodeCommand {
    /// Search term; free text unless --first is set.
    pub term: String,

    /// Commit the top suggestion and fetch that entity.
    #[arg(long)]
    pub first: bool,
}

#[derive(Debug, Parser)]
pub struct PathCommand {
    /// Start node search term.
    pub start: String,

    /// Destination node search term.
    pub end: String,

    /// Exclude an edge type from traversal (repeatable).
    #[arg(long = "exclude-edge", value_name = "EDGE", action = ArgAction::Append)]
    pub exclude_edges: Vec<String>,
}

#[derive(Debug, Parser)]
pub struct CypherCommand {
    /// The Cypher query text.
    pub query: String,

    /// Also store the query under this name for later reuse.
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,
}

#[derive(Debug, Parser)]
pub struct UrlCommand {
    /// A full explore URL or a bare query string.
    pub url: String,

    /// Only print the decoded parameters; do not hit the API.
    #[arg(long)]
    pub parse_only: bool,
}

#[derive(Debug, Parser)]
pub struct QueriesCommand {
    #[command(subcommand)]
    pub action: QueriesAction,
}

#[derive(Debug, Subcommand)]
pub enum QueriesAction {
    /// List saved queries.
    List,
    /// Delete a saved query by id.
    Delete { id: i64 },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;
        match self.command {
            Command::Url(cmd) if cmd.parse_only => cmd.report(),
            command => {
                let base_url = config.base_url(self.base_url.as_deref())?;
                let token = config.token(self.token.as_deref());
                let client = ApiClient::new(&base_url, token)?;
                match command {
                    Command::Node(cmd) => cmd.run(&client).await,
                    Command::Path(cmd) => cmd.run(&client).await,
                    Command::Cypher(cmd) => cmd.run(&client).await,
                    Command::Url(cmd) => cmd.run(&client).await,
                    Command::Queries(cmd) => cmd.run(&client).await,
                }
            }
        }
    }
}

impl NodeCommand {
    pub async fn run(self, client: &ApiClient) -> Result<()> {
        if !self.first {
            let suggestions = client.search(&self.term).await?;
            if suggestions.is_empty() {
                println!("no matches for {:?}", self.term);
                return Ok(());
            }
            for suggestion in suggestions {
                println!("{}  {suggestion}", suggestion.object_id);
            }
            return Ok(());
        }

        let mut search = ExploreSearch::new();
        search.handle_node_edited(&self.term);
        search.handle_node_selected(resolve(client, &self.term).await?);
        let directive = search
            .plan_search(&EdgeFilterSet::all_checked())
            .ok_or_else(|| anyhow!("node selection did not commit"))?;
        execute(client, directive).await
    }
}

impl PathCommand {
    pub async fn run(self, client: &ApiClient) -> Result<()> {
        let mut search = ExploreSearch::new();
        search.handle_tab_change(SearchMode::Pathfinding);
        search.handle_source_selected(resolve(client, &self.start).await?);
        search.handle_destination_selected(resolve(client, &self.end).await?);

        let mut filters = EdgeFilterSet::all_checked();
        for edge in &self.exclude_edges {
            if filters.edge_type_checked(edge).is_none() {
                tracing::warn!(edge, "unknown edge type; ignoring");
                continue;
            }
            filters.set_edge_type(edge, false);
        }

        let directive = search
            .plan_search(&filters)
            .ok_or_else(|| anyhow!("pathfinding endpoints did not commit"))?;
        execute(client, directive).await
    }
}

impl CypherCommand {
    pub async fn run(self, client: &ApiClient) -> Result<()> {
        let mut search = ExploreSearch::new();
        search.handle_cypher_edited(&self.query);
        let mut params = ExploreParams::default();
        params.apply(&search.handle_tab_change(SearchMode::Cypher));
        if search.cypher.shows_easter_egg() {
            println!("🥚 a wild easter egg appears");
        }

        let run = search
            .handle_cypher_run()
            .ok_or_else(|| anyhow!("cypher query is empty"))?;
        params.apply(&run);

        let directive = search
            .plan_search(&EdgeFilterSet::all_checked())
            .ok_or_else(|| anyhow!("cypher query is empty"))?;
        execute(client, directive).await?;
        println!("share: ?{}", params.to_query());

        if let Some(name) = self.save {
            let saved = client
                .create_saved_query(&name, &self.query)
                .await
                .context("query ran but saving it failed")?;
            println!("saved as #{}: {}", saved.id, saved.name);
        }
        Ok(())
    }
}

impl UrlCommand {
    /// Prints the decoded parameters without touching the API.
    pub fn report(self) -> Result<()> {
        let params = parse_explore_url(&self.url)?;
        print_params(&params);
        Ok(())
    }

    /// Rehydrates the link the way the UI would on mount: decode the
    /// params, resolve committed ids back to entities, then execute
    /// whatever the search type encodes.
    pub async fn run(self, client: &ApiClient) -> Result<()> {
        let params = parse_explore_url(&self.url)?;
        print_params(&params);

        let mut search = ExploreSearch::from_params(&params);
        if let Some(primary) = &params.primary_search {
            search.hydrate_primary(client.node_by_object_id(primary).await?);
        }
        if let Some(secondary) = &params.secondary_search {
            search.hydrate_secondary(client.node_by_object_id(secondary).await?);
        }
        match search.plan_search(&EdgeFilterSet::all_checked()) {
            Some(directive) => execute(client, directive).await,
            None => {
                println!("link encodes no committed search");
                Ok(())
            }
        }
    }
}

fn print_params(params: &ExploreParams) {
    println!("tab: {}", params.resolved_tab());
    if let Some(search_type) = params.search_type {
        println!("searchType: {search_type}");
    }
    if let Some(primary) = &params.primary_search {
        println!("primarySearch: {primary}");
    }
    if let Some(secondary) = &params.secondary_search {
        println!("secondarySearch: {secondary}");
    }
    if let Some(cypher) = &params.cypher_search {
        println!("cypherSearch: {cypher}");
    }
    let canonical = params.to_query();
    if !canonical.is_empty() {
        println!("canonical: {canonical}");
    }
}

impl QueriesCommand {
    pub async fn run(self, client: &ApiClient) -> Result<()> {
        match self.action {
            QueriesAction::List => {
                for query in client.list_saved_queries().await? {
                    println!("#{}  {}: {}", query.id, query.name, query.query);
                }
                Ok(())
            }
            QueriesAction::Delete { id } => {
                client.delete_saved_query(id).await?;
                println!("deleted #{id}");
                Ok(())
            }
        }
    }
}

/// Accepts either a full URL or the bare query-string form people paste
/// from the address bar.
fn parse_explore_url(input: &str) -> Result<ExploreParams> {
    if let Ok(parsed) = Url::parse(input) {
        return Ok(ExploreParams::from_url(&parsed));
    }
    let query = input.trim_start_matches('?');
    let wrapped = Url::parse(&format!("https://pathlens.invalid/ui/explore?{query}"))
        .with_context(|| format!("not a URL or query string: {input:?}"))?;
    Ok(ExploreParams::from_url(&wrapped))
}

/// Top lookahead match for a term, in the same order the UI would show.
async fn resolve(client: &ApiClient, term: &str) -> Result<SearchValue> {
    let mut matches = client
        .search(term)
        .await
        .with_context(|| format!("lookahead for {term:?} failed"))?;
    if matches.is_empty() {
        return Err(anyhow!("no entity matched {term:?}"));
    }
    Ok(matches.remove(0))
}

async fn execute(client: &ApiClient, directive: SearchDirective) -> Result<()> {
    match directive {
        SearchDirective::NodeLookup { object_id } => {
            let node = client.node_by_object_id(&object_id).await?;
            println!("{}  {node}", node.object_id);
        }
        SearchDirective::Pathfinding {
            start,
            end,
            edge_types,
        } => {
            let items = client.shortest_path(&start, &end, &edge_types).await?;
            if items.is_empty() {
                println!("no path found");
            }
            for item in items {
                println!("{item}");
            }
        }
        SearchDirective::Cypher { query } => {
            for item in client.cypher(&query).await? {
                println!("{item}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_accepts_full_urls_and_bare_query_strings() {
        let full = parse_explore_url(
            "https://bh.corp.local/ui/explore?exploreSearchTab=pathfinding&primarySearch=1",
        )
        .unwrap();
        assert_eq!(full.resolved_tab(), SearchMode::Pathfinding);
        assert_eq!(full.primary_search.as_deref(), Some("1"));

        let bare = parse_explore_url("?exploreSearchTab=cypher&cypherSearch=MATCH%20(n)%20RETURN%20n").unwrap();
        assert_eq!(bare.resolved_tab(), SearchMode::Cypher);
        assert_eq!(bare.cypher_search.as_deref(), Some("MATCH (n) RETURN n"));
    }

    #[test]
    fn malformed_tab_in_a_shared_link_falls_back_to_node() {
        let params = parse_explore_url("exploreSearchTab=bogus").unwrap();
        assert_eq!(params.resolved_tab(), SearchMode::Node);
    }
}
