//! Typed HTTP client for the graph API backing the explore search UI:
//! entity lookahead, shortest-path and Cypher queries, saved queries,
//! and feature flags.

mod error;
mod models;

pub use error::ApiError;
pub use models::FeatureFlag;
pub use models::GraphEdge;
pub use models::GraphNode;
pub use models::GraphResponse;
pub use models::SavedQuery;

use models::CreateSavedQueryRequest;
use models::CypherRequest;
use models::DataEnvelope;
use models::ServerErrors;
use pathlens_explore::GraphItem;
use pathlens_explore::SearchValue;
use reqwest::RequestBuilder;
use reqwest::Response;
use std::time::Duration;
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Builds a client against `base_url`, e.g. `https://bh.corp.local`.
    /// `token` is sent as a bearer token when present.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ApiError> {
        // Parse up front so a typo fails at construction, not mid-query.
        Url::parse(base_url).map_err(|source| ApiError::BaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        let http = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lookahead suggestions for a partially typed entity name.
    pub async fn search(&self, term: &str) -> Result<Vec<SearchValue>, ApiError> {
        let url = format!("{}/api/v2/search", self.base_url);
        let resp = self
            .authorize(self.http.get(url).query(&[("q", term)]))
            .send()
            .await?;
        let resp = check(resp).await?;
        let envelope: DataEnvelope<Vec<SearchValue>> = resp.json().await?;
        Ok(envelope.data)
    }

    /// Exact-match lookup of a single committed entity.
    pub async fn node_by_object_id(&self, object_id: &str) -> Result<SearchValue, ApiError> {
        let url = format!("{}/api/v2/search", self.base_url);
        let resp = self
            .authorize(
                self.http
                    .get(url)
                    .query(&[("q", object_id), ("type", "exact")]),
            )
            .send()
            .await?;
        let resp = check(resp).await?;
        let envelope: DataEnvelope<Vec<SearchValue>> = resp.json().await?;
        envelope
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound {
                object_id: object_id.to_string(),
            })
    }

    /// Shortest path between two object ids, traversing only the given
    /// relationship kinds.
    pub async fn shortest_path(
        &self,
        start: &str,
        end: &str,
        edge_types: &[&str],
    ) -> Result<Vec<GraphItem>, ApiError> {
        tracing::debug!(start, end, kinds = edge_types.len(), "shortest-path query");
        let url = format!("{}/api/v2/graphs/shortest-path", self.base_url);
        let kinds = format!("in:{}", edge_types.join(","));
        let resp = self
            .authorize(self.http.get(url).query(&[
                ("start_node", start),
                ("end_node", end),
                ("relationship_kinds", kinds.as_str()),
            ]))
            .send()
            .await?;
        let resp = check(resp).await?;
        let envelope: DataEnvelope<GraphResponse> = resp.json().await?;
        Ok(envelope.data.into_items())
    }

    /// Runs a raw Cypher query and returns the resulting subgraph.
    pub async fn cypher(&self, query: &str) -> Result<Vec<GraphItem>, ApiError> {
        tracing::debug!(len = query.len(), "cypher query");
        let url = format!("{}/api/v2/graphs/cypher", self.base_url);
        let resp = self
            .authorize(self.http.post(url).json(&CypherRequest {
                query,
                include_properties: false,
            }))
            .send()
            .await?;
        let resp = check(resp).await?;
        let envelope: DataEnvelope<GraphResponse> = resp.json().await?;
        Ok(envelope.data.into_items())
    }

    pub async fn list_saved_queries(&self) -> Result<Vec<SavedQuery>, ApiError> {
        let url = format!("{}/api/v2/saved-queries", self.base_url);
        let resp = self.authorize(self.http.get(url)).send().await?;
        let resp = check(resp).await?;
        let envelope: DataEnvelope<Vec<SavedQuery>> = resp.json().await?;
        Ok(envelope.data)
    }

    pub async fn create_saved_query(
        &self,
        name: &str,
        query: &str,
    ) -> Result<SavedQuery, ApiError> {
        let url = format!("{}/api/v2/saved-queries", self.base_url);
        let resp = self
            .authorize(
                self.http
                    .post(url)
                    .json(&CreateSavedQueryRequest { name, query }),
            )
            .send()
            .await?;
        let resp = check(resp).await?;
        let envelope: DataEnvelope<SavedQuery> = resp.json().await?;
        Ok(envelope.data)
    }

    pub async fn delete_saved_query(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/api/v2/saved-queries/{id}", self.base_url);
        let resp = self.authorize(self.http.delete(url)).send().await?;
        check(resp).await?;
        Ok(())
    }

    /// The relationship kinds the backend currently knows about.
    pub async fn kinds(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/api/v2/graphs/kinds", self.base_url);
        let resp = self.authorize(self.http.get(url)).send().await?;
        let resp = check(resp).await?;
        let envelope: DataEnvelope<Vec<String>> = resp.json().await?;
        Ok(envelope.data)
    }

    pub async fn feature_flags(&self) -> Result<Vec<FeatureFlag>, ApiError> {
        let url = format!("{}/api/v2/features", self.base_url);
        let resp = self.authorize(self.http.get(url)).send().await?;
        let resp = check(resp).await?;
        let envelope: DataEnvelope<Vec<FeatureFlag>> = resp.json().await?;
        Ok(envelope.data)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Maps a non-2xx reply to [`ApiError::Status`], preferring the server's
/// own error message over the raw body.
async fn check(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ServerErrors>(&body)
        .ok()
        .and_then(|reply| reply.errors.into_iter().next())
        .map(|error| error.message)
        .unwrap_or(body);
    Err(ApiError::Status { status, message })
}
