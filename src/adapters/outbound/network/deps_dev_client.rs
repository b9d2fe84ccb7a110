use super::http::{build_client, get_with_retry};
use crate::ports::outbound::{AdvisoryDetailRepository, AdvisoryRepository, DependencyGraphRepository};
use crate::scan::domain::{
    AdvisoryDetail, AdvisoryKey, Coordinate, DependencyGraph, GraphNode, SkippedNode,
};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default deps.dev API base
pub const DEFAULT_DEPS_DEV_BASE_URL: &str = "https://api.deps.dev/v3alpha";

/// Default deps.dev advisory endpoint
pub const DEFAULT_ADVISORY_BASE_URL: &str = "https://api.deps.dev/v3alpha/advisories";

const DEFAULT_MAX_RETRIES: u32 = 2;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphNodeDto {
    version_key: VersionKeyDto,
}

#[derive(Debug, Deserialize)]
struct VersionKeyDto {
    name: String,
    version: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdvisoryDetailDto {
    #[serde(default)]
    aliases: Option<Vec<String>>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    cvss3_score: Option<f64>,
    #[serde(default)]
    cvss3_vector: Option<String>,
}

/// DepsDevClient adapter for the deps.dev Maven endpoints
///
/// Implements the three deps.dev-backed ports:
/// - `DependencyGraphRepository` via `.../versions/{version}:dependencies`
/// - `AdvisoryRepository` via `.../versions/{version}` (`advisoryKeys`)
/// - `AdvisoryDetailRepository` via `{advisory_base}/{id}`
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct DepsDevClient {
    client: reqwest::Client,
    base_url: String,
    advisory_base_url: String,
    max_retries: u32,
}

impl DepsDevClient {
    /// Creates a new client against the public deps.dev API
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: DEFAULT_DEPS_DEV_BASE_URL.to_string(),
            advisory_base_url: DEFAULT_ADVISORY_BASE_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Overrides the graph and version metadata base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the advisory detail base URL
    pub fn with_advisory_base_url(mut self, url: impl Into<String>) -> Self {
        self.advisory_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn maven_url(&self, path: &str) -> String {
        format!("{}/systems/maven/{}", self.base_url, path)
    }

    fn version_url(&self, name: &str, version: &str) -> String {
        self.maven_url(&format!(
            "packages/{}/versions/{}",
            urlencoding::encode(name),
            urlencoding::encode(version)
        ))
    }

    fn advisory_url(&self, advisory_id: &str) -> String {
        format!(
            "{}/{}",
            self.advisory_base_url,
            urlencoding::encode(advisory_id)
        )
    }

    /// GETs a URL and returns its body, failing on any non-success status
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = get_with_retry(&self.client, url, self.max_retries).await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("deps.dev returned status code {} for {}", status, url);
        }
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;
        Ok(body)
    }
}

/// Parses a `:dependencies` response body
///
/// A body that is not JSON or has no `nodes` array fails as a whole. Nodes
/// without a usable `versionKey` are returned as skipped.
pub(crate) fn parse_dependency_graph(body: &str) -> Result<DependencyGraph> {
    let value: Value =
        serde_json::from_str(body).context("Dependency graph response is not valid JSON")?;
    let nodes = value
        .get("nodes")
        .and_then(Value::as_array)
        .context("Dependency graph response has no 'nodes' array")?;

    let mut parsed = Vec::with_capacity(nodes.len());
    let mut skipped = Vec::new();

    for (index, node) in nodes.iter().enumerate() {
        match parse_graph_node(node) {
            Ok(node) => parsed.push(node),
            Err(reason) => skipped.push(SkippedNode { index, reason }),
        }
    }

    Ok(DependencyGraph::new(parsed, skipped))
}

fn parse_graph_node(node: &Value) -> std::result::Result<GraphNode, String> {
    let dto: GraphNodeDto = GraphNodeDto::deserialize(node).map_err(|e| e.to_string())?;
    let name = dto.version_key.name.trim();
    let version = dto.version_key.version.trim();
    if name.is_empty() {
        return Err("empty versionKey.name".to_string());
    }
    if version.is_empty() {
        return Err("empty versionKey.version".to_string());
    }
    Ok(GraphNode::new(name, version))
}

/// Extracts `advisoryKeys` from a version metadata response
///
/// An absent or `null` field means no advisories. Entries without a string
/// `id` are kept as malformed keys.
pub(crate) fn parse_advisory_keys(value: &Value) -> Result<Vec<AdvisoryKey>> {
    let entries = match value.get("advisoryKeys") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(other) => anyhow::bail!("'advisoryKeys' is not an array: {}", other),
    };

    Ok(entries
        .iter()
        .map(|entry| match entry.get("id").and_then(Value::as_str) {
            Some(id) => AdvisoryKey::structured(id),
            None => AdvisoryKey::malformed(entry.to_string()),
        })
        .collect())
}

/// Parses an advisory detail response
pub(crate) fn parse_advisory_detail(body: &str) -> Result<AdvisoryDetail> {
    let dto: AdvisoryDetailDto =
        serde_json::from_str(body).context("Advisory detail response could not be parsed")?;
    Ok(AdvisoryDetail {
        aliases: dto.aliases.unwrap_or_default(),
        title: dto.title,
        cvss3_score: dto.cvss3_score,
        cvss3_vector: dto.cvss3_vector,
    })
}

#[async_trait]
impl DependencyGraphRepository for DepsDevClient {
    async fn fetch_dependency_graph(&self, coordinate: &Coordinate) -> Result<DependencyGraph> {
        let url = self.maven_url(&coordinate.dependencies_path());
        let body = self.get_text(&url).await?;
        let graph = parse_dependency_graph(&body)?;
        debug!(
            coordinate = %coordinate,
            nodes = graph.nodes().len(),
            skipped = graph.skipped().len(),
            "dependency graph fetched"
        );
        Ok(graph)
    }
}

#[async_trait]
impl AdvisoryRepository for DepsDevClient {
    async fn fetch_advisory_keys(&self, name: &str, version: &str) -> Result<Vec<AdvisoryKey>> {
        let url = self.version_url(name, version);
        let body = self.get_text(&url).await?;
        let value: Value = serde_json::from_str(&body)
            .with_context(|| format!("Version metadata for {}@{} is not valid JSON", name, version))?;
        parse_advisory_keys(&value)
    }
}

#[async_trait]
impl AdvisoryDetailRepository for DepsDevClient {
    async fn fetch_advisory_detail(&self, advisory_id: &str) -> Result<AdvisoryDetail> {
        let url = self.advisory_url(advisory_id);
        let body = self.get_text(&url).await?;
        parse_advisory_detail(&body)
    }
}
