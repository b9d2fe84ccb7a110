use crate::scan::domain::{Coordinate, DependencyGraph};
use crate::shared::Result;
use async_trait::async_trait;

/// DependencyGraphRepository port for resolving transitive dependency graphs
///
/// This port abstracts the dependency-graph service (e.g., deps.dev)
/// that returns an already resolved graph for one package release.
#[async_trait]
pub trait DependencyGraphRepository: Send + Sync {
    /// Fetches the resolved dependency graph of a root coordinate
    ///
    /// Nodes that fail a structural check are returned in
    /// `DependencyGraph::skipped` instead of failing the call.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or times out
    /// - The service answers with a non-success status code
    /// - The body is not JSON or has no `nodes` array
    async fn fetch_dependency_graph(&self, coordinate: &Coordinate) -> Result<DependencyGraph>;
}
