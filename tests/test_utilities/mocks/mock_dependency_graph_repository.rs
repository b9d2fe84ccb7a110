use async_trait::async_trait;
use mvn_vuln_report::prelude::*;
use mvn_vuln_report::scan::domain::{DependencyGraph, GraphNode};
use std::collections::HashMap;

/// Mock DependencyGraphRepository keyed by `group:artifact@version`
#[derive(Default)]
pub struct MockDependencyGraphRepository {
    graphs: HashMap<String, DependencyGraph>,
}

impl MockDependencyGraphRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(mut self, root: &str, nodes: &[(&str, &str)]) -> Self {
        let nodes = nodes
            .iter()
            .map(|(name, version)| GraphNode::new(*name, *version))
            .collect();
        self.graphs
            .insert(root.to_string(), DependencyGraph::new(nodes, Vec::new()));
        self
    }
}

#[async_trait]
impl DependencyGraphRepository for MockDependencyGraphRepository {
    async fn fetch_dependency_graph(&self, coordinate: &Coordinate) -> Result<DependencyGraph> {
        match self.graphs.get(&coordinate.to_string()) {
            Some(graph) => Ok(graph.clone()),
            None => anyhow::bail!("HTTP error code 404 Not Found"),
        }
    }
}
