/// A `(name, version)` node of a resolved dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub name: String,
    pub version: String,
}

impl GraphNode {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A node the graph client could not interpret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNode {
    /// Position of the node in the response's `nodes` array
    pub index: usize,
    pub reason: String,
}

/// DependencyGraph as returned by the dependency-graph service
///
/// Well-formed nodes are kept in response order. Nodes that failed a
/// structural check are listed separately so they can be reported per node
/// instead of failing the whole graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: Vec<GraphNode>,
    skipped: Vec<SkippedNode>,
}

impl DependencyGraph {
    pub fn new(nodes: Vec<GraphNode>, skipped: Vec<SkippedNode>) -> Self {
        Self { nodes, skipped }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn skipped(&self) -> &[SkippedNode] {
        &self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_graph_counts() {
        let graph = DependencyGraph::new(
            vec![GraphNode::new("a:b", "1"), GraphNode::new("c:d", "2")],
            vec![SkippedNode {
                index: 2,
                reason: "missing versionKey".to_string(),
            }],
        );

        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.skipped().len(), 1);
        assert_eq!(graph.skipped()[0].index, 2);
    }

    #[test]
    fn test_dependency_graph_empty() {
        let graph = DependencyGraph::default();
        assert!(graph.nodes().is_empty());
        assert!(graph.skipped().is_empty());
    }
}
