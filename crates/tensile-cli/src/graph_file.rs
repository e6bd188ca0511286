//! Graph input files.
//!
//! A graph file is a TOML document listing node names and the edges between
//! them:
//!
//! ```toml
//! nodes = ["client", "server", "database"]
//! edges = [
//!     ["client", "server"],
//!     ["server", "database"],
//! ]
//! ```
//!
//! Edges may only name declared nodes. Node names must be unique.

use std::collections::HashMap;

use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Deserialize;
use thiserror::Error;

/// Problems found while reading a graph file.
#[derive(Debug, Error)]
pub enum GraphFileError {
    #[error("Failed to parse graph file: {0}")]
    Parse(String),

    #[error("Node `{0}` is declared more than once")]
    DuplicateNode(String),

    #[error("Edge {edge} references undeclared node `{node}`")]
    UnknownNode { edge: usize, node: String },
}

/// The raw contents of a graph file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    #[serde(default)]
    nodes: Vec<String>,

    #[serde(default)]
    edges: Vec<(String, String)>,
}

impl GraphFile {
    /// Parses a graph file from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`GraphFileError::Parse`] for malformed TOML or unexpected keys.
    pub fn parse(source: &str) -> Result<Self, GraphFileError> {
        toml::from_str(source).map_err(|e| GraphFileError::Parse(e.to_string()))
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Builds a directed graph whose node weights are the node names.
    ///
    /// # Errors
    ///
    /// Returns [`GraphFileError::DuplicateNode`] or
    /// [`GraphFileError::UnknownNode`] when the file does not describe a
    /// consistent graph.
    pub fn to_graph(&self) -> Result<DiGraph<String, ()>, GraphFileError> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.nodes.len());

        for name in &self.nodes {
            if indices.contains_key(name.as_str()) {
                return Err(GraphFileError::DuplicateNode(name.clone()));
            }
            indices.insert(name.as_str(), graph.add_node(name.clone()));
        }

        for (edge, (head, tail)) in self.edges.iter().enumerate() {
            let lookup = |node: &String| {
                indices
                    .get(node.as_str())
                    .copied()
                    .ok_or_else(|| GraphFileError::UnknownNode {
                        edge,
                        node: node.clone(),
                    })
            };
            let (head, tail) = (lookup(head)?, lookup(tail)?);
            graph.add_edge(head, tail, ());
        }

        debug!(nodes = graph.node_count(), edges = graph.edge_count(); "Graph built");
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_build() {
        let file = GraphFile::parse(
            r#"
            nodes = ["a", "b", "c"]
            edges = [["a", "b"], ["c", "a"]]
            "#,
        )
        .unwrap();
        assert_eq!(file.nodes().len(), 3);
        assert_eq!(file.edges()[1], ("c".to_string(), "a".to_string()));

        let graph = file.to_graph().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph[NodeIndex::new(2)], "c");
    }

    #[test]
    fn test_empty_file() {
        let graph = GraphFile::parse("").unwrap().to_graph().unwrap();
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_unknown_node() {
        let file = GraphFile::parse(
            r#"
            nodes = ["a"]
            edges = [["a", "a"], ["a", "b"]]
            "#,
        )
        .unwrap();
        match file.to_graph() {
            Err(GraphFileError::UnknownNode { edge, node }) => {
                assert_eq!(edge, 1);
                assert_eq!(node, "b");
            }
            other => panic!("Expected UnknownNode, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_node() {
        let file = GraphFile::parse(r#"nodes = ["a", "a"]"#).unwrap();
        assert!(matches!(
            file.to_graph(),
            Err(GraphFileError::DuplicateNode(name)) if name == "a"
        ));
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_edges() {
        assert!(matches!(
            GraphFile::parse("vertices = []"),
            Err(GraphFileError::Parse(_))
        ));
        assert!(matches!(
            GraphFile::parse(r#"edges = [["a"]]"#),
            Err(GraphFileError::Parse(_))
        ));
    }
}
