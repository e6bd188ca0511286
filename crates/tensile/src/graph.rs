//! Laying out [`petgraph`] graphs.
//!
//! [`graph_handles`] turns any `petgraph::Graph` into the node and edge lists
//! a [`GraphLayout`](crate::GraphLayout) expects. Nodes are identified by
//! their [`NodeIndex`], so node and edge weights never need to be cloned or
//! hashed.

use petgraph::{
    EdgeType,
    graph::{DefaultIx, EdgeIndex, Graph, IndexType, NodeIndex},
    visit::EdgeRef,
};

use tensile_core::{geometry::Vector, graph::DirectedEdge};

use crate::{
    config::AppConfig,
    error::TensileError,
    layout::ForceBasedLayout,
    simulation::{RunSummary, Simulation},
};

/// Handle of a petgraph edge, running from `head` (source) to `tail` (target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphEdge<Ix = DefaultIx> {
    index: EdgeIndex<Ix>,
    head: NodeIndex<Ix>,
    tail: NodeIndex<Ix>,
}

impl<Ix: IndexType> GraphEdge<Ix> {
    pub fn new(index: EdgeIndex<Ix>, head: NodeIndex<Ix>, tail: NodeIndex<Ix>) -> Self {
        Self { index, head, tail }
    }

    /// Index of the edge in its graph
    pub fn index(&self) -> EdgeIndex<Ix> {
        self.index
    }
}

impl<Ix: IndexType> DirectedEdge<NodeIndex<Ix>> for GraphEdge<Ix> {
    fn head(&self) -> &NodeIndex<Ix> {
        &self.head
    }

    fn tail(&self) -> &NodeIndex<Ix> {
        &self.tail
    }
}

/// Collects the node indices and edge handles of `graph`, in index order.
///
/// Undirected graphs work the same way: each edge appears once, oriented
/// from the endpoint it was added with first.
pub fn graph_handles<N, E, Ty, Ix>(
    graph: &Graph<N, E, Ty, Ix>,
) -> (Vec<NodeIndex<Ix>>, Vec<GraphEdge<Ix>>)
where
    Ty: EdgeType,
    Ix: IndexType,
{
    let nodes = graph.node_indices().collect();
    let edges = graph
        .edge_references()
        .map(|edge| GraphEdge::new(edge.id(), edge.source(), edge.target()))
        .collect();
    (nodes, edges)
}

/// Final node positions of a laid out petgraph graph.
#[derive(Debug, Clone)]
pub struct PlacedGraph<Ix = DefaultIx> {
    summary: RunSummary,
    positions: Vec<(NodeIndex<Ix>, Vector)>,
}

impl<Ix: IndexType> PlacedGraph<Ix> {
    /// How the run ended
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Position of every node, in node index order
    pub fn positions(&self) -> &[(NodeIndex<Ix>, Vector)] {
        &self.positions
    }

    pub fn position(&self, node: NodeIndex<Ix>) -> Option<Vector> {
        self.positions
            .get(node.index())
            .filter(|(index, _)| *index == node)
            .map(|(_, position)| *position)
    }
}

/// Lays out `graph` with a [`ForceBasedLayout`] built from `config`.
///
/// The layout runs as a batch: it is stepped until it settles or until the
/// configured `max_steps` is reached.
///
/// # Errors
///
/// Returns [`TensileError::Config`] or [`TensileError::Geometry`] when the
/// configuration is invalid.
///
/// # Examples
///
/// ```
/// use petgraph::graph::DiGraph;
/// use tensile::{config::AppConfig, graph::layout_graph};
///
/// let mut graph = DiGraph::<&str, ()>::new();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// graph.add_edge(a, b, ());
///
/// let placed = layout_graph(&graph, &AppConfig::default()).unwrap();
/// assert!(placed.position(a).is_some());
/// ```
pub fn layout_graph<N, E, Ty, Ix>(
    graph: &Graph<N, E, Ty, Ix>,
    config: &AppConfig,
) -> Result<PlacedGraph<Ix>, TensileError>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    let (nodes, edges) = graph_handles(graph);
    let layout = ForceBasedLayout::from_config(config.layout())?;
    let mut simulation = Simulation::from_config(layout, config.simulation())?
        .with_nodes(nodes)
        .with_edges(edges);

    let summary = simulation.batch_run()?;
    let positions = simulation
        .layout()
        .positions()
        .map(|(node, position)| (*node, position))
        .collect();

    Ok(PlacedGraph { summary, positions })
}
