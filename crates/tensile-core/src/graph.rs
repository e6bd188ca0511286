//! The graph contract consumed by the layout engine.
//!
//! Tensile does not own a graph representation. A layout is seeded from a
//! slice of node handles and a slice of edges, where every edge can name its
//! two endpoints through [`DirectedEdge`]. Node handles are compared by
//! equality, so references, indices and identifiers all work.

/// A directed edge between two node handles.
pub trait DirectedEdge<N> {
    /// The node the edge starts from
    fn head(&self) -> &N;

    /// The node the edge points to
    fn tail(&self) -> &N;
}

/// A plain head/tail pair, for callers without an edge type of their own.
///
/// # Examples
///
/// ```
/// # use tensile_core::graph::{DirectedEdge, Edge};
/// let edge = Edge::new("a", "b");
/// assert_eq!(*edge.head(), "a");
/// assert_eq!(*edge.tail(), "b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<N> {
    head: N,
    tail: N,
}

impl<N> Edge<N> {
    /// Creates a new edge from `head` to `tail`.
    pub fn new(head: N, tail: N) -> Self {
        Self { head, tail }
    }
}

impl<N> DirectedEdge<N> for Edge<N> {
    fn head(&self) -> &N {
        &self.head
    }

    fn tail(&self) -> &N {
        &self.tail
    }
}

impl<N, T: DirectedEdge<N>> DirectedEdge<N> for &T {
    fn head(&self) -> &N {
        (**self).head()
    }

    fn tail(&self) -> &N {
        (**self).tail()
    }
}
