//! Read-only seam shared by both graph variants.

use crate::{DiGraph, Graph, Id, Link, Node, Result};

/// Queries common to [`Graph`] and [`DiGraph`].
///
/// Traversal and shortest-path algorithms are written against this trait so
/// they accept either variant. For a `DiGraph`, `adjacent` and
/// `edges_between` follow link direction; for a `Graph` they are symmetric.
pub trait GraphView {
    fn contains(&self, x: &Id) -> bool;
    fn node_ids(&self) -> Vec<Id>;
    fn get_node(&self, x: &Id) -> Option<&Node>;
    fn get_edge(&self, e: &Id) -> Option<&Link>;
    fn adjacent(&self, x: &Id) -> Result<Vec<Id>>;
    fn edges_between(&self, x: &Id, y: &Id) -> Result<Vec<&Link>>;
    fn order(&self) -> usize;
    fn size(&self) -> usize;
    fn is_directed(&self) -> bool;

    /// The underlying undirected graph (a copy for `Graph` itself).
    fn to_undirected(&self) -> Graph;
}

impl GraphView for Graph {
    fn contains(&self, x: &Id) -> bool {
        Graph::contains(self, x)
    }

    fn node_ids(&self) -> Vec<Id> {
        Graph::node_ids(self)
    }

    fn get_node(&self, x: &Id) -> Option<&Node> {
        Graph::get_node(self, x)
    }

    fn get_edge(&self, e: &Id) -> Option<&Link> {
        Graph::get_edge(self, e)
    }

    fn adjacent(&self, x: &Id) -> Result<Vec<Id>> {
        Graph::adjacent(self, x)
    }

    fn edges_between(&self, x: &Id, y: &Id) -> Result<Vec<&Link>> {
        Graph::get_edges_between(self, x, y)
    }

    fn order(&self) -> usize {
        Graph::order(self)
    }

    fn size(&self) -> usize {
        Graph::size(self)
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn to_undirected(&self) -> Graph {
        Graph::to_undirected(self)
    }
}

impl GraphView for DiGraph {
    fn contains(&self, x: &Id) -> bool {
        DiGraph::contains(self, x)
    }

    fn node_ids(&self) -> Vec<Id> {
        DiGraph::node_ids(self)
    }

    fn get_node(&self, x: &Id) -> Option<&Node> {
        DiGraph::get_node(self, x)
    }

    fn get_edge(&self, e: &Id) -> Option<&Link> {
        DiGraph::get_edge(self, e)
    }

    fn adjacent(&self, x: &Id) -> Result<Vec<Id>> {
        DiGraph::adjacent(self, x)
    }

    fn edges_between(&self, x: &Id, y: &Id) -> Result<Vec<&Link>> {
        DiGraph::get_edges_between(self, x, y)
    }

    fn order(&self) -> usize {
        DiGraph::order(self)
    }

    fn size(&self) -> usize {
        DiGraph::size(self)
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn to_undirected(&self) -> Graph {
        DiGraph::to_undirected(self)
    }
}
