//! Graph, heap, and union-find structures used by `remora`.
//!
//! The entity model is a pair of identified value types ([`Node`], [`Link`])
//! carrying open attribute maps, with [`Graph`]/[`DiGraph`] multigraph
//! containers indexed for O(1) amortized adjacency queries, an indexable
//! binary [`Heap`] with O(log n) arbitrary-key updates, and a [`UnionFind`].
//!
//! Nothing here is safe for concurrent mutation; callers needing
//! parallelism serialize access per instance.

pub mod collections;

mod digraph;
mod entity;
mod error;
mod graph;
mod heap;
mod id;
mod union_find;
mod value;
mod view;

pub use digraph::DiGraph;
pub use entity::{Link, Node};
pub use error::{Error, Result};
pub use graph::Graph;
pub use heap::{Heap, HeapMode};
pub use id::Id;
pub use union_find::UnionFind;
pub use value::Value;
pub use view::GraphView;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
