//! Classical graph algorithms over the `remora-graphlib` structures.
//!
//! Traversal and connectivity analysis, DAG checks and topological sorting,
//! single-source and all-pairs shortest paths, and Karger's randomized
//! minimum cut, plus builders for canonical graphs. Algorithms that accept
//! either graph variant are generic over [`graphlib::GraphView`].
//!
//! Everything runs synchronously to completion on the calling thread; there
//! is no cancellation mechanism, and the recursive traversal variants
//! consume call-stack depth proportional to graph depth (the iterative
//! forms are the defaults).

pub use remora_graphlib as graphlib;

pub mod bipartite;
pub mod build;
pub mod connectivity;
pub mod dag;
pub mod minimum_cut;
pub mod shortest_path;
pub mod traversal;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
