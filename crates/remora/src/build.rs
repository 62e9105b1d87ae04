//! Convenience constructors for common graphs.
//!
//! The directed shapes get their own `*_digraph` functions instead of a
//! `directed` flag, so each builder has a concrete return type.

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::graphlib::collections::DataMap;
use crate::graphlib::{DiGraph, Error, Graph, Id, Link, Node, Result};

/// Bare nodes from a sequence of ids.
pub fn create_nodes(ids: impl IntoIterator<Item = impl Into<Id>>) -> Vec<Node> {
    ids.into_iter().map(Node::new).collect()
}

/// Nodes from (id, data) pairs.
pub fn create_nodes_with_data(
    items: impl IntoIterator<Item = (impl Into<Id>, DataMap)>,
) -> Vec<Node> {
    items
        .into_iter()
        .map(|(uid, data)| Node::with_data(uid, data))
        .collect()
}

/// Bare links from (uid, xid, yid) triples.
pub fn create_links<U, X, Y>(triples: impl IntoIterator<Item = (U, X, Y)>) -> Vec<Link>
where
    U: Into<Id>,
    X: Into<Id>,
    Y: Into<Id>,
{
    triples
        .into_iter()
        .map(|(uid, xid, yid)| Link::new(uid, xid, yid))
        .collect()
}

/// Links from (uid, xid, yid, data) tuples.
pub fn create_links_with_data<U, X, Y>(
    items: impl IntoIterator<Item = (U, X, Y, DataMap)>,
) -> Vec<Link>
where
    U: Into<Id>,
    X: Into<Id>,
    Y: Into<Id>,
{
    items
        .into_iter()
        .map(|(uid, xid, yid, data)| Link::with_data(uid, xid, yid, data))
        .collect()
}

fn ring_links(n: i64, reverse: bool) -> Vec<Link> {
    let mut links = path_links(n, reverse);
    if reverse {
        links.push(Link::new(n - 1, 0, n - 1));
    } else {
        links.push(Link::new(n - 1, n - 1, 0));
    }
    links
}

fn path_links(n: i64, reverse: bool) -> Vec<Link> {
    (0..n - 1)
        .map(|i| {
            if reverse {
                Link::new(i, i + 1, i)
            } else {
                Link::new(i, i, i + 1)
            }
        })
        .collect()
}

/// The cycle graph on nodes `0..n` (n >= 3).
pub fn cycle_graph(n: i64) -> Result<Graph> {
    if n < 3 {
        return Err(Error::Domain(format!(
            "cannot create a cycle graph with {n} < 3 nodes"
        )));
    }
    Ok(Graph::from_parts(create_nodes(0..n), ring_links(n, false)))
}

/// The directed cycle on nodes `0..n` (n >= 3); `reverse` flips every arc.
pub fn cycle_digraph(n: i64, reverse: bool) -> Result<DiGraph> {
    if n < 3 {
        return Err(Error::Domain(format!(
            "cannot create a cycle graph with {n} < 3 nodes"
        )));
    }
    Ok(DiGraph::from_parts(create_nodes(0..n), ring_links(n, reverse)))
}

/// The path graph on nodes `0..n` (n >= 2).
pub fn path_graph(n: i64) -> Result<Graph> {
    if n < 2 {
        return Err(Error::Domain(format!(
            "cannot create a path graph with {n} < 2 nodes"
        )));
    }
    Ok(Graph::from_parts(create_nodes(0..n), path_links(n, false)))
}

/// The directed path on nodes `0..n` (n >= 2); `reverse` flips every arc.
pub fn path_digraph(n: i64, reverse: bool) -> Result<DiGraph> {
    if n < 2 {
        return Err(Error::Domain(format!(
            "cannot create a path graph with {n} < 2 nodes"
        )));
    }
    Ok(DiGraph::from_parts(create_nodes(0..n), path_links(n, reverse)))
}

/// The complete graph on nodes `0..n` (n >= 1).
pub fn complete_graph(n: i64) -> Result<Graph> {
    if n < 1 {
        return Err(Error::Domain(format!(
            "cannot create a complete graph with {n} < 1 nodes"
        )));
    }
    let mut links = Vec::new();
    let mut e = 0i64;
    for x in 0..n {
        for y in x + 1..n {
            links.push(Link::new(e, x, y));
            e += 1;
        }
    }
    Ok(Graph::from_parts(create_nodes(0..n), links))
}

fn sample_links(population: Vec<(i64, i64)>, size: usize) -> Vec<Link> {
    let mut rng = thread_rng();
    population
        .choose_multiple(&mut rng, size)
        .enumerate()
        .map(|(e, &(x, y))| Link::new(e as i64, x, y))
        .collect()
}

/// A simple random graph on nodes `0..n` with exactly `size` links
/// (size <= C(n, 2)).
pub fn random_graph(n: i64, size: usize) -> Result<Graph> {
    if n < 1 {
        return Err(Error::Domain(format!(
            "cannot create a random graph with {n} < 1 nodes"
        )));
    }
    let max = (n * (n - 1) / 2) as usize;
    if size > max {
        return Err(Error::Domain(format!(
            "cannot create a random graph with {n} nodes and {size} edges"
        )));
    }
    let mut population = Vec::with_capacity(max);
    for x in 0..n {
        for y in x + 1..n {
            population.push((x, y));
        }
    }
    Ok(Graph::from_parts(create_nodes(0..n), sample_links(population, size)))
}

/// A simple random digraph on nodes `0..n` with exactly `size` arcs
/// (size <= n * (n - 1)).
pub fn random_digraph(n: i64, size: usize) -> Result<DiGraph> {
    if n < 1 {
        return Err(Error::Domain(format!(
            "cannot create a random graph with {n} < 1 nodes"
        )));
    }
    let max = (n * (n - 1)) as usize;
    if size > max {
        return Err(Error::Domain(format!(
            "cannot create a random digraph with {n} nodes and {size} edges"
        )));
    }
    let mut population = Vec::with_capacity(max);
    for x in 0..n {
        for y in 0..n {
            if x != y {
                population.push((x, y));
            }
        }
    }
    Ok(DiGraph::from_parts(create_nodes(0..n), sample_links(population, size)))
}

/// The complete bipartite graph with left side `0..n` and right side
/// `n..n+m` (n, m >= 1).
pub fn complete_bipartite_graph(n: i64, m: i64) -> Result<Graph> {
    if n < 1 || m < 1 {
        return Err(Error::Domain(format!(
            "cannot create a bipartite graph with sides of {n} and {m} nodes"
        )));
    }
    let mut links = Vec::with_capacity((n * m) as usize);
    for i in 0..n {
        for j in 0..m {
            links.push(Link::new(i * m + j, i, j + n));
        }
    }
    Ok(Graph::from_parts(create_nodes(0..n + m), links))
}

/// A random bipartite graph with left side `0..n`, right side `n..n+m`,
/// and exactly `size` links (size <= n * m).
pub fn random_bipartite_graph(n: i64, m: i64, size: usize) -> Result<Graph> {
    if n < 1 || m < 1 {
        return Err(Error::Domain(format!(
            "cannot create a bipartite graph with sides of {n} and {m} nodes"
        )));
    }
    if size > (n * m) as usize {
        return Err(Error::Domain(format!(
            "cannot create a bipartite graph on {n}x{m} sides with {size} edges"
        )));
    }
    let mut population = Vec::with_capacity((n * m) as usize);
    for x in 0..n {
        for y in n..n + m {
            population.push((x, y));
        }
    }
    Ok(Graph::from_parts(
        create_nodes(0..n + m),
        sample_links(population, size),
    ))
}

/// The Petersen graph: outer 5-cycle on 0..5, spokes to 5..10, inner
/// pentagram on 5..10.
pub fn petersen_graph() -> Graph {
    let mut links = ring_links(5, false);
    for i in 5..10i64 {
        links.push(Link::new(i, i - 5, i));
    }
    links.extend(create_links([
        (10, 5, 7),
        (11, 5, 8),
        (12, 6, 8),
        (13, 6, 9),
        (14, 7, 9),
    ]));
    Graph::from_parts(create_nodes(0..10i64), links)
}
