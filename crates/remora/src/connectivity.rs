//! Weak and strong connectivity analysis.

use crate::graphlib::collections::{IdMap, IdSet};
use crate::graphlib::{DiGraph, GraphView, Id, Result};
use crate::traversal::{graph_search, SearchMethod};

fn ignored(ignore: Option<&IdSet>, x: &Id) -> bool {
    ignore.is_some_and(|set| set.contains(x))
}

/// The weakly connected components of `g`.
///
/// A `DiGraph` is decomposed over its underlying undirected graph; use
/// [`strongly_connected_components`] for directed connectivity.
pub fn connected_components(g: &impl GraphView, ignore: Option<&IdSet>) -> Result<Vec<IdSet>> {
    let t = g.to_undirected();
    graph_search(&t, SearchMethod::Bfs, ignore)
}

/// Number of weakly connected components of `g`.
pub fn connectivity(g: &impl GraphView, ignore: Option<&IdSet>) -> Result<usize> {
    Ok(connected_components(g, ignore)?.len())
}

/// Whether `g` is (weakly) connected.
pub fn connected(g: &impl GraphView, ignore: Option<&IdSet>) -> Result<bool> {
    Ok(connectivity(g, ignore)? <= 1)
}

/// The strongly connected components of `d`, via Kosaraju's two-pass
/// algorithm.
///
/// The first pass runs a post-order DFS over the reverse adjacency to build
/// a finishing-order stack; the second assigns component ids by forward DFS
/// in reverse finishing order. Both passes use explicit stacks, so
/// component depth never threatens the call stack. The result is a
/// partition of the (non-ignored) nodes into maximal mutually-reachable
/// sets.
pub fn strongly_connected_components(
    d: &DiGraph,
    ignore: Option<&IdSet>,
) -> Result<Vec<IdSet>> {
    struct Frame {
        node: Id,
        children: Vec<Id>,
        next: usize,
    }

    let mut explored = IdSet::default();
    let mut ordering: Vec<Id> = Vec::new();

    for x in d.node_ids() {
        if explored.contains(&x) || ignored(ignore, &x) {
            continue;
        }
        explored.insert(x.clone());
        let mut stack = vec![Frame {
            children: d.coadjacent(&x)?,
            node: x,
            next: 0,
        }];
        loop {
            let Some(top) = stack.last_mut() else {
                break;
            };
            if top.next < top.children.len() {
                let y = top.children[top.next].clone();
                top.next += 1;
                if !explored.contains(&y) && !ignored(ignore, &y) {
                    explored.insert(y.clone());
                    let children = d.coadjacent(&y)?;
                    stack.push(Frame {
                        node: y,
                        children,
                        next: 0,
                    });
                }
            } else {
                ordering.push(top.node.clone());
                stack.pop();
            }
        }
    }

    let mut assigned: IdMap<usize> = IdMap::default();
    let mut count = 0;

    for x in ordering.iter().rev() {
        if assigned.contains_key(x) || ignored(ignore, x) {
            continue;
        }
        assigned.insert(x.clone(), count);
        let mut stack = vec![x.clone()];
        while let Some(v) = stack.pop() {
            for y in d.adjacent(&v)? {
                if !assigned.contains_key(&y) && !ignored(ignore, &y) {
                    assigned.insert(y.clone(), count);
                    stack.push(y);
                }
            }
        }
        count += 1;
    }

    let mut components = vec![IdSet::default(); count];
    for (x, c) in assigned {
        components[c].insert(x);
    }
    Ok(components)
}

/// Number of strongly connected components of `d`.
pub fn strong_connectivity(d: &DiGraph, ignore: Option<&IdSet>) -> Result<usize> {
    Ok(strongly_connected_components(d, ignore)?.len())
}

/// Whether `d` is strongly connected.
pub fn strongly_connected(d: &DiGraph, ignore: Option<&IdSet>) -> Result<bool> {
    Ok(strong_connectivity(d, ignore)? <= 1)
}
