//! Breadth-first and depth-first traversal.

use std::collections::VecDeque;

use crate::graphlib::collections::IdSet;
use crate::graphlib::{Error, GraphView, Id, Result};

/// Which traversal [`graph_search`] drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMethod {
    Bfs,
    Dfs,
}

fn ignored(ignore: Option<&IdSet>, x: &Id) -> bool {
    ignore.is_some_and(|set| set.contains(x))
}

/// All nodes reachable from `s` (the connected component of `s` for an
/// undirected graph), expanding the frontier breadth-first.
///
/// `ignore` excludes a set of already-explored nodes from re-traversal.
/// Fails with [`Error::NodeNotFound`] if `s` is not in the graph.
pub fn breadth_first_search(
    g: &impl GraphView,
    s: &Id,
    ignore: Option<&IdSet>,
) -> Result<IdSet> {
    if !g.contains(s) {
        return Err(Error::NodeNotFound(s.clone()));
    }

    let mut explored = IdSet::default();
    let mut queue = VecDeque::new();

    explored.insert(s.clone());
    queue.push_back(s.clone());

    while let Some(x) = queue.pop_front() {
        for y in g.adjacent(&x)? {
            if !explored.contains(&y) && !ignored(ignore, &y) {
                explored.insert(y.clone());
                queue.push_back(y);
            }
        }
    }

    Ok(explored)
}

/// All nodes reachable from `s`, expanding full-depth paths first.
///
/// Explicit-stack form; visits the same set as
/// [`breadth_first_search`] in a different order. Fails with
/// [`Error::NodeNotFound`] if `s` is not in the graph.
pub fn depth_first_search(g: &impl GraphView, s: &Id, ignore: Option<&IdSet>) -> Result<IdSet> {
    if !g.contains(s) {
        return Err(Error::NodeNotFound(s.clone()));
    }

    let mut explored = IdSet::default();
    let mut stack = Vec::new();

    explored.insert(s.clone());
    stack.push(s.clone());

    while let Some(x) = stack.pop() {
        for y in g.adjacent(&x)? {
            if !explored.contains(&y) && !ignored(ignore, &y) {
                explored.insert(y.clone());
                stack.push(y);
            }
        }
    }

    Ok(explored)
}

/// Recursive variant of [`depth_first_search`].
///
/// Behaviorally equivalent; consumes call-stack depth proportional to the
/// graph's depth, so prefer the iterative form for large or deep graphs.
pub fn depth_first_search_recursive(
    g: &impl GraphView,
    s: &Id,
    ignore: Option<&IdSet>,
) -> Result<IdSet> {
    if !g.contains(s) {
        return Err(Error::NodeNotFound(s.clone()));
    }

    fn recurse(
        g: &impl GraphView,
        x: &Id,
        ignore: Option<&IdSet>,
        explored: &mut IdSet,
    ) -> Result<()> {
        explored.insert(x.clone());
        for y in g.adjacent(x)? {
            if !explored.contains(&y) && !ignored(ignore, &y) {
                recurse(g, &y, ignore, explored)?;
            }
        }
        Ok(())
    }

    let mut explored = IdSet::default();
    recurse(g, s, ignore, &mut explored)?;
    Ok(explored)
}

/// Traverses every not-yet-explored, not-ignored node, yielding the
/// components discovered by repeated BFS/DFS.
///
/// Well-defined only for undirected graphs: on a `DiGraph` the grouping
/// depends on visitation order. Use
/// [`strongly_connected_components`](crate::connectivity::strongly_connected_components)
/// for directed connectivity.
pub fn graph_search(
    g: &impl GraphView,
    method: SearchMethod,
    ignore: Option<&IdSet>,
) -> Result<Vec<IdSet>> {
    let mut explored = IdSet::default();
    let mut components = Vec::new();

    for x in g.node_ids() {
        if explored.contains(&x) || ignored(ignore, &x) {
            continue;
        }
        let component = match method {
            SearchMethod::Bfs => breadth_first_search(g, &x, ignore)?,
            SearchMethod::Dfs => depth_first_search(g, &x, ignore)?,
        };
        explored.extend(component.iter().cloned());
        components.push(component);
    }

    Ok(components)
}
