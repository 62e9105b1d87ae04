//! Cycle detection and topological ordering for directed graphs.

use crate::graphlib::collections::IdSet;
use crate::graphlib::{DiGraph, Id, Result};

struct Frame {
    node: Id,
    children: Vec<Id>,
    next: usize,
}

/// DFS finish order over all of `d`, or `None` the moment a back edge to an
/// in-progress node shows up.
///
/// The classic 3-state coloring: `on_stack` holds in-progress nodes,
/// `explored` holds finished ones, everything else is unvisited.
fn finish_order(d: &DiGraph) -> Result<Option<Vec<Id>>> {
    let mut explored = IdSet::default();
    let mut on_stack = IdSet::default();
    let mut ordering: Vec<Id> = Vec::new();

    for x in d.node_ids() {
        if explored.contains(&x) {
            continue;
        }
        on_stack.insert(x.clone());
        let mut stack = vec![Frame {
            children: d.adjacent(&x)?,
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
                if on_stack.contains(&y) {
                    return Ok(None);
                }
                if !explored.contains(&y) {
                    on_stack.insert(y.clone());
                    let children = d.adjacent(&y)?;
                    stack.push(Frame {
                        node: y,
                        children,
                        next: 0,
                    });
                }
            } else {
                on_stack.remove(&top.node);
                explored.insert(top.node.clone());
                ordering.push(top.node.clone());
                stack.pop();
            }
        }
    }

    Ok(Some(ordering))
}

/// Whether `d` contains a directed cycle.
pub fn is_cyclic(d: &DiGraph) -> Result<bool> {
    Ok(finish_order(d)?.is_none())
}

/// Whether `d` is a directed acyclic graph.
pub fn is_acyclic(d: &DiGraph) -> Result<bool> {
    Ok(finish_order(d)?.is_some())
}

/// A topological ordering of `d`: for every link (x, y), x precedes y.
///
/// Returns `Ok(None)` when no ordering exists, i.e. exactly when
/// [`is_cyclic`] holds.
pub fn topological_sort(d: &DiGraph) -> Result<Option<Vec<Id>>> {
    Ok(finish_order(d)?.map(|mut ordering| {
        ordering.reverse();
        ordering
    }))
}
