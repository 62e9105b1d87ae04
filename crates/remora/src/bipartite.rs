//! Bipartiteness check by BFS 2-coloring.

use std::collections::VecDeque;

use crate::graphlib::collections::IdMap;
use crate::graphlib::{Error, GraphView, Id, Result};

/// Whether `g` can be 2-colored so that no link joins same-colored nodes.
///
/// Each unexplored component is colored by BFS; the check fails the moment
/// a link connects two same-colored nodes (equivalently, the moment an
/// odd cycle is found). Fails with [`Error::Domain`] on a directed graph or
/// one with fewer than 2 nodes.
pub fn is_bipartite(g: &impl GraphView) -> Result<bool> {
    if g.is_directed() {
        return Err(Error::Domain(
            "cannot check bipartiteness of a directed graph".to_string(),
        ));
    }
    if g.order() < 2 {
        return Err(Error::Domain(
            "cannot check bipartiteness of a graph with fewer than 2 nodes".to_string(),
        ));
    }

    let mut colors: IdMap<bool> = IdMap::default();

    for s in g.node_ids() {
        if colors.contains_key(&s) {
            continue;
        }
        colors.insert(s.clone(), true);
        let mut queue: VecDeque<Id> = VecDeque::new();
        queue.push_back(s);

        while let Some(x) = queue.pop_front() {
            let x_color = colors.get(&x).copied().unwrap_or(true);
            for y in g.adjacent(&x)? {
                match colors.get(&y) {
                    Some(&y_color) => {
                        if y_color == x_color {
                            return Ok(false);
                        }
                    }
                    None => {
                        colors.insert(y.clone(), !x_color);
                        queue.push_back(y);
                    }
                }
            }
        }
    }

    Ok(true)
}
