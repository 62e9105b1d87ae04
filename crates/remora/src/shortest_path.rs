//! Single-source and all-pairs shortest paths.
//!
//! `Ok(None)` returns signal a reachable negative cycle (no solution);
//! genuine failures such as an absent start node or an unlabeled edge are
//! errors.

use std::collections::VecDeque;

use tracing::debug;

use crate::graphlib::collections::{DataMap, IdMap};
use crate::graphlib::{DiGraph, Error, GraphView, Heap, HeapMode, Id, Link, Node, Result};

/// Attribute key the Dijkstra heap is ordered by.
const DISTANCE: &str = "distance";

/// Single-source result: distance per node (`f64::INFINITY` when
/// unreachable) and, when requested, a predecessor map for path
/// reconstruction.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    pub dist: IdMap<f64>,
    pub prev: Option<IdMap<Id>>,
}

/// All-pairs result: distance per ordered node pair and, when requested, a
/// successor map for path reconstruction.
#[derive(Clone, Debug)]
pub struct AllPairs {
    pub dist: IdMap<IdMap<f64>>,
    pub succ: Option<IdMap<IdMap<Id>>>,
}

/// BFS layer (minimum edge count from `s`) for every node; unreachable
/// nodes get `f64::INFINITY`. Fails if `s` is absent.
pub fn graph_layers(g: &impl GraphView, s: &Id) -> Result<IdMap<f64>> {
    if !g.contains(s) {
        return Err(Error::NodeNotFound(s.clone()));
    }

    let mut layers: IdMap<f64> = g.node_ids().into_iter().map(|x| (x, f64::INFINITY)).collect();
    let mut queue: VecDeque<Id> = VecDeque::new();

    layers.insert(s.clone(), 0.0);
    queue.push_back(s.clone());

    while let Some(x) = queue.pop_front() {
        let layer = layers.get(&x).copied().unwrap_or(f64::INFINITY);
        for y in g.adjacent(&x)? {
            if layers.get(&y).copied().unwrap_or(f64::INFINITY) == f64::INFINITY {
                layers.insert(y.clone(), layer + 1.0);
                queue.push_back(y);
            }
        }
    }

    Ok(layers)
}

fn weight(link: &Link, label: &str) -> Result<f64> {
    link.get(label)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| Error::MissingAttribute {
            uid: link.uid().clone(),
            label: label.to_string(),
        })
}

/// Minimum `label` weight over all links from `x` to `y`; an unlabeled link
/// between them is an error, not skipped.
fn min_weight(g: &impl GraphView, x: &Id, y: &Id, label: &str) -> Result<f64> {
    let mut best = f64::INFINITY;
    for link in g.edges_between(x, y)? {
        best = best.min(weight(link, label)?);
    }
    Ok(best)
}

/// Dijkstra's algorithm from `s`, with edge values under `label`.
///
/// Requires non-negative weights. The frontier is the indexable
/// [`Heap`] keyed on a synthetic `"distance"` attribute, relaxed through
/// `Heap::modify` (decrease-key). Where parallel links join a pair of
/// nodes, the minimum weight among them is used. Fails with
/// [`Error::MissingAttribute`] if a traversed link lacks `label`.
pub fn dijkstra(
    g: &impl GraphView,
    s: &Id,
    label: &str,
    include_prev: bool,
) -> Result<ShortestPaths> {
    if !g.contains(s) {
        return Err(Error::NodeNotFound(s.clone()));
    }

    let mut dist: IdMap<f64> = g.node_ids().into_iter().map(|x| (x, f64::INFINITY)).collect();
    dist.insert(s.clone(), 0.0);

    let mut prev: IdMap<Id> = IdMap::default();

    let mut heap = Heap::new(DISTANCE, HeapMode::Min);
    for (x, &d) in &dist {
        let mut item = Node::new(x.clone());
        item.set(DISTANCE, d);
        heap.insert(item)?;
    }

    while let Some(item) = heap.extract() {
        let x = item.uid().clone();
        let dx = dist.get(&x).copied().unwrap_or(f64::INFINITY);
        if dx == f64::INFINITY {
            // Everything still in the heap is unreachable.
            break;
        }
        for y in g.adjacent(&x)? {
            if !heap.contains(&y) {
                continue;
            }
            let alt = dx + min_weight(g, &x, &y, label)?;
            if alt < dist.get(&y).copied().unwrap_or(f64::INFINITY) {
                dist.insert(y.clone(), alt);
                if include_prev {
                    prev.insert(y.clone(), x.clone());
                }
                let mut data = DataMap::default();
                data.insert(DISTANCE.to_string(), alt.into());
                heap.modify(&y, data)?;
            }
        }
    }

    Ok(ShortestPaths {
        dist,
        prev: include_prev.then_some(prev),
    })
}

/// Bellman-Ford from `s` over `d`, with edge values under `label`.
///
/// Relaxes every link |V|-1 times, exiting early once a pass changes
/// nothing. `Ok(None)` means a pass beyond that still changed a distance,
/// i.e. a negative-weight cycle is reachable from `s`; no partial result is
/// returned in that case.
pub fn bellman_ford(
    d: &DiGraph,
    s: &Id,
    label: &str,
    include_prev: bool,
) -> Result<Option<ShortestPaths>> {
    if !d.contains(s) {
        return Err(Error::NodeNotFound(s.clone()));
    }

    let mut edges: Vec<(Id, Id, f64)> = Vec::with_capacity(d.size());
    for link in d.edges() {
        edges.push((link.xid().clone(), link.yid().clone(), weight(link, label)?));
    }

    let mut dist: IdMap<f64> = d.node_ids().into_iter().map(|x| (x, f64::INFINITY)).collect();
    dist.insert(s.clone(), 0.0);

    let mut prev: IdMap<Id> = IdMap::default();

    let n = d.order();
    for pass in 0..n {
        let mut changed = false;
        for (x, y, w) in &edges {
            let dx = dist.get(x).copied().unwrap_or(f64::INFINITY);
            let alt = dx + w;
            if alt < dist.get(y).copied().unwrap_or(f64::INFINITY) {
                dist.insert(y.clone(), alt);
                if include_prev {
                    prev.insert(y.clone(), x.clone());
                }
                changed = true;
            }
        }
        if !changed {
            debug!(pass, "bellman-ford converged early");
            break;
        }
        if pass == n - 1 {
            debug!("bellman-ford detected a negative cycle");
            return Ok(None);
        }
    }

    Ok(Some(ShortestPaths {
        dist,
        prev: include_prev.then_some(prev),
    }))
}

/// Floyd-Warshall all-pairs shortest paths over `d`.
///
/// Self-distances start at 0 and must stay there; `Ok(None)` means some
/// diagonal entry went negative, i.e. `d` has a negative cycle.
pub fn floyd_warshall(d: &DiGraph, label: &str, include_succ: bool) -> Result<Option<AllPairs>> {
    let ids = d.node_ids();
    let n = ids.len();
    let slot: IdMap<usize> = ids.iter().cloned().zip(0..n).collect();

    let mut dist = vec![f64::INFINITY; n * n];
    let mut succ: Vec<Option<usize>> = vec![None; n * n];
    for i in 0..n {
        dist[i * n + i] = 0.0;
    }

    for link in d.edges() {
        let w = weight(link, label)?;
        let (Some(&i), Some(&j)) = (slot.get(link.xid()), slot.get(link.yid())) else {
            continue;
        };
        if w < dist[i * n + j] {
            dist[i * n + j] = w;
            succ[i * n + j] = Some(j);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dik = dist[i * n + k];
            if dik == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let alt = dik + dist[k * n + j];
                if alt < dist[i * n + j] {
                    dist[i * n + j] = alt;
                    succ[i * n + j] = succ[i * n + k];
                }
            }
        }
    }

    for i in 0..n {
        if dist[i * n + i] < 0.0 {
            debug!("floyd-warshall detected a negative cycle");
            return Ok(None);
        }
    }

    let mut dist_map: IdMap<IdMap<f64>> = IdMap::default();
    let mut succ_map: IdMap<IdMap<Id>> = IdMap::default();
    for (i, x) in ids.iter().enumerate() {
        let mut row: IdMap<f64> = IdMap::default();
        let mut succ_row: IdMap<Id> = IdMap::default();
        for (j, y) in ids.iter().enumerate() {
            row.insert(y.clone(), dist[i * n + j]);
            if include_succ {
                if let Some(sj) = succ[i * n + j] {
                    succ_row.insert(y.clone(), ids[sj].clone());
                }
            }
        }
        dist_map.insert(x.clone(), row);
        if include_succ {
            succ_map.insert(x.clone(), succ_row);
        }
    }

    Ok(Some(AllPairs {
        dist: dist_map,
        succ: include_succ.then_some(succ_map),
    }))
}

/// Johnson's algorithm: all-pairs shortest paths with possibly negative
/// weights (but no negative cycle).
///
/// A synthetic super-source ([`Id::Synthetic`], guaranteed not to collide
/// with any caller id) is linked to every node with weight 0; Bellman-Ford
/// from it yields potentials `h`, every edge is reweighted to
/// `w + h(x) - h(y)` (non-negative when no negative cycle exists), and
/// Dijkstra runs from every original node on the reweighted graph.
/// Returned distances are converted back to the original weighting.
/// Propagates `Ok(None)` if the initial Bellman-Ford finds a negative
/// cycle.
pub fn johnson(
    d: &DiGraph,
    label: &str,
    include_prev: bool,
) -> Result<Option<IdMap<ShortestPaths>>> {
    let ids = d.node_ids();

    let mut augmented = d.clone();
    for (k, x) in ids.iter().enumerate() {
        let mut link = Link::new(Id::Synthetic.tagged(k as u32), Id::Synthetic, x.clone());
        link.set(label, 0.0);
        augmented.add_edge(link);
    }

    let Some(potentials) = bellman_ford(&augmented, &Id::Synthetic, label, false)? else {
        return Ok(None);
    };
    let h = potentials.dist;
    debug!(nodes = ids.len(), "johnson reweighting potentials computed");

    let mut reweighted = d.clone();
    for eid in reweighted.edge_ids() {
        let (hx, hy, w) = {
            let Some(link) = reweighted.get_edge(&eid) else {
                continue;
            };
            (
                h.get(link.xid()).copied().unwrap_or(0.0),
                h.get(link.yid()).copied().unwrap_or(0.0),
                weight(link, label)?,
            )
        };
        if let Some(link) = reweighted.get_edge_mut(&eid) {
            link.set(label, w + hx - hy);
        }
    }

    let mut results: IdMap<ShortestPaths> = IdMap::default();
    for x in &ids {
        let mut sp = dijkstra(&reweighted, x, label, include_prev)?;
        let hx = h.get(x).copied().unwrap_or(0.0);
        for (y, dv) in sp.dist.iter_mut() {
            if dv.is_finite() {
                *dv = *dv - hx + h.get(y).copied().unwrap_or(0.0);
            }
        }
        results.insert(x.clone(), sp);
    }

    Ok(Some(results))
}
