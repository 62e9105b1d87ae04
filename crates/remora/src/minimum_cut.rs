//! Global minimum cut by Karger's randomized contraction.

use rand::thread_rng;
use tracing::{debug, trace};

use crate::connectivity::connected;
use crate::graphlib::collections::IdSet;
use crate::graphlib::{Error, Graph, Id, Result, Value};

/// Node attribute accumulating the original ids folded into a contracted
/// node. Reserved for [`karger`]; inputs should not use it.
const MULTINODE: &str = "multinode";

/// A cut of a graph: the two sides of the node partition and the number of
/// links crossing between them.
#[derive(Clone, Debug)]
pub struct Cut {
    pub partition: (IdSet, IdSet),
    pub size: usize,
}

/// Karger's minimum-cut algorithm on a connected undirected graph.
///
/// Each trial contracts uniformly random links until two nodes remain; the
/// links still standing all cross the induced partition, so their count is
/// a candidate cut size. The best cut over all trials is returned. With the
/// default trial count, `ceil(C(n, 2) * ln n)`, the result is the true
/// minimum cut with probability at least `1 - 1/n`.
///
/// Fails with [`Error::Domain`] if `g` has fewer than 2 nodes or is
/// disconnected.
pub fn karger(g: &Graph, trials: Option<usize>) -> Result<Cut> {
    let n = g.order();
    if n < 2 {
        return Err(Error::Domain(
            "cannot cut a graph with fewer than 2 nodes".to_string(),
        ));
    }
    if !connected(g, None)? {
        return Err(Error::Domain(
            "cannot cut a disconnected graph".to_string(),
        ));
    }

    let trials = trials.unwrap_or_else(|| {
        let pairs = (n * (n - 1) / 2) as f64;
        (pairs * (n as f64).ln()).ceil() as usize
    });
    debug!(n, trials, "running karger contraction trials");

    let mut rng = thread_rng();
    let mut best: Option<Cut> = None;

    for trial in 0..trials {
        let candidate = contract_to_cut(g, &mut rng);
        trace!(trial, size = candidate.size, "karger trial finished");
        if best.as_ref().is_none_or(|b| candidate.size < b.size) {
            best = Some(candidate);
        }
    }

    // trials >= 1 whenever n >= 2, so a candidate always exists.
    best.ok_or_else(|| Error::Domain("no contraction trial was run".to_string()))
}

fn contract_to_cut(g: &Graph, rng: &mut impl rand::Rng) -> Cut {
    let mut h = g.clone();
    while h.order() > 2 {
        let Some(eid) = h.choose_edge(rng) else {
            break;
        };
        h.contract_edge(&eid, MULTINODE);
    }

    let mut sides: Vec<IdSet> = h
        .node_ids()
        .into_iter()
        .map(|xid| side_members(&h, &xid))
        .collect();
    let right = sides.pop().unwrap_or_default();
    let left = sides.pop().unwrap_or_default();

    Cut {
        partition: (left, right),
        size: h.size(),
    }
}

/// The original node ids a surviving node stands for: its accumulated
/// membership set, or its own singleton if it was never contracted into.
fn side_members(h: &Graph, xid: &Id) -> IdSet {
    h.get_node(xid)
        .and_then(|x| x.get(MULTINODE))
        .and_then(Value::as_id_set)
        .cloned()
        .unwrap_or_else(|| {
            let mut s = IdSet::default();
            s.insert(xid.clone());
            s
        })
}
