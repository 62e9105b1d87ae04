//! Undirected multigraph over [`Node`] and [`Link`] entities.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::collections::{IdMap, IdSet};
use crate::{DiGraph, Error, Id, Link, Node, Result, Value};

/// An undirected multigraph with O(1) amortized neighbor/incidence queries.
///
/// Self-loops and parallel links are permitted. The adjacency index maps
/// node -> neighbor -> set of link ids between them, with both directions
/// indexed for every stored link. Mutators are silently idempotent: adding a
/// duplicate or removing something absent is a no-op, never an error.
/// Lookups against an absent node id fail with [`Error::NodeNotFound`].
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: IdMap<Node>,
    edges: IdMap<Link>,
    adjacency: IdMap<IdMap<IdSet>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Link>,
    ) -> Self {
        let mut g = Self::new();
        g.add_nodes(nodes);
        g.add_edges(edges);
        g
    }

    /// Whether the graph has no nodes.
    pub fn is_null(&self) -> bool {
        self.order() == 0
    }

    /// Whether the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn add_node(&mut self, x: Node) {
        if self.nodes.contains_key(x.uid()) {
            return;
        }
        self.adjacency.insert(x.uid().clone(), IdMap::default());
        self.nodes.insert(x.uid().clone(), x);
    }

    pub fn add_nodes(&mut self, xs: impl IntoIterator<Item = Node>) {
        for x in xs {
            self.add_node(x);
        }
    }

    /// Removes a node and all of its incident links.
    pub fn remove_node(&mut self, x: &Id) {
        if !self.nodes.contains_key(x) {
            return;
        }
        let adj = self.adjacency.remove(x).unwrap_or_default();
        for (yid, eids) in adj {
            for eid in &eids {
                self.edges.remove(eid);
            }
            if yid != *x {
                if let Some(yadj) = self.adjacency.get_mut(&yid) {
                    yadj.remove(x);
                }
            }
        }
        self.nodes.remove(x);
    }

    pub fn remove_nodes<'a>(&mut self, xs: impl IntoIterator<Item = &'a Id>) {
        for x in xs {
            self.remove_node(x);
        }
    }

    pub fn get_node(&self, xid: &Id) -> Option<&Node> {
        self.nodes.get(xid)
    }

    pub fn get_node_mut(&mut self, xid: &Id) -> Option<&mut Node> {
        self.nodes.get_mut(xid)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_ids(&self) -> Vec<Id> {
        self.nodes.keys().cloned().collect()
    }

    pub fn contains(&self, xid: &Id) -> bool {
        self.nodes.contains_key(xid)
    }

    /// A uniformly random node id, or `None` on a null graph.
    pub fn choose_node(&self, rng: &mut impl Rng) -> Option<Id> {
        self.nodes.keys().choose(rng).cloned()
    }

    /// `k` distinct node ids sampled uniformly without replacement.
    pub fn sample_nodes(&self, k: usize, rng: &mut impl Rng) -> Result<Vec<Id>> {
        if k > self.order() {
            return Err(Error::Domain(format!(
                "cannot sample {k} nodes from a graph with {} nodes",
                self.order()
            )));
        }
        Ok(self.nodes.keys().cloned().choose_multiple(rng, k))
    }

    /// Adds a link, creating bare endpoint nodes for any missing endpoint.
    ///
    /// No-op if a link with the same uid is already present.
    pub fn add_edge(&mut self, e: Link) {
        if self.edges.contains_key(e.uid()) {
            return;
        }
        self.add_node(Node::new(e.xid().clone()));
        self.add_node(Node::new(e.yid().clone()));

        let (uid, xid, yid) = (e.uid().clone(), e.xid().clone(), e.yid().clone());
        if let Some(xadj) = self.adjacency.get_mut(&xid) {
            xadj.entry(yid.clone()).or_default().insert(uid.clone());
        }
        if let Some(yadj) = self.adjacency.get_mut(&yid) {
            yadj.entry(xid).or_default().insert(uid.clone());
        }
        self.edges.insert(uid, e);
    }

    pub fn add_edges(&mut self, es: impl IntoIterator<Item = Link>) {
        for e in es {
            self.add_edge(e);
        }
    }

    /// Removes a link and its adjacency entries. Endpoint nodes stay.
    pub fn remove_edge(&mut self, e: &Id) {
        let Some(link) = self.edges.remove(e) else {
            return;
        };
        self.unindex(link.xid(), link.yid(), e);
        self.unindex(link.yid(), link.xid(), e);
    }

    fn unindex(&mut self, from: &Id, to: &Id, eid: &Id) {
        if let Some(adj) = self.adjacency.get_mut(from) {
            if let Some(eids) = adj.get_mut(to) {
                eids.remove(eid);
                if eids.is_empty() {
                    adj.remove(to);
                }
            }
        }
    }

    pub fn remove_edges<'a>(&mut self, es: impl IntoIterator<Item = &'a Id>) {
        for e in es {
            self.remove_edge(e);
        }
    }

    pub fn get_edge(&self, eid: &Id) -> Option<&Link> {
        self.edges.get(eid)
    }

    pub fn get_edge_mut(&mut self, eid: &Id) -> Option<&mut Link> {
        self.edges.get_mut(eid)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Link> {
        self.edges.values()
    }

    pub fn edge_ids(&self) -> Vec<Id> {
        self.edges.keys().cloned().collect()
    }

    pub fn contains_edge(&self, eid: &Id) -> bool {
        self.edges.contains_key(eid)
    }

    /// A uniformly random link id, or `None` on an edgeless graph.
    pub fn choose_edge(&self, rng: &mut impl Rng) -> Option<Id> {
        self.edges.keys().choose(rng).cloned()
    }

    /// `k` distinct link ids sampled uniformly without replacement.
    pub fn sample_edges(&self, k: usize, rng: &mut impl Rng) -> Result<Vec<Id>> {
        if k > self.size() {
            return Err(Error::Domain(format!(
                "cannot sample {k} edges from a graph with {} edges",
                self.size()
            )));
        }
        Ok(self.edges.keys().cloned().choose_multiple(rng, k))
    }

    /// The (possibly empty) set of links between `x` and `y`, in either
    /// stored orientation.
    pub fn get_edges_between(&self, x: &Id, y: &Id) -> Result<Vec<&Link>> {
        let adj = self.require(x)?;
        if !self.nodes.contains_key(y) {
            return Err(Error::NodeNotFound(y.clone()));
        }
        let mut out = Vec::new();
        if let Some(eids) = adj.get(y) {
            for eid in eids {
                if let Some(link) = self.edges.get(eid) {
                    out.push(link);
                }
            }
        }
        Ok(out)
    }

    /// Ids of the nodes adjacent to `x`.
    pub fn adjacent(&self, x: &Id) -> Result<Vec<Id>> {
        Ok(self.require(x)?.keys().cloned().collect())
    }

    /// Ids of the links incident to `x`.
    pub fn incident(&self, x: &Id) -> Result<Vec<Id>> {
        Ok(self
            .require(x)?
            .values()
            .flat_map(|eids| eids.iter().cloned())
            .collect())
    }

    /// Whether `y` is adjacent to `x`. False if either node is absent.
    pub fn neighbors(&self, x: &Id, y: &Id) -> bool {
        if !self.nodes.contains_key(x) || !self.nodes.contains_key(y) {
            return false;
        }
        self.adjacency.get(x).is_some_and(|adj| adj.contains_key(y))
    }

    /// Number of links incident to `x`.
    pub fn degree(&self, x: &Id) -> Result<usize> {
        Ok(self.require(x)?.values().map(|eids| eids.len()).sum())
    }

    fn require(&self, x: &Id) -> Result<&IdMap<IdSet>> {
        self.adjacency
            .get(x)
            .ok_or_else(|| Error::NodeNotFound(x.clone()))
    }

    /// Merges the endpoints of link `e` into its `x` endpoint.
    ///
    /// The `y` endpoint is removed and its other incident links are
    /// re-created with the same uid and data but the surviving endpoint.
    /// Links between the two merging endpoints (and loops on the removed
    /// node) would collapse into self-loops, so they are dropped instead.
    /// The surviving node's `data[key]` accumulates the set of original
    /// node ids folded into it, defaulting each endpoint to its own
    /// singleton; callers should reserve `key` for this method.
    ///
    /// No-op if `e` is absent. Contracting a self-loop just removes it.
    pub fn contract_edge(&mut self, e: &Id, key: &str) {
        let Some(link) = self.edges.get(e) else {
            return;
        };
        let xid = link.xid().clone();
        let yid = link.yid().clone();

        if xid == yid {
            self.remove_edge(e);
            return;
        }

        let xset = self.membership(&xid, key);
        let yset = self.membership(&yid, key);
        let merged: IdSet = xset.union(&yset).cloned().collect();
        if let Some(x) = self.nodes.get_mut(&xid) {
            x.set(key, merged);
        }

        self.remove_edge(e);

        let eids: Vec<Id> = self
            .adjacency
            .get(&yid)
            .map(|adj| adj.values().flat_map(|eids| eids.iter().cloned()).collect())
            .unwrap_or_default();
        for eid in eids {
            let Some(f) = self.edges.get(&eid).cloned() else {
                continue;
            };
            self.remove_edge(&eid);
            let zid = f.other(&yid).clone();
            if zid == xid || zid == yid {
                continue;
            }
            self.add_edge(Link::with_data(f.uid, xid.clone(), zid, f.data));
        }

        self.remove_node(&yid);
    }

    fn membership(&self, xid: &Id, key: &str) -> IdSet {
        self.nodes
            .get(xid)
            .and_then(|x| x.get(key))
            .and_then(Value::as_id_set)
            .cloned()
            .unwrap_or_else(|| {
                let mut s = IdSet::default();
                s.insert(xid.clone());
                s
            })
    }

    /// Ids of all self-loop links.
    pub fn loops(&self) -> Vec<Id> {
        self.edges
            .values()
            .filter(|e| e.is_loop())
            .map(|e| e.uid().clone())
            .collect()
    }

    pub fn has_loops(&self) -> bool {
        self.edges.values().any(Link::is_loop)
    }

    pub fn remove_loops(&mut self) {
        let loops = self.loops();
        self.remove_edges(&loops);
    }

    pub fn has_parallel_edges(&self) -> bool {
        self.adjacency
            .values()
            .any(|adj| adj.values().any(|eids| eids.len() > 1))
    }

    /// Whether the graph has no loops and no parallel links.
    pub fn is_simple(&self) -> bool {
        !self.has_loops() && !self.has_parallel_edges()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
    }

    /// The directed version of this graph: every undirected link becomes a
    /// pair of antiparallel links sharing its data, with ids derived by
    /// tagging the original (`0` forward, `1` reverse).
    pub fn to_directed(&self) -> DiGraph {
        let mut d = DiGraph::new();
        for x in self.nodes.values() {
            d.add_node(x.clone());
        }
        for e in self.edges.values() {
            d.add_edge(Link::with_data(
                e.uid().clone().tagged(0),
                e.xid().clone(),
                e.yid().clone(),
                e.data.clone(),
            ));
            d.add_edge(Link::with_data(
                e.uid().clone().tagged(1),
                e.yid().clone(),
                e.xid().clone(),
                e.data.clone(),
            ));
        }
        d
    }

    pub fn to_undirected(&self) -> Graph {
        self.clone()
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        false
    }

    pub fn is_undirected(&self) -> bool {
        true
    }
}
