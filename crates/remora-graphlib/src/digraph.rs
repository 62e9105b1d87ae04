//! Directed multigraph with forward and reverse adjacency indices.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::collections::{IdMap, IdSet};
use crate::{Error, Graph, Id, Link, Node, Result};

/// A directed multigraph.
///
/// Two adjacency indices are kept: `forward` (successors, keyed by link
/// source) and `reverse` (predecessors, keyed by link target). Every stored
/// link appears in exactly one slot of each. The `co`-prefixed queries
/// mirror their forward counterparts over the reverse index. Mutation
/// semantics match [`Graph`]: silent no-ops on duplicates and absences,
/// [`Error::NodeNotFound`] on lookups against absent nodes.
#[derive(Clone, Debug, Default)]
pub struct DiGraph {
    nodes: IdMap<Node>,
    edges: IdMap<Link>,
    forward: IdMap<IdMap<IdSet>>,
    reverse: IdMap<IdMap<IdSet>>,
}

impl DiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Link>,
    ) -> Self {
        let mut d = Self::new();
        d.add_nodes(nodes);
        d.add_edges(edges);
        d
    }

    pub fn is_null(&self) -> bool {
        self.order() == 0
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn add_node(&mut self, x: Node) {
        if self.nodes.contains_key(x.uid()) {
            return;
        }
        self.forward.insert(x.uid().clone(), IdMap::default());
        self.reverse.insert(x.uid().clone(), IdMap::default());
        self.nodes.insert(x.uid().clone(), x);
    }

    pub fn add_nodes(&mut self, xs: impl IntoIterator<Item = Node>) {
        for x in xs {
            self.add_node(x);
        }
    }

    /// Removes a node and all links incident to it in either direction.
    pub fn remove_node(&mut self, x: &Id) {
        if !self.nodes.contains_key(x) {
            return;
        }
        let out = self.forward.remove(x).unwrap_or_default();
        for (yid, eids) in out {
            for eid in &eids {
                self.edges.remove(eid);
            }
            if let Some(yrev) = self.reverse.get_mut(&yid) {
                yrev.remove(x);
            }
        }
        let inc = self.reverse.remove(x).unwrap_or_default();
        for (yid, eids) in inc {
            for eid in &eids {
                self.edges.remove(eid);
            }
            if let Some(yfwd) = self.forward.get_mut(&yid) {
                yfwd.remove(x);
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

    /// Adds a link from `xid` to `yid`, creating bare endpoint nodes for any
    /// missing endpoint. No-op if a link with the same uid is present.
    pub fn add_edge(&mut self, e: Link) {
        if self.edges.contains_key(e.uid()) {
            return;
        }
        self.add_node(Node::new(e.xid().clone()));
        self.add_node(Node::new(e.yid().clone()));

        let (uid, xid, yid) = (e.uid().clone(), e.xid().clone(), e.yid().clone());
        if let Some(fwd) = self.forward.get_mut(&xid) {
            fwd.entry(yid.clone()).or_default().insert(uid.clone());
        }
        if let Some(rev) = self.reverse.get_mut(&yid) {
            rev.entry(xid).or_default().insert(uid.clone());
        }
        self.edges.insert(uid, e);
    }

    pub fn add_edges(&mut self, es: impl IntoIterator<Item = Link>) {
        for e in es {
            self.add_edge(e);
        }
    }

    pub fn remove_edge(&mut self, e: &Id) {
        let Some(link) = self.edges.remove(e) else {
            return;
        };
        if let Some(fwd) = self.forward.get_mut(link.xid()) {
            if let Some(eids) = fwd.get_mut(link.yid()) {
                eids.remove(e);
                if eids.is_empty() {
                    fwd.remove(link.yid());
                }
            }
        }
        if let Some(rev) = self.reverse.get_mut(link.yid()) {
            if let Some(eids) = rev.get_mut(link.xid()) {
                eids.remove(e);
                if eids.is_empty() {
                    rev.remove(link.xid());
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

    /// The (possibly empty) set of links from `x` to `y`. Direction matters.
    pub fn get_edges_between(&self, x: &Id, y: &Id) -> Result<Vec<&Link>> {
        let fwd = self.require(&self.forward, x)?;
        if !self.nodes.contains_key(y) {
            return Err(Error::NodeNotFound(y.clone()));
        }
        let mut out = Vec::new();
        if let Some(eids) = fwd.get(y) {
            for eid in eids {
                if let Some(link) = self.edges.get(eid) {
                    out.push(link);
                }
            }
        }
        Ok(out)
    }

    /// Successor ids of `x`.
    pub fn adjacent(&self, x: &Id) -> Result<Vec<Id>> {
        Ok(self.require(&self.forward, x)?.keys().cloned().collect())
    }

    /// Predecessor ids of `x`.
    pub fn coadjacent(&self, x: &Id) -> Result<Vec<Id>> {
        Ok(self.require(&self.reverse, x)?.keys().cloned().collect())
    }

    /// Ids of the links leaving `x`.
    pub fn incident(&self, x: &Id) -> Result<Vec<Id>> {
        Ok(self
            .require(&self.forward, x)?
            .values()
            .flat_map(|eids| eids.iter().cloned())
            .collect())
    }

    /// Ids of the links entering `x`.
    pub fn coincident(&self, x: &Id) -> Result<Vec<Id>> {
        Ok(self
            .require(&self.reverse, x)?
            .values()
            .flat_map(|eids| eids.iter().cloned())
            .collect())
    }

    /// Whether there is a link from `x` to `y`. False if either is absent.
    pub fn neighbors(&self, x: &Id, y: &Id) -> bool {
        if !self.nodes.contains_key(x) || !self.nodes.contains_key(y) {
            return false;
        }
        self.forward.get(x).is_some_and(|fwd| fwd.contains_key(y))
    }

    /// Whether there is a link from `y` to `x`. False if either is absent.
    pub fn coneighbors(&self, x: &Id, y: &Id) -> bool {
        if !self.nodes.contains_key(x) || !self.nodes.contains_key(y) {
            return false;
        }
        self.reverse.get(x).is_some_and(|rev| rev.contains_key(y))
    }

    /// Number of links leaving `x`.
    pub fn degree(&self, x: &Id) -> Result<usize> {
        Ok(self
            .require(&self.forward, x)?
            .values()
            .map(|eids| eids.len())
            .sum())
    }

    /// Number of links entering `x`.
    pub fn codegree(&self, x: &Id) -> Result<usize> {
        Ok(self
            .require(&self.reverse, x)?
            .values()
            .map(|eids| eids.len())
            .sum())
    }

    fn require<'a>(&self, index: &'a IdMap<IdMap<IdSet>>, x: &Id) -> Result<&'a IdMap<IdSet>> {
        index.get(x).ok_or_else(|| Error::NodeNotFound(x.clone()))
    }

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
        self.forward
            .values()
            .any(|fwd| fwd.values().any(|eids| eids.len() > 1))
    }

    pub fn is_simple(&self) -> bool {
        !self.has_loops() && !self.has_parallel_edges()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.forward.clear();
        self.reverse.clear();
    }

    /// Reverses every link in place, swapping the two indices wholesale.
    pub fn transpose(&mut self) {
        for e in self.edges.values_mut() {
            std::mem::swap(&mut e.xid, &mut e.yid);
        }
        std::mem::swap(&mut self.forward, &mut self.reverse);
    }

    /// The transposed copy of this graph; `self` is untouched.
    pub fn transposed(&self) -> DiGraph {
        let mut d = self.clone();
        d.transpose();
        d
    }

    /// Drops direction, keeping one undirected link per stored link.
    ///
    /// Antiparallel pairs become parallel undirected links; all ids and
    /// data are preserved.
    pub fn to_undirected(&self) -> Graph {
        let mut g = Graph::new();
        for x in self.nodes.values() {
            g.add_node(x.clone());
        }
        for e in self.edges.values() {
            g.add_edge(e.clone());
        }
        g
    }

    pub fn to_directed(&self) -> DiGraph {
        self.clone()
    }

    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        true
    }

    pub fn is_undirected(&self) -> bool {
        false
    }
}
