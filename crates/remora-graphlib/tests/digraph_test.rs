use rand::thread_rng;
use remora_graphlib::{DiGraph, Error, Id, Link, Node};

fn chain() -> DiGraph {
    DiGraph::from_parts(
        (0..3).map(Node::new),
        [Link::new(0, 0, 1), Link::new(1, 1, 2)],
    )
}

#[test]
fn forward_and_reverse_indices_mirror_each_other() {
    let d = chain();
    for x in d.node_ids() {
        for y in d.adjacent(&x).unwrap() {
            assert!(d.coadjacent(&y).unwrap().contains(&x));
        }
        for y in d.coadjacent(&x).unwrap() {
            assert!(d.adjacent(&y).unwrap().contains(&x));
        }
    }
}

#[test]
fn direction_matters_for_queries() {
    let d = chain();
    assert!(d.neighbors(&Id::from(0), &Id::from(1)));
    assert!(!d.neighbors(&Id::from(1), &Id::from(0)));
    assert!(d.coneighbors(&Id::from(1), &Id::from(0)));

    assert_eq!(d.degree(&Id::from(1)).unwrap(), 1);
    assert_eq!(d.codegree(&Id::from(1)).unwrap(), 1);
    assert_eq!(d.degree(&Id::from(2)).unwrap(), 0);
    assert_eq!(d.codegree(&Id::from(0)).unwrap(), 0);

    assert_eq!(d.get_edges_between(&Id::from(0), &Id::from(1)).unwrap().len(), 1);
    assert!(d.get_edges_between(&Id::from(1), &Id::from(0)).unwrap().is_empty());
}

#[test]
fn remove_node_drops_links_in_both_directions() {
    let mut d = chain();
    d.remove_node(&Id::from(1));
    assert_eq!(d.order(), 2);
    assert_eq!(d.size(), 0);
}

#[test]
fn lookups_on_absent_nodes_fail() {
    let d = chain();
    let missing = Id::from(9);
    assert_eq!(d.adjacent(&missing), Err(Error::NodeNotFound(missing.clone())));
    assert_eq!(d.coincident(&missing), Err(Error::NodeNotFound(missing)));
}

#[test]
fn choose_and_sample_draw_from_the_digraph() {
    let mut rng = thread_rng();
    let d = chain();

    let x = d.choose_node(&mut rng).unwrap();
    assert!(d.contains(&x));
    let e = d.choose_edge(&mut rng).unwrap();
    assert!(d.contains_edge(&e));

    let nodes = d.sample_nodes(3, &mut rng).unwrap();
    assert_eq!(nodes.len(), 3);
    assert!(matches!(d.sample_edges(3, &mut rng), Err(Error::Domain(_))));
}

#[test]
fn transpose_reverses_every_link() {
    let mut d = chain();
    let t = d.transposed();
    assert!(t.neighbors(&Id::from(1), &Id::from(0)));
    assert!(t.neighbors(&Id::from(2), &Id::from(1)));
    assert!(!t.neighbors(&Id::from(0), &Id::from(1)));
    // The copy left the original alone; in-place transpose agrees with it.
    assert!(d.neighbors(&Id::from(0), &Id::from(1)));
    d.transpose();
    assert!(d.neighbors(&Id::from(1), &Id::from(0)));
    assert_eq!(d.size(), t.size());
}

#[test]
fn transpose_twice_is_identity() {
    let before = chain();
    let mut d = before.clone();
    d.transpose();
    d.transpose();
    for e in before.edges() {
        let back = d.get_edge(e.uid()).unwrap();
        assert_eq!(back.xid(), e.xid());
        assert_eq!(back.yid(), e.yid());
    }
}

#[test]
fn to_undirected_keeps_links_and_ids() {
    let mut d = chain();
    d.add_edge(Link::new(2, 1, 0));
    let g = d.to_undirected();
    assert_eq!(g.order(), 3);
    assert_eq!(g.size(), 3);
    // Antiparallel links become parallel undirected links.
    assert!(g.has_parallel_edges());
    assert!(g.contains_edge(&Id::from(2)));
}
