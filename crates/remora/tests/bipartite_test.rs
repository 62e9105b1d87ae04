use remora::bipartite::is_bipartite;
use remora::build::{
    complete_bipartite_graph, complete_graph, cycle_graph, path_graph, petersen_graph,
};
use remora::graphlib::{Error, Graph, Id, Link, Node};

#[test]
fn odd_cycles_are_not_bipartite_but_paths_are() {
    assert!(!is_bipartite(&cycle_graph(5).unwrap()).unwrap());
    assert!(is_bipartite(&path_graph(5).unwrap()).unwrap());
}

#[test]
fn even_cycles_are_bipartite() {
    assert!(is_bipartite(&cycle_graph(6).unwrap()).unwrap());
}

#[test]
fn complete_bipartite_graphs_pass_and_petersen_fails() {
    assert!(is_bipartite(&complete_bipartite_graph(3, 4).unwrap()).unwrap());
    // The Petersen graph contains 5-cycles.
    assert!(!is_bipartite(&petersen_graph()).unwrap());
}

#[test]
fn every_component_must_be_two_colorable() {
    // A bipartite path plus a disjoint triangle: the triangle decides.
    let mut g = path_graph(4).unwrap();
    g.add_edges([
        Link::new(10, 10, 11),
        Link::new(11, 11, 12),
        Link::new(12, 12, 10),
    ]);
    assert!(!is_bipartite(&g).unwrap());
}

#[test]
fn directed_and_tiny_graphs_are_domain_errors() {
    let d = cycle_graph(3).unwrap().to_directed();
    assert!(matches!(is_bipartite(&d), Err(Error::Domain(_))));

    let mut g = Graph::new();
    g.add_node(Node::new(0));
    assert!(matches!(is_bipartite(&g), Err(Error::Domain(_))));
}

#[test]
fn removing_a_node_from_a_complete_graph_shrinks_both_counts() {
    let mut g = complete_graph(4).unwrap();
    assert_eq!(g.order(), 4);
    assert_eq!(g.size(), 6);

    g.remove_node(&Id::from(0));
    assert_eq!(g.order(), 3);
    assert_eq!(g.size(), 3);
}
