use remora::build::{create_links, create_nodes, cycle_digraph, cycle_graph};
use remora::connectivity::{
    connected, connected_components, connectivity, strong_connectivity,
    strongly_connected, strongly_connected_components,
};
use remora::graphlib::collections::IdSet;
use remora::graphlib::{DiGraph, Id, Link, Node};

#[test]
fn components_partition_an_undirected_graph() {
    let mut g = cycle_graph(4).unwrap();
    g.add_node(Node::new(10));
    g.add_edge(Link::new(20, 11, 12));

    let components = connected_components(&g, None).unwrap();
    assert_eq!(components.len(), 3);
    assert_eq!(connectivity(&g, None).unwrap(), 3);
    assert!(!connected(&g, None).unwrap());

    let total: usize = components.iter().map(IdSet::len).sum();
    assert_eq!(total, g.order());
}

#[test]
fn weak_connectivity_ignores_direction() {
    // 0 -> 1 <- 2 is weakly connected but not strongly.
    let d = DiGraph::from_parts(
        create_nodes(0..3),
        create_links([(0, 0, 1), (1, 2, 1)]),
    );
    assert!(connected(&d, None).unwrap());
    assert!(!strongly_connected(&d, None).unwrap());
}

#[test]
fn a_directed_cycle_is_one_strong_component() {
    let d = cycle_digraph(5, false).unwrap();
    let components = strongly_connected_components(&d, None).unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].len(), 5);
    assert!(strongly_connected(&d, None).unwrap());
}

#[test]
fn tail_off_a_cycle_forms_its_own_component() {
    // 0 -> 1 -> 2 -> 0 with 2 -> 3 hanging off the cycle.
    let d = DiGraph::from_parts(
        create_nodes(0..4),
        create_links([(0, 0, 1), (1, 1, 2), (2, 2, 0), (3, 2, 3)]),
    );

    let mut components = strongly_connected_components(&d, None).unwrap();
    components.sort_by_key(IdSet::len);
    assert_eq!(components.len(), 2);

    let tail: IdSet = [Id::from(3)].into_iter().collect();
    let cycle: IdSet = (0..3).map(Id::from).collect();
    assert_eq!(components[0], tail);
    assert_eq!(components[1], cycle);

    // The cycle also rules out any topological ordering.
    assert!(remora::dag::topological_sort(&d).unwrap().is_none());
}

#[test]
fn antiparallel_pairs_are_mutually_reachable() {
    let d = DiGraph::from_parts(
        create_nodes(0..4),
        create_links([(0, 0, 1), (1, 1, 0), (2, 2, 3), (3, 3, 2), (4, 1, 2)]),
    );
    assert_eq!(strong_connectivity(&d, None).unwrap(), 2);
}

#[test]
fn ignored_nodes_are_left_out_of_every_component() {
    let d = cycle_digraph(5, false).unwrap();
    let ignore: IdSet = [Id::from(0)].into_iter().collect();
    let components = strongly_connected_components(&d, Some(&ignore)).unwrap();
    // Breaking the cycle at 0 leaves the remaining path as singletons.
    assert_eq!(components.len(), 4);
    for c in &components {
        assert_eq!(c.len(), 1);
        assert!(!c.contains(&Id::from(0)));
    }
}
