use remora::build::{
    complete_bipartite_graph, complete_graph, create_links, create_nodes,
    create_nodes_with_data, cycle_digraph, cycle_graph, path_digraph, path_graph,
    petersen_graph, random_bipartite_graph, random_digraph, random_graph,
};
use remora::graphlib::collections::DataMap;
use remora::graphlib::{Error, Id};

#[test]
fn create_helpers_build_entities() {
    let nodes = create_nodes(["a", "b"]);
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].uid(), &Id::from("a"));

    let mut data = DataMap::default();
    data.insert("weight".to_string(), 3.0.into());
    let nodes = create_nodes_with_data([(0, data)]);
    assert!(nodes[0].get("weight").is_some());

    let links = create_links([(0, "a", "b")]);
    assert_eq!(links[0].xid(), &Id::from("a"));
    assert_eq!(links[0].yid(), &Id::from("b"));
}

#[test]
fn cycle_graphs_have_matching_order_and_size() {
    let g = cycle_graph(5).unwrap();
    assert_eq!(g.order(), 5);
    assert_eq!(g.size(), 5);
    for x in g.node_ids() {
        assert_eq!(g.degree(&x).unwrap(), 2);
    }

    let d = cycle_digraph(5, false).unwrap();
    assert!(d.neighbors(&Id::from(4), &Id::from(0)));

    let r = cycle_digraph(5, true).unwrap();
    assert!(r.neighbors(&Id::from(0), &Id::from(4)));

    assert!(matches!(cycle_graph(2), Err(Error::Domain(_))));
}

#[test]
fn path_graphs_have_one_fewer_edge_than_nodes() {
    let g = path_graph(6).unwrap();
    assert_eq!(g.order(), 6);
    assert_eq!(g.size(), 5);

    let d = path_digraph(4, true).unwrap();
    assert!(d.neighbors(&Id::from(1), &Id::from(0)));
    assert!(!d.neighbors(&Id::from(0), &Id::from(1)));

    assert!(matches!(path_graph(1), Err(Error::Domain(_))));
}

#[test]
fn complete_graph_has_all_pairs() {
    let g = complete_graph(5).unwrap();
    assert_eq!(g.order(), 5);
    assert_eq!(g.size(), 10);
    for x in g.node_ids() {
        for y in g.node_ids() {
            if x != y {
                assert!(g.neighbors(&x, &y));
            }
        }
    }
    assert!(matches!(complete_graph(0), Err(Error::Domain(_))));
}

#[test]
fn random_graphs_are_simple_with_exact_size() {
    let g = random_graph(10, 20).unwrap();
    assert_eq!(g.order(), 10);
    assert_eq!(g.size(), 20);
    assert!(g.is_simple());

    let d = random_digraph(6, 30).unwrap();
    assert_eq!(d.size(), 30);
    assert!(d.is_simple());

    assert!(matches!(random_graph(4, 7), Err(Error::Domain(_))));
    assert!(matches!(random_digraph(4, 13), Err(Error::Domain(_))));
}

#[test]
fn complete_bipartite_sides_never_touch_internally() {
    let g = complete_bipartite_graph(3, 4).unwrap();
    assert_eq!(g.order(), 7);
    assert_eq!(g.size(), 12);
    for x in 0..3 {
        for y in 0..3 {
            assert!(!g.neighbors(&Id::from(x), &Id::from(y)));
        }
    }
    for x in 0..3 {
        for y in 3..7 {
            assert!(g.neighbors(&Id::from(x), &Id::from(y)));
        }
    }
    assert!(matches!(complete_bipartite_graph(0, 3), Err(Error::Domain(_))));
}

#[test]
fn random_bipartite_links_cross_sides_only() {
    let g = random_bipartite_graph(4, 5, 12).unwrap();
    assert_eq!(g.order(), 9);
    assert_eq!(g.size(), 12);
    for e in g.edges() {
        let (Id::Int(x), Id::Int(y)) = (e.xid(), e.yid()) else {
            panic!("builder ids are integers");
        };
        assert!(*x < 4);
        assert!(*y >= 4);
    }
    assert!(matches!(
        random_bipartite_graph(2, 2, 5),
        Err(Error::Domain(_))
    ));
}

#[test]
fn petersen_graph_is_three_regular() {
    let g = petersen_graph();
    assert_eq!(g.order(), 10);
    assert_eq!(g.size(), 15);
    assert!(g.is_simple());
    for x in g.node_ids() {
        assert_eq!(g.degree(&x).unwrap(), 3);
    }
}
