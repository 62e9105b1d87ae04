use remora::build::{cycle_digraph, path_graph};
use remora::graphlib::collections::IdSet;
use remora::graphlib::{Error, Graph, Id, Link, Node};
use remora::traversal::{
    breadth_first_search, depth_first_search, depth_first_search_recursive, graph_search,
    SearchMethod,
};

fn two_components() -> Graph {
    Graph::from_parts(
        (0..6).map(Node::new),
        [
            Link::new(0, 0, 1),
            Link::new(1, 1, 2),
            Link::new(2, 2, 0),
            Link::new(3, 3, 4),
        ],
    )
}

#[test]
fn bfs_and_dfs_visit_the_component_of_the_start() {
    let g = two_components();
    let expected: IdSet = (0..3).map(Id::from).collect();

    let bfs = breadth_first_search(&g, &Id::from(0), None).unwrap();
    let dfs = depth_first_search(&g, &Id::from(0), None).unwrap();
    let rec = depth_first_search_recursive(&g, &Id::from(0), None).unwrap();

    assert_eq!(bfs, expected);
    assert_eq!(dfs, expected);
    assert_eq!(rec, expected);

    let lone: IdSet = [Id::from(5)].into_iter().collect();
    assert_eq!(breadth_first_search(&g, &Id::from(5), None).unwrap(), lone);
}

#[test]
fn traversal_follows_direction_on_a_digraph() {
    let d = cycle_digraph(4, false).unwrap();
    let all: IdSet = (0..4).map(Id::from).collect();
    assert_eq!(breadth_first_search(&d, &Id::from(2), None).unwrap(), all);

    let mut d = d;
    d.remove_edge(&Id::from(3));
    // 3 -> 0 removed: nothing is reachable from 3 but itself.
    let lone: IdSet = [Id::from(3)].into_iter().collect();
    assert_eq!(depth_first_search(&d, &Id::from(3), None).unwrap(), lone);
}

#[test]
fn absent_start_fails() {
    let g = two_components();
    let missing = Id::from(42);
    assert_eq!(
        breadth_first_search(&g, &missing, None),
        Err(Error::NodeNotFound(missing.clone()))
    );
    assert_eq!(
        depth_first_search(&g, &missing, None),
        Err(Error::NodeNotFound(missing))
    );
}

#[test]
fn ignored_nodes_block_traversal() {
    let g = path_graph(5).unwrap();
    let ignore: IdSet = [Id::from(2)].into_iter().collect();
    let reached = breadth_first_search(&g, &Id::from(0), Some(&ignore)).unwrap();
    let expected: IdSet = [Id::from(0), Id::from(1)].into_iter().collect();
    assert_eq!(reached, expected);
}

#[test]
fn graph_search_partitions_the_nodes() {
    let g = two_components();
    for method in [SearchMethod::Bfs, SearchMethod::Dfs] {
        let components = graph_search(&g, method, None).unwrap();
        assert_eq!(components.len(), 3);
        let total: usize = components.iter().map(IdSet::len).sum();
        assert_eq!(total, g.order());
        for (i, a) in components.iter().enumerate() {
            for b in &components[i + 1..] {
                assert!(a.is_disjoint(b));
            }
        }
    }
}

#[test]
fn graph_search_skips_ignored_nodes_entirely() {
    let g = two_components();
    let ignore: IdSet = [Id::from(5)].into_iter().collect();
    let components = graph_search(&g, SearchMethod::Bfs, Some(&ignore)).unwrap();
    assert_eq!(components.len(), 2);
    assert!(components.iter().all(|c| !c.contains(&Id::from(5))));
}
