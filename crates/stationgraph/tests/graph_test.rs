use stationgraph::{Graph, Station};

fn station(id: i64, latitude: f64, longitude: f64) -> Station {
    Station::new(id, latitude, longitude)
}

fn graph_with_vertices(stations: &[Station]) -> Graph {
    let mut g = Graph::new();
    for s in stations {
        g.insert_vertex(*s);
    }
    g
}

#[test]
fn edge_equality_ignores_endpoint_order() {
    let mut g1 = graph_with_vertices(&[station(0, 0.0, 0.0), station(1, 0.0, 1.0)]);
    let mut g2 = graph_with_vertices(&[station(0, 0.0, 0.0), station(1, 0.0, 1.0)]);
    let e1 = g1.insert_edge(0, 1).unwrap();
    let e2 = g2.insert_edge(1, 0).unwrap();

    assert_eq!(g1.edge(e1), g2.edge(e2));
}

#[test]
fn edges_with_different_endpoints_are_not_equal() {
    let mut g = graph_with_vertices(&[
        station(0, 0.0, 0.0),
        station(1, 0.0, 1.0),
        station(3, 1.0, 0.0),
    ]);
    let e1 = g.insert_edge(0, 1).unwrap();
    let e2 = g.insert_edge(0, 3).unwrap();

    assert_ne!(g.edge(e1), g.edge(e2));
}

#[test]
fn duplicate_vertex_insert_is_a_no_op_and_keeps_the_first_coordinates() {
    let mut g = Graph::new();
    g.insert_vertex(station(7, 1.0, 2.0));
    g.insert_vertex(station(7, 9.0, 9.0));

    assert_eq!(g.size(), 1);
    let vertex = g.vertex(7).unwrap();
    assert_eq!(vertex.station().latitude, 1.0);
    assert_eq!(vertex.station().longitude, 2.0);
}

#[test]
fn self_loop_insert_never_adds_an_edge_or_adjacency_entry() {
    let mut g = graph_with_vertices(&[station(0, 0.0, 0.0)]);

    assert!(g.insert_edge(0, 0).is_none());
    assert!(g.insert_edge_deduplicating(0, 0).is_none());
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.vertex(0).unwrap().degree(), 0);
    assert_eq!(g.total_distance(), 0.0);
}

#[test]
fn edge_insert_with_an_absent_endpoint_is_a_no_op() {
    let mut g = graph_with_vertices(&[station(0, 0.0, 0.0)]);

    assert!(g.insert_edge(0, 42).is_none());
    assert!(g.insert_edge(42, 0).is_none());
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn deduplicating_insert_keeps_a_single_edge_per_unordered_pair() {
    let mut g = graph_with_vertices(&[station(0, 0.0, 0.0), station(1, 0.0, 1.0)]);

    assert!(g.insert_edge_deduplicating(0, 1).is_some());
    assert!(g.insert_edge_deduplicating(0, 1).is_none());
    assert!(g.insert_edge_deduplicating(1, 0).is_none());

    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.vertex(0).unwrap().degree(), 1);
    assert_eq!(g.vertex(1).unwrap().degree(), 1);
}

#[test]
fn raw_insert_does_not_scan_for_duplicates() {
    let mut g = graph_with_vertices(&[station(0, 0.0, 0.0), station(1, 0.0, 1.0)]);

    assert!(g.insert_edge(0, 1).is_some());
    assert!(g.insert_edge(0, 1).is_some());
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.vertex(0).unwrap().degree(), 2);
}

#[test]
fn clone_is_independent_of_the_source_in_both_directions() {
    let mut g = graph_with_vertices(&[station(0, 0.0, 0.0), station(1, 0.0, 1.0)]);
    g.insert_edge_deduplicating(0, 1);

    let mut copy = g.clone();
    copy.insert_vertex(station(99, 5.0, 5.0));
    assert_eq!(g.size(), 2);
    assert_eq!(copy.size(), 3);

    g.insert_vertex(station(42, 4.0, 4.0));
    assert_eq!(copy.size(), 3);

    copy.remove_vertex(0);
    assert!(g.vertex(0).is_some());
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn total_distance_tracks_inserts_and_vertex_removal() {
    // 0-1 spans 5, 0-2 spans 3, 1-2 spans 4.
    let mut g = graph_with_vertices(&[
        station(0, 0.0, 0.0),
        station(1, 3.0, 4.0),
        station(2, 3.0, 0.0),
    ]);
    g.insert_edge_deduplicating(0, 1);
    g.insert_edge_deduplicating(0, 2);
    g.insert_edge_deduplicating(1, 2);
    assert_eq!(g.total_distance(), 12.0);

    g.remove_vertex(1);
    assert_eq!(g.total_distance(), 3.0);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.vertex(0).unwrap().degree(), 1);
    assert_eq!(g.vertex(2).unwrap().degree(), 1);
}

#[test]
fn removing_a_vertex_with_no_edges_only_drops_the_vertex() {
    let mut g = graph_with_vertices(&[station(0, 0.0, 0.0), station(1, 0.0, 1.0)]);
    g.remove_vertex(1);

    assert_eq!(g.size(), 1);
    assert_eq!(g.total_distance(), 0.0);
}

#[test]
fn removing_an_absent_id_is_a_no_op() {
    let mut g = graph_with_vertices(&[station(0, 0.0, 0.0)]);
    g.remove_vertex(42);
    assert_eq!(g.size(), 1);
}

#[test]
fn vertex_lookup_returns_none_for_unknown_ids() {
    let g = graph_with_vertices(&[station(0, 0.0, 0.0)]);
    assert!(g.vertex(1).is_none());
}

#[test]
fn are_adjacent_is_symmetric_and_respects_removal() {
    let mut g = graph_with_vertices(&[station(0, 0.0, 0.0), station(1, 0.0, 1.0)]);
    let edge = g.insert_edge_deduplicating(0, 1).unwrap();

    assert!(g.are_adjacent(0, 1));
    assert!(g.are_adjacent(1, 0));

    g.remove_edge(edge);
    assert!(!g.are_adjacent(0, 1));
    assert_eq!(g.total_distance(), 0.0);
}

#[test]
fn extremal_queries_return_none_on_an_empty_graph() {
    let g = Graph::new();
    assert!(g.northwest_most().is_none());
    assert!(g.southeast_most().is_none());
}

#[test]
fn extremal_queries_maximize_and_minimize_latitude_with_longitude_tiebreak() {
    let g = graph_with_vertices(&[
        station(1, 40.7, -74.0),
        station(2, 40.8, -74.1),
        station(3, 40.6, -73.9),
    ]);

    assert_eq!(g.northwest_most().unwrap().id(), 2);
    assert_eq!(g.southeast_most().unwrap().id(), 3);
}

#[test]
fn vertices_iterate_in_ascending_station_id_order() {
    let mut g = Graph::new();
    g.insert_vertex(station(30, 0.0, 0.0));
    g.insert_vertex(station(10, 0.0, 0.0));
    g.insert_vertex(station(20, 0.0, 0.0));

    let ids: Vec<i64> = g.station_ids().collect();
    assert_eq!(ids, vec![10, 20, 30]);
}
