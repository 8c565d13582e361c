//! Integration tests for the container contract: identity, idempotence,
//! incidence, extraction and the textual representation.

use arbor::{DiGraph, GraphError, VertexId};

#[test]
fn distinct_payloads_get_distinct_vertices() {
    let mut graph = DiGraph::new();
    let ids: Vec<VertexId> = (0..50).map(|payload| graph.add_vertex(payload)).collect();

    assert_eq!(graph.vertex_count(), 50);
    for (payload, &id) in (0..50).zip(&ids) {
        assert_eq!(graph.find_vertex(&payload), Some(id));
        assert_eq!(graph[id], payload);
    }
}

#[test]
fn reinsertion_returns_the_existing_vertex() {
    let mut graph = DiGraph::new();
    let first = graph.add_vertex("alex");
    let second = graph.add_vertex("alex");

    assert_eq!(first, second);
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn duplicate_edge_keeps_the_original_weight() {
    let mut graph = DiGraph::new();
    graph.add_vertex("a");
    graph.add_vertex("b");

    let edge = graph.add_edge(&"a", &"b", 3).unwrap();
    assert_eq!(graph.add_edge(&"a", &"b", 3), Ok(edge));
    assert_eq!(graph.add_edge(&"a", &"b", 1000), Ok(edge));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge(edge).weight(), 3);
}

#[test]
fn missing_endpoint_leaves_the_graph_untouched() {
    let mut graph = DiGraph::new();
    graph.add_vertex("a");
    graph.add_vertex("b");
    graph.add_edge(&"a", &"b", 1).unwrap();

    assert_eq!(graph.add_edge(&"a", &"zz", 1), Err(GraphError::VertexNotFound));
    assert_eq!(graph.add_edge(&"zz", &"b", 1), Err(GraphError::VertexNotFound));
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn insertion_order_is_preserved() {
    let mut graph = DiGraph::new();
    for name in ["c", "a", "b"] {
        graph.add_vertex(name);
    }
    graph.add_edge(&"b", &"c", 1).unwrap();
    graph.add_edge(&"a", &"c", 1).unwrap();

    let vertices: Vec<&&str> = graph.vertices().collect();
    assert_eq!(vertices, [&"c", &"a", &"b"]);

    let pairs: Vec<(&str, &str)> = graph
        .edges()
        .map(|edge| (graph[edge.source()], graph[edge.target()]))
        .collect();
    assert_eq!(pairs, [("b", "c"), ("a", "c")]);
}

#[test]
fn clear_makes_the_graph_indistinguishable_from_new() {
    let mut graph = DiGraph::new();
    graph.add_vertex("a");
    graph.add_vertex("b");
    graph.add_edge(&"a", &"b", 1).unwrap();

    graph.clear();

    assert!(graph.is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.find_vertex(&"a"), None);
    assert!(!graph.contains_vertex(&"b"));
    assert_eq!(graph.to_string(), "");
}

#[test]
fn display_matches_the_documented_shape() {
    let mut graph = DiGraph::new();
    graph.add_vertex("alex");
    graph.add_vertex("nathan");
    graph.add_vertex("dan");
    graph.add_vertex("duda");
    graph.add_edge(&"alex", &"nathan", 1).unwrap();
    graph.add_edge(&"alex", &"dan", 1).unwrap();
    graph.add_edge(&"dan", &"duda", 1).unwrap();

    assert_eq!(graph.to_string(), "alex -> nathan, dan\ndan -> duda\n");

    let edge = graph
        .find_edge(
            graph.find_vertex(&"alex").unwrap(),
            graph.find_vertex(&"dan").unwrap(),
        )
        .unwrap();
    assert_eq!(graph.edge_display(edge).to_string(), "alex --(1)--> dan");
}

#[test]
fn subgraph_splits_disconnected_components() {
    let mut graph = DiGraph::new();
    for name in ["alex", "nathan", "dan", "duda", "alice", "alessandra"] {
        graph.add_vertex(name);
    }
    graph.add_edge(&"alex", &"nathan", 1).unwrap();
    graph.add_edge(&"alex", &"dan", 1).unwrap();
    graph.add_edge(&"dan", &"duda", 1).unwrap();
    graph.add_edge(&"alice", &"alessandra", 1).unwrap();

    let sub = graph.subgraph(&"alex").unwrap();
    let members: Vec<&&str> = sub.vertices().collect();
    assert_eq!(members, [&"alex", &"nathan", &"dan", &"duda"]);
    assert_eq!(sub.edge_count(), 3);

    // The other component is fully absent, and the source graph is intact.
    assert!(!sub.contains_vertex(&"alice"));
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 4);

    // Extraction follows outgoing edges, so a leaf only reaches itself.
    let leaf = graph.subgraph(&"duda").unwrap();
    assert_eq!(leaf.vertex_count(), 1);
    assert_eq!(leaf.edge_count(), 0);
}

#[test]
fn subgraph_keeps_cross_edges_between_reached_vertices() {
    // a -> b, a -> c, b -> c: all three edges survive, not just a tree.
    let mut graph = DiGraph::new();
    graph.add_vertex("a");
    graph.add_vertex("b");
    graph.add_vertex("c");
    graph.add_edge(&"a", &"b", 1).unwrap();
    graph.add_edge(&"a", &"c", 1).unwrap();
    graph.add_edge(&"b", &"c", 1).unwrap();

    let sub = graph.subgraph(&"a").unwrap();
    assert_eq!(sub.vertex_count(), 3);
    assert_eq!(sub.edge_count(), 3);
}

#[test]
fn cloned_graphs_are_independent() {
    let mut graph = DiGraph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);
    graph.add_edge(&1, &2, 1).unwrap();

    let mut copy = graph.clone();
    copy.add_vertex(3);
    copy.add_edge(&2, &3, 1).unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(copy.vertex_count(), 3);
    assert_eq!(copy.edge_count(), 2);
}
