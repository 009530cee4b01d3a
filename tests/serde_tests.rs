#![cfg(feature = "serde")]

use matrix_dijkstra::graph::generators::worked_example;
use matrix_dijkstra::{AdjacencyMatrix, Dijkstra, ShortestPathAlgorithm, ShortestPathResult};

#[test]
fn test_matrix_serializes_as_rows() {
    let graph = worked_example();
    let json = serde_json::to_string(&graph).unwrap();
    assert_eq!(json, "[[0,1,0,4],[0,0,2,0],[0,0,0,3],[0,0,0,0]]");

    let back: AdjacencyMatrix<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, graph);
}

#[test]
fn test_deserialization_validates_matrix() {
    assert!(serde_json::from_str::<AdjacencyMatrix<i32>>("[[0,1],[0]]").is_err());
    assert!(serde_json::from_str::<AdjacencyMatrix<i32>>("[[0,-1],[0,0]]").is_err());
}

#[test]
fn test_result_serialization() {
    let graph = worked_example();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 2).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["distances"], serde_json::json!([null, null, 0, 3]));
    assert_eq!(value["source"], 2);

    let back: ShortestPathResult<u32> = serde_json::from_value(value).unwrap();
    assert_eq!(back, result);
}
