use matrix_dijkstra::graph::generators::{random_matrix, worked_example, RandomMatrixConfig};
use matrix_dijkstra::{AdjacencyMatrix, Dijkstra, QueueKind, SearchEvent, ShortestPathAlgorithm};

#[test]
fn test_trace_of_worked_example() {
    let graph = worked_example();
    let (result, trace) = Dijkstra::new().compute_with_trace(&graph, 0).unwrap();

    assert_eq!(result.distances, vec![Some(0), Some(1), Some(3), Some(4)]);
    assert_eq!(
        trace.steps(),
        &[
            SearchEvent::Start { node: 0 },
            SearchEvent::Explore { node: 0, distance: 0 },
            SearchEvent::Improved { from: 0, to: 1, distance: 1 },
            SearchEvent::Improved { from: 0, to: 3, distance: 4 },
            SearchEvent::Explore { node: 1, distance: 1 },
            SearchEvent::Improved { from: 1, to: 2, distance: 3 },
            SearchEvent::Explore { node: 2, distance: 3 },
            SearchEvent::NoImprovement { from: 2, to: 3 },
            SearchEvent::Explore { node: 3, distance: 4 },
        ]
    );

    assert_eq!(trace.distances_at(0), vec![None; 4]);
    assert_eq!(trace.distances_at(1), vec![Some(0), None, None, None]);
    assert_eq!(trace.distances_at(4), vec![Some(0), Some(1), None, Some(4)]);
}

#[test]
fn test_trace_records_stale_skips() {
    let graph = AdjacencyMatrix::from_edges(3, &[(0, 2, 10u32), (0, 1, 1), (1, 2, 2)]).unwrap();
    let (_, trace) = Dijkstra::new().compute_with_trace(&graph, 0).unwrap();

    assert!(trace.iter().any(|e| *e == SearchEvent::SkipStale { node: 2, distance: 10 }));
    let explored = trace
        .iter()
        .filter(|e| matches!(e, SearchEvent::Explore { node: 2, .. }))
        .count();
    assert_eq!(explored, 1, "a node is finalized once");
}

#[test]
fn test_trace_replays_to_final_distances() {
    let graph = random_matrix(&RandomMatrixConfig { nodes: 40, edge_probability: 0.15, ..Default::default() });
    for queue in [QueueKind::BinaryHeap, QueueKind::SortedList] {
        let dijkstra = Dijkstra::with_queue(queue);
        let (result, trace) = dijkstra.compute_with_trace(&graph, 5).unwrap();

        assert_eq!(trace.steps()[0], SearchEvent::Start { node: 5 });
        assert_eq!(trace.distances_at(trace.len()), result.distances);
        assert_eq!(result, dijkstra.compute_shortest_paths(&graph, 5).unwrap());
    }
}

#[test]
fn test_trace_rejects_invalid_start() {
    let graph = worked_example();
    assert!(Dijkstra::new().compute_with_trace(&graph, 10).is_err());
}
