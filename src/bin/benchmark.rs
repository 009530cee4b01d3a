use std::time::{Duration, Instant};
use matrix_dijkstra::graph::generators::{random_matrix, RandomMatrixConfig};
use matrix_dijkstra::graph::{AdjacencyMatrix, Graph};
use matrix_dijkstra::{Dijkstra, QueueKind, ShortestPathAlgorithm};

// Function to benchmark one queue kind on a graph
fn benchmark_queue(
    name: &str,
    queue: QueueKind,
    graph: &AdjacencyMatrix<u64>,
    source: usize,
) -> Result<Duration, matrix_dijkstra::Error> {
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = Dijkstra::with_queue(queue).compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Graph sizes come from the command line, or a default sweep
    let mut graph_sizes: Vec<usize> = std::env::args()
        .skip(1)
        .filter_map(|arg| arg.parse().ok())
        .collect();
    if graph_sizes.is_empty() {
        graph_sizes = vec![100, 500, 1_000, 2_000];
    }

    let edge_probability = 0.05;

    println!("=====================================================");
    println!("Benchmark: binary heap vs sorted list");
    println!("Edge probability: {}", edge_probability);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random matrix with {} vertices...", size);
        let graph = random_matrix(&RandomMatrixConfig {
            nodes: size,
            edge_probability,
            ..Default::default()
        });
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let heap_time = benchmark_queue("Binary heap", QueueKind::BinaryHeap, &graph, 0)?;
        let sorted_time = benchmark_queue("Sorted list", QueueKind::SortedList, &graph, 0)?;

        let speedup = sorted_time.as_secs_f64() / heap_time.as_secs_f64().max(f64::EPSILON);
        println!("Speedup - binary heap vs sorted list: {:.2}x", speedup);

        results.push((size, heap_time, sorted_time, speedup));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Heap (us)", "Sorted (us)", "SpeedUp");
    println!("-----------------------------------------------------");

    for (size, heap_time, sorted_time, speedup) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            heap_time.as_micros(),
            sorted_time.as_micros(),
            speedup
        );
    }

    Ok(())
}
