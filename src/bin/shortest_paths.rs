use matrix_dijkstra::graph::generators::worked_example;
use matrix_dijkstra::{format_distances, Dijkstra, ShortestPathAlgorithm};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let start_node = if args.len() > 1 {
        args[1].parse().unwrap_or(0)
    } else {
        0
    };

    let graph = worked_example();
    let result = Dijkstra::new().compute_shortest_paths(&graph, start_node)?;

    println!("Shortest distances from node {}:", start_node);
    print!("{}", format_distances(&result.distances));

    Ok(())
}
