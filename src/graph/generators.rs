use crate::graph::AdjacencyMatrix;
use rand::prelude::*;

/// Parameters for random matrix generation
#[derive(Debug, Clone)]
pub struct RandomMatrixConfig {
    /// Number of nodes
    pub nodes: usize,
    /// Probability that any ordered pair of distinct nodes gets an edge
    pub edge_probability: f64,
    /// Largest edge weight; weights are drawn from `1..=max_weight`
    pub max_weight: u64,
    /// Seed for the random number generator
    pub seed: u64,
}

impl Default for RandomMatrixConfig {
    fn default() -> Self {
        Self {
            nodes: 100,
            edge_probability: 0.1,
            max_weight: 100,
            seed: 42,
        }
    }
}

/// The 4-node example graph
///
/// ```text
/// 0 --1--> 1 --2--> 2
/// |                 |
/// 4                 3
/// |                 |
/// v                 v
/// 3 <----------------
/// ```
pub fn worked_example() -> AdjacencyMatrix<u32> {
    let mut graph = AdjacencyMatrix::empty(4);
    graph.set_weight(0, 1, 1);
    graph.set_weight(0, 3, 4);
    graph.set_weight(1, 2, 2);
    graph.set_weight(2, 3, 3);
    graph
}

/// The 10-node graph used by the path visualiser
///
/// Every pair of nodes is connected; edges are undirected, so each is stored in
/// both directions.
pub fn visualizer_graph() -> AdjacencyMatrix<u32> {
    const EDGES: [(usize, usize, u32); 45] = [
        (0, 1, 12), (0, 2, 7), (0, 3, 3), (0, 4, 15), (0, 5, 9), (0, 6, 17), (0, 7, 6), (0, 8, 11), (0, 9, 4),
        (1, 2, 14), (1, 3, 5), (1, 4, 8), (1, 5, 19), (1, 6, 2), (1, 7, 13), (1, 8, 10), (1, 9, 16),
        (2, 3, 6), (2, 4, 12), (2, 5, 1), (2, 6, 18), (2, 7, 7), (2, 8, 20), (2, 9, 3),
        (3, 4, 11), (3, 5, 14), (3, 6, 8), (3, 7, 2), (3, 8, 15), (3, 9, 5),
        (4, 5, 17), (4, 6, 6), (4, 7, 13), (4, 8, 9), (4, 9, 10),
        (5, 6, 4), (5, 7, 12), (5, 8, 7), (5, 9, 18),
        (6, 7, 1), (6, 8, 16), (6, 9, 3),
        (7, 8, 19), (7, 9, 11),
        (8, 9, 2),
    ];

    let mut graph = AdjacencyMatrix::empty(10);
    for (a, b, weight) in EDGES {
        graph.set_weight(a, b, weight);
        graph.set_weight(b, a, weight);
    }
    graph
}

/// Generates a random directed matrix graph
///
/// The same config always yields the same matrix.
pub fn random_matrix(config: &RandomMatrixConfig) -> AdjacencyMatrix<u64> {
    let mut graph = AdjacencyMatrix::empty(config.nodes);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let max_weight = config.max_weight.max(1);
    let probability = config.edge_probability.clamp(0.0, 1.0);

    for u in 0..config.nodes {
        for v in 0..config.nodes {
            // Avoid self-loops and ensure positive weights
            if u != v && rng.gen_bool(probability) {
                graph.set_weight(u, v, rng.gen_range(1..=max_weight));
            }
        }
    }

    graph
}
