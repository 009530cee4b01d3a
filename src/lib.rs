//! Matrix Dijkstra - single-source shortest paths over dense adjacency matrices
//!
//! This library implements Dijkstra's algorithm with lazy deletion on directed graphs
//! stored as square matrices of non-negative integer weights. A weight of zero between
//! distinct nodes, or the maximum value of the weight type, means "no edge".
//!
//! The priority structure is pluggable: a binary heap is used by default, and the
//! sorted-list queue is kept for comparison.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{Dijkstra, QueueKind},
    trace::{SearchEvent, SearchTrace},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use data_structures::{BinaryHeapQueue, Candidate, CandidateQueue, SortedListQueue};
pub use graph::matrix::AdjacencyMatrix;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid start node {node}: graph has {node_count} nodes")]
    InvalidStartNode { node: usize, node_count: usize },

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Matrix is not square: row {row} has {actual} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Negative edge weight on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Distance overflow relaxing edge {from} -> {to}")]
    DistanceOverflow { from: usize, to: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Formats a distance table the way the example driver prints it: one
/// `Node <i>: <value>` line per node, `INF` for unreachable nodes.
pub fn format_distances<W>(distances: &[Option<W>]) -> String
where
    W: std::fmt::Display,
{
    let mut out = String::new();
    for (node, distance) in distances.iter().enumerate() {
        match distance {
            Some(d) => out.push_str(&format!("Node {}: {}\n", node, d)),
            None => out.push_str(&format!("Node {}: INF\n", node)),
        }
    }
    out
}
