use std::collections::HashSet;
use std::fmt::Debug;
use num_traits::PrimInt;
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPathResult<W>
where
    W: PrimInt + Debug,
{
    /// Distances from source to each vertex, `None` for unreachable vertices
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: PrimInt + Debug,
{
    /// Distance to `target`, or `None` if it is unreachable or out of range
    pub fn distance(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Get the shortest path from source to target as a sequence of vertices
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.predecessors.len() || self.distances[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != self.source {
            if !visited.insert(current) {
                log::warn!("Cycle detected in path reconstruction at vertex {}", current);
                return None;
            }

            path.push(current);
            // A reachable vertex other than the source always has a predecessor
            current = self.predecessors[current]?;
        }

        path.push(self.source);
        path.reverse();

        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
