use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::PrimInt;
use std::fmt::Debug;

/// A directed graph stored as a dense, row-major adjacency matrix
///
/// Entry `(u, v)` holds the weight of the edge `u -> v`. Zero and `W::max_value()`
/// both mean "no edge", and the diagonal is never read, so self-loops and
/// zero-cost edges cannot be represented. The matrix cannot be changed after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<W>>", into = "Vec<Vec<W>>")
)]
pub struct AdjacencyMatrix<W>
where
    W: PrimInt + Debug,
{
    /// Number of nodes (rows and columns)
    node_count: usize,

    /// Weights in row-major order, `node_count * node_count` entries
    weights: Vec<W>,
}

impl<W> AdjacencyMatrix<W>
where
    W: PrimInt + Debug,
{
    /// Builds a matrix from its rows, checking that it is square and that no
    /// off-diagonal weight is negative
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let node_count = rows.len();
        let mut weights = Vec::with_capacity(node_count * node_count);

        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != node_count {
                return Err(Error::NonSquareMatrix {
                    row,
                    expected: node_count,
                    actual: entries.len(),
                });
            }
            for (col, weight) in entries.iter().enumerate() {
                if row != col && *weight < W::zero() {
                    return Err(Error::NegativeWeight { from: row, to: col });
                }
            }
            weights.extend(entries);
        }

        Ok(AdjacencyMatrix { node_count, weights })
    }

    /// Builds a matrix with `node_count` nodes from a list of `(from, to, weight)` edges
    ///
    /// Later edges between the same pair of nodes replace earlier ones. A weight
    /// of zero leaves the pair without an edge.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut weights = vec![W::zero(); node_count * node_count];

        for &(from, to, weight) in edges {
            if from >= node_count || to >= node_count || from == to {
                return Err(Error::InvalidEdge(from, to));
            }
            if weight < W::zero() {
                return Err(Error::NegativeWeight { from, to });
            }
            weights[from * node_count + to] = weight;
        }

        Ok(AdjacencyMatrix { node_count, weights })
    }

    /// Creates a matrix with no edges, for in-crate builders that uphold the invariants
    pub(crate) fn empty(node_count: usize) -> Self {
        AdjacencyMatrix {
            node_count,
            weights: vec![W::zero(); node_count * node_count],
        }
    }

    /// Sets a single entry; callers guarantee `from != to`, both in range, weight >= 0
    pub(crate) fn set_weight(&mut self, from: usize, to: usize, weight: W) {
        debug_assert!(from != to && weight >= W::zero());
        self.weights[from * self.node_count + to] = weight;
    }

    /// Returns the raw matrix row for `vertex`, diagonal included, or `None` if out of range
    pub fn row(&self, vertex: usize) -> Option<&[W]> {
        self.has_vertex(vertex).then(|| self.row_unchecked(vertex))
    }

    fn row_unchecked(&self, vertex: usize) -> &[W] {
        let start = vertex * self.node_count;
        &self.weights[start..start + self.node_count]
    }

    /// Copies the matrix back out as a vector of rows
    pub fn to_rows(&self) -> Vec<Vec<W>> {
        (0..self.node_count).map(|v| self.row_unchecked(v).to_vec()).collect()
    }

    #[inline]
    fn is_edge(from: usize, to: usize, weight: W) -> bool {
        from != to && weight != W::zero() && weight != W::max_value()
    }
}

impl<W> Graph<W> for AdjacencyMatrix<W>
where
    W: PrimInt + Debug,
{
    fn vertex_count(&self) -> usize {
        self.node_count
    }

    fn edge_count(&self) -> usize {
        (0..self.node_count)
            .map(|u| self.outgoing_edges(u).count())
            .sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.row_unchecked(vertex)
                .iter()
                .copied()
                .enumerate()
                .filter(move |&(to, weight)| Self::is_edge(vertex, to, weight)),
        )
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return None;
        }
        let weight = self.weights[from * self.node_count + to];
        Self::is_edge(from, to, weight).then_some(weight)
    }
}

impl<W> TryFrom<Vec<Vec<W>>> for AdjacencyMatrix<W>
where
    W: PrimInt + Debug,
{
    type Error = Error;

    fn try_from(rows: Vec<Vec<W>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<W> From<AdjacencyMatrix<W>> for Vec<Vec<W>>
where
    W: PrimInt + Debug,
{
    fn from(matrix: AdjacencyMatrix<W>) -> Self {
        matrix.to_rows()
    }
}
