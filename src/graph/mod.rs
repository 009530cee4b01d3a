pub mod traits;
pub mod matrix;
pub mod generators;

pub use traits::Graph;
pub use matrix::AdjacencyMatrix;
pub use generators::RandomMatrixConfig;
