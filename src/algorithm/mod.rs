pub mod traits;
pub mod dijkstra;
pub mod trace;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
