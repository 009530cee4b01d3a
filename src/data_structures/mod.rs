pub mod priority_queue;

pub use priority_queue::{BinaryHeapQueue, Candidate, CandidateQueue, SortedListQueue};
