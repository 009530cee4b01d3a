use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A tentative `(node, distance)` pair waiting to be settled
///
/// Several candidates for the same node may be queued at once; the older ones
/// go stale when a shorter distance is found and are skipped on extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate<W> {
    pub node: usize,
    pub distance: W,
}

impl<W> Candidate<W> {
    pub fn new(node: usize, distance: W) -> Self {
        Candidate { node, distance }
    }
}

/// Min-priority multiset of candidates, extracted in ascending distance order
///
/// No deduplication or decrease-key: pushing a second candidate for a node is
/// valid. Ties on distance come out in an unspecified order.
pub trait CandidateQueue<W>: Debug + Default
where
    W: Ord + Copy + Debug,
{
    /// Creates an empty queue with room for `capacity` candidates
    fn with_capacity(capacity: usize) -> Self;

    /// Inserts a candidate
    fn push(&mut self, candidate: Candidate<W>);

    /// Removes a candidate with the smallest distance, or `None` if the queue is empty
    fn pop(&mut self) -> Option<Candidate<W>>;

    /// Returns a candidate with the smallest distance without removing it
    fn peek(&self) -> Option<Candidate<W>>;

    /// Returns the number of queued candidates
    fn len(&self) -> usize;

    /// Returns true if no candidates remain
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every candidate
    fn clear(&mut self);
}

/// A wrapper around BinaryHeap for candidate extraction in shortest path algorithms
#[derive(Debug)]
pub struct BinaryHeapQueue<W>
where
    W: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(W, usize)>>,
}

impl<W> BinaryHeapQueue<W>
where
    W: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapQueue {
            heap: BinaryHeap::new(),
        }
    }
}

impl<W> Default for BinaryHeapQueue<W>
where
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> CandidateQueue<W> for BinaryHeapQueue<W>
where
    W: Ord + Copy + Debug,
{
    fn with_capacity(capacity: usize) -> Self {
        BinaryHeapQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    fn push(&mut self, candidate: Candidate<W>) {
        self.heap.push(Reverse((candidate.distance, candidate.node)));
    }

    fn pop(&mut self) -> Option<Candidate<W>> {
        self.heap
            .pop()
            .map(|Reverse((distance, node))| Candidate::new(node, distance))
    }

    fn peek(&self) -> Option<Candidate<W>> {
        self.heap
            .peek()
            .map(|Reverse((distance, node))| Candidate::new(*node, *distance))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

/// A queue kept as a vector sorted by descending distance
///
/// The minimum sits at the tail, so `pop` is O(1) while `push` shifts entries to
/// keep the order and costs O(n).
#[derive(Debug)]
pub struct SortedListQueue<W>
where
    W: Ord + Copy + Debug,
{
    entries: Vec<Candidate<W>>,
}

impl<W> SortedListQueue<W>
where
    W: Ord + Copy + Debug,
{
    pub fn new() -> Self {
        SortedListQueue { entries: Vec::new() }
    }
}

impl<W> Default for SortedListQueue<W>
where
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> CandidateQueue<W> for SortedListQueue<W>
where
    W: Ord + Copy + Debug,
{
    fn with_capacity(capacity: usize) -> Self {
        SortedListQueue {
            entries: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, candidate: Candidate<W>) {
        let index = self
            .entries
            .partition_point(|entry| entry.distance > candidate.distance);
        self.entries.insert(index, candidate);
    }

    fn pop(&mut self) -> Option<Candidate<W>> {
        self.entries.pop()
    }

    fn peek(&self) -> Option<Candidate<W>> {
        self.entries.last().copied()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
