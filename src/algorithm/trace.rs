use std::fmt::Debug;

/// A single step taken by the solver, recorded for replay or visualisation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent<W> {
    /// The search starts at `node` with distance zero
    Start { node: usize },
    /// `node` was popped with its current best distance and its edges are scanned
    Explore { node: usize, distance: W },
    /// A popped candidate was older than the node's best distance and was dropped
    SkipStale { node: usize, distance: W },
    /// The edge `from -> to` gave `to` a shorter distance
    Improved { from: usize, to: usize, distance: W },
    /// The edge `from -> to` was checked and did not help
    NoImprovement { from: usize, to: usize },
}

/// Ordered log of the events of one solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTrace<W> {
    node_count: usize,
    events: Vec<SearchEvent<W>>,
}

impl<W> SearchTrace<W>
where
    W: Copy + Debug + num_traits::Zero,
{
    pub(crate) fn new(node_count: usize) -> Self {
        SearchTrace {
            node_count,
            events: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, event: SearchEvent<W>) {
        self.events.push(event);
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over the events in the order they happened
    pub fn iter(&self) -> impl Iterator<Item = &SearchEvent<W>> {
        self.events.iter()
    }

    /// All events as a slice, in order
    pub fn steps(&self) -> &[SearchEvent<W>] {
        &self.events
    }

    /// Best-known distances after the first `step` events have been applied
    ///
    /// `distances_at(self.len())` matches the final distance table of the solve.
    pub fn distances_at(&self, step: usize) -> Vec<Option<W>> {
        let mut distances = vec![None; self.node_count];
        for event in self.events.iter().take(step) {
            match *event {
                SearchEvent::Start { node } => distances[node] = Some(W::zero()),
                SearchEvent::Improved { to, distance, .. } => distances[to] = Some(distance),
                _ => {}
            }
        }
        distances
    }
}

impl<'a, W> IntoIterator for &'a SearchTrace<W> {
    type Item = &'a SearchEvent<W>;
    type IntoIter = std::slice::Iter<'a, SearchEvent<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
