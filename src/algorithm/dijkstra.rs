use std::fmt::Debug;
use num_traits::PrimInt;

use crate::algorithm::trace::{SearchEvent, SearchTrace};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryHeapQueue, Candidate, CandidateQueue, SortedListQueue};
use crate::graph::Graph;
use crate::{Error, Result};

/// Priority structure used by the relaxation loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueueKind {
    /// Binary heap, O(log n) push and pop
    #[default]
    BinaryHeap,
    /// Vector kept sorted on every push, O(n) push and O(1) pop
    SortedList,
}

/// Classic Dijkstra's algorithm with lazy deletion of stale candidates
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    queue: QueueKind,
}

/// Counters gathered during one solve, reported through `log`
#[derive(Debug, Default)]
struct SolveStats {
    pushes: usize,
    pops: usize,
    stale: usize,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance backed by a binary heap
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Creates a Dijkstra instance backed by the given priority structure
    pub fn with_queue(queue: QueueKind) -> Self {
        Dijkstra { queue }
    }

    /// Returns the priority structure this instance solves with
    pub fn queue_kind(&self) -> QueueKind {
        self.queue
    }

    /// Computes shortest paths and records every step of the search
    pub fn compute_with_trace<W, G>(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<(ShortestPathResult<W>, SearchTrace<W>)>
    where
        W: PrimInt + Debug,
        G: Graph<W>,
    {
        let mut trace = SearchTrace::new(graph.vertex_count());
        let result = self.dispatch(graph, source, Some(&mut trace))?;
        Ok((result, trace))
    }

    fn dispatch<W, G>(
        &self,
        graph: &G,
        source: usize,
        trace: Option<&mut SearchTrace<W>>,
    ) -> Result<ShortestPathResult<W>>
    where
        W: PrimInt + Debug,
        G: Graph<W>,
    {
        match self.queue {
            QueueKind::BinaryHeap => run::<W, G, BinaryHeapQueue<W>>(graph, source, trace),
            QueueKind::SortedList => run::<W, G, SortedListQueue<W>>(graph, source, trace),
        }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.dispatch(graph, source, None)
    }
}

fn run<W, G, Q>(
    graph: &G,
    source: usize,
    mut trace: Option<&mut SearchTrace<W>>,
) -> Result<ShortestPathResult<W>>
where
    W: PrimInt + Debug,
    G: Graph<W>,
    Q: CandidateQueue<W>,
{
    let n = graph.vertex_count();
    if !graph.has_vertex(source) {
        return Err(Error::InvalidStartNode {
            node: source,
            node_count: n,
        });
    }

    log::debug!("Dijkstra from node {} over {} nodes", source, n);

    // Initialize distances and predecessors
    let mut distances: Vec<Option<W>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    // First edge whose sum overflowed while its target had no distance yet
    let mut overflowed: Vec<Option<usize>> = vec![None; n];
    let mut stats = SolveStats::default();

    distances[source] = Some(W::zero());
    if let Some(trace) = trace.as_deref_mut() {
        trace.record(SearchEvent::Start { node: source });
    }

    let mut queue = Q::with_capacity(n);
    queue.push(Candidate::new(source, W::zero()));
    stats.pushes += 1;

    while let Some(Candidate { node: u, distance: dist_u }) = queue.pop() {
        stats.pops += 1;

        // A shorter path to u was settled after this candidate was queued
        if distances[u].map_or(false, |best| dist_u > best) {
            stats.stale += 1;
            if let Some(trace) = trace.as_deref_mut() {
                trace.record(SearchEvent::SkipStale { node: u, distance: dist_u });
            }
            continue;
        }

        if let Some(trace) = trace.as_deref_mut() {
            trace.record(SearchEvent::Explore { node: u, distance: dist_u });
        }

        // Relax all outgoing edges
        for (v, weight) in graph.outgoing_edges(u) {
            // An unrepresentable sum cannot beat a finite distance
            let Some(new_dist) = dist_u.checked_add(&weight) else {
                if distances[v].is_none() && overflowed[v].is_none() {
                    overflowed[v] = Some(u);
                }
                if let Some(trace) = trace.as_deref_mut() {
                    trace.record(SearchEvent::NoImprovement { from: u, to: v });
                }
                continue;
            };

            let improves = match distances[v] {
                None => true,
                Some(current) => new_dist < current,
            };

            if improves {
                log::trace!("relax {} -> {}: {:?}", u, v, new_dist);
                distances[v] = Some(new_dist);
                predecessors[v] = Some(u);
                queue.push(Candidate::new(v, new_dist));
                stats.pushes += 1;
                if let Some(trace) = trace.as_deref_mut() {
                    trace.record(SearchEvent::Improved { from: u, to: v, distance: new_dist });
                }
            } else if let Some(trace) = trace.as_deref_mut() {
                trace.record(SearchEvent::NoImprovement { from: u, to: v });
            }
        }
    }

    log::debug!(
        "Dijkstra finished: {} pushes, {} pops, {} stale",
        stats.pushes,
        stats.pops,
        stats.stale
    );

    // Reachable only through paths too long for W
    let unrepresentable = overflowed
        .iter()
        .zip(&distances)
        .enumerate()
        .find_map(|(v, (from, best))| match (from, best) {
            (Some(from), None) => Some((v, *from)),
            _ => None,
        });
    if let Some((to, from)) = unrepresentable {
        return Err(Error::DistanceOverflow { from, to });
    }

    Ok(ShortestPathResult {
        distances,
        predecessors,
        source,
    })
}
