//! Breadth-first traversals.
//!
//! Two variants share the queue discipline but not the neighbor mode: the
//! plain sweep ([`DiGraph::bfs`]) expands **reachability incidence** and
//! returns its dequeue trace, while distance labeling
//! ([`DiGraph::bfs_distances`]) follows **directed adjacency** and labels
//! every reachable vertex with its unweighted hop count. Because the frontier
//! is FIFO, each edge is examined a bounded number of times and the hop
//! counts come out shortest-first without any weights involved.

use std::collections::VecDeque;
use std::hash::Hash;

use super::visit::VisitMap;
use crate::digraph::{DiGraph, VertexId};
use crate::error::{GraphError, Result};

/// Hop-distance sentinel for vertices the sweep never reached.
const UNREACHED: usize = usize::MAX;

/// Unweighted hop distances produced by [`DiGraph::bfs_distances`].
///
/// Holds one entry per vertex of the traversed graph; unreached vertices
/// surface as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    distances: Vec<usize>,
}

impl DistanceMap {
    /// Returns the hop distance of `vertex` from the traversal source, or
    /// `None` when the source cannot reach it via outgoing edges.
    pub fn get(&self, vertex: VertexId) -> Option<usize> {
        match self.distances.get(vertex.index()) {
            Some(&UNREACHED) | None => None,
            Some(&hops) => Some(hops),
        }
    }

    /// Returns `true` iff `vertex` was reached by the sweep.
    pub fn is_reached(&self, vertex: VertexId) -> bool {
        self.get(vertex).is_some()
    }

    /// Iterates over `(vertex, hops)` for every reached vertex, in dense id
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, usize)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter(|&(_, &hops)| hops != UNREACHED)
            .map(|(index, &hops)| (VertexId(index), hops))
    }

    /// Number of entries (one per vertex of the traversed graph).
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` iff the traversed graph had no vertices.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl<T: Eq + Hash> DiGraph<T> {
    /// Breadth-first sweep from `source` over **reachability incidence**.
    ///
    /// Returns the dequeue trace (which for a FIFO frontier equals discovery
    /// order): the source first, then its incident vertices in edge insertion
    /// order, ring by ring. Fails with [`GraphError::VertexNotFound`] when
    /// `source` is not a vertex of this graph.
    pub fn bfs(&self, source: &T) -> Result<Vec<VertexId>> {
        let source = self.find_vertex(source).ok_or(GraphError::VertexNotFound)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(source = source.index(), vertices = self.vertex_count(), "bfs");

        let mut visit = VisitMap::new(self.vertex_count());
        let mut queue = VecDeque::new();
        let mut trace = Vec::new();

        visit.try_discover(source);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            trace.push(u);
            for w in self.incident_to(u) {
                if visit.try_discover(w) {
                    queue.push_back(w);
                }
            }
            visit.finish(u);
        }
        Ok(trace)
    }

    /// Breadth-first distance labeling from `source` over **directed
    /// adjacency**.
    ///
    /// Every vertex reachable via outgoing edges is labeled with its
    /// unweighted hop distance from `source`; everything else stays
    /// unreached. Fails with [`GraphError::VertexNotFound`] when `source` is
    /// not a vertex of this graph.
    pub fn bfs_distances(&self, source: &T) -> Result<DistanceMap> {
        let source = self.find_vertex(source).ok_or(GraphError::VertexNotFound)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(source = source.index(), vertices = self.vertex_count(), "bfs_distances");

        let mut visit = VisitMap::new(self.vertex_count());
        let mut distances = vec![UNREACHED; self.vertex_count()];
        let mut queue = VecDeque::new();

        visit.try_discover(source);
        distances[source.index()] = 0;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            for w in self.out_neighbors(u) {
                if visit.try_discover(w) {
                    distances[w.index()] = distances[u.index()] + 1;
                    queue.push_back(w);
                }
            }
            visit.finish(u);
        }
        Ok(DistanceMap { distances })
    }

    /// Constructs a replayable breadth-first sequence starting at `source`.
    ///
    /// Equivalent to [`BfsIter::new`].
    pub fn bfs_iter(&self, source: &T) -> BfsIter<'_, T> {
        BfsIter::new(self, source)
    }
}

/// A restartable breadth-first sequence over a graph.
///
/// The full visitation order is computed at construction time and replayed
/// through the [`Iterator`] contract. Vertices enter the replay queue in
/// finish order, which for the FIFO sweep equals the eager dequeue trace of
/// [`DiGraph::bfs`]. An unknown start payload yields an empty sequence.
///
/// The borrow of the graph lives as long as the sequence, so the graph
/// cannot be mutated mid-replay.
pub struct BfsIter<'g, T> {
    graph: &'g DiGraph<T>,
    replay: VecDeque<VertexId>,
}

impl<'g, T: Eq + Hash> BfsIter<'g, T> {
    /// Precomputes the breadth-first order of `graph` from `source`.
    pub fn new(graph: &'g DiGraph<T>, source: &T) -> Self {
        let replay = match graph.bfs(source) {
            Ok(order) => order.into(),
            Err(_) => VecDeque::new(),
        };
        Self { graph, replay }
    }
}

impl<'g, T> BfsIter<'g, T> {
    /// Number of vertices not yet replayed.
    pub fn len(&self) -> usize {
        self.replay.len()
    }

    /// Returns `true` iff the sequence is exhausted.
    pub fn is_empty(&self) -> bool {
        self.replay.is_empty()
    }

    /// Adapts the remaining sequence to yield payloads instead of ids.
    pub fn payloads(self) -> impl Iterator<Item = &'g T> {
        let graph = self.graph;
        self.replay.into_iter().map(move |vertex| &graph[vertex])
    }
}

impl<T> Iterator for BfsIter<'_, T> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        self.replay.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.replay.len(), Some(self.replay.len()))
    }
}

impl<T> ExactSizeIterator for BfsIter<'_, T> {}

impl<T> std::iter::FusedIterator for BfsIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Vertices `1..=6` with edges `6->4, 4->5, 4->3, 5->2, 5->1, 1->2`.
    fn sample() -> DiGraph<u32> {
        let mut graph = DiGraph::new();
        for payload in 1..=6 {
            graph.add_vertex(payload);
        }
        for (source, target) in [(6, 4), (4, 5), (4, 3), (5, 2), (5, 1), (1, 2)] {
            graph.add_edge(&source, &target, 1).unwrap();
        }
        graph
    }

    fn payloads(graph: &DiGraph<u32>, order: &[VertexId]) -> Vec<u32> {
        order.iter().map(|&vertex| graph[vertex]).collect()
    }

    #[test]
    fn sweep_follows_incidence() {
        let graph = sample();
        let trace = graph.bfs(&6).unwrap();
        assert_eq!(payloads(&graph, &trace), [6, 4, 5, 3, 2, 1]);
    }

    #[test]
    fn sweep_rejects_unknown_source() {
        let graph = sample();
        assert_eq!(graph.bfs(&99), Err(GraphError::VertexNotFound));
    }

    #[test]
    fn distances_follow_outgoing_edges_only() {
        let graph = sample();
        let distances = graph.bfs_distances(&5).unwrap();

        let five = graph.find_vertex(&5).unwrap();
        let two = graph.find_vertex(&2).unwrap();
        let one = graph.find_vertex(&1).unwrap();
        assert_eq!(distances.get(five), Some(0));
        assert_eq!(distances.get(two), Some(1));
        assert_eq!(distances.get(one), Some(1));

        // 5 cannot reach 3, 4 or 6 against the arrows.
        for unreached in [3, 4, 6] {
            let vertex = graph.find_vertex(&unreached).unwrap();
            assert_eq!(distances.get(vertex), None);
            assert!(!distances.is_reached(vertex));
        }

        assert_eq!(distances.iter().count(), 3);
    }

    #[test]
    fn replay_matches_eager_trace() {
        let graph = sample();
        let eager = graph.bfs(&6).unwrap();
        let replayed: Vec<_> = graph.bfs_iter(&6).collect();
        assert_eq!(replayed, eager);
    }

    #[test]
    fn replay_of_unknown_source_is_empty() {
        let graph = sample();
        let mut replay = graph.bfs_iter(&99);
        assert!(replay.is_empty());
        assert_eq!(replay.next(), None);
    }

    #[test]
    fn replay_exhaustion_is_value_based() {
        let graph = sample();
        let mut replay = graph.bfs_iter(&3);
        assert_eq!(replay.len(), graph.vertex_count());

        while replay.next().is_some() {}
        assert!(replay.is_empty());
        assert_eq!(replay.next(), None);
        assert_eq!(replay.next(), None);
    }

    #[test]
    fn payload_adapter() {
        let graph = sample();
        let names: Vec<u32> = graph.bfs_iter(&6).payloads().copied().collect();
        assert_eq!(names, [6, 4, 5, 3, 2, 1]);
    }
}
