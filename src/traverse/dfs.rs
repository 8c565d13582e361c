//! Depth-first traversals.
//!
//! The descent follows **directed adjacency** only and is implemented with an
//! explicit `(vertex, adjacency cursor)` stack rather than recursion, so
//! graph depth never threatens the call stack. The cursor discipline
//! reproduces the recursive order exactly: a neighbor's visit state is tested
//! at the moment its edge is examined, not when its parent was entered.
//!
//! Three forms share the machinery: the eager pre-order trace
//! ([`DiGraph::dfs`]), the whole-graph forest extraction
//! ([`DiGraph::dfs_forest`]), and the post-order replay sequence
//! ([`DfsIter`]).

use std::collections::VecDeque;
use std::hash::Hash;

use super::visit::VisitMap;
use crate::digraph::{DiGraph, VertexId};
use crate::error::{GraphError, Result};

/// One suspended level of the descent: the vertex, how far through its
/// adjacency list the scan has advanced, and — for the forest form — the
/// image of its parent in the output graph plus the weight of the
/// discovering edge.
struct Frame {
    vertex: VertexId,
    cursor: usize,
    parent_link: Option<(VertexId, i64)>,
}

impl<T: Eq + Hash> DiGraph<T> {
    /// Depth-first pre-order trace from `source` over **directed adjacency**.
    ///
    /// Each vertex is emitted when first discovered; outgoing edges are
    /// explored in adjacency insertion order. Fails with
    /// [`GraphError::VertexNotFound`] when `source` is not a vertex of this
    /// graph.
    pub fn dfs(&self, source: &T) -> Result<Vec<VertexId>> {
        let source = self.find_vertex(source).ok_or(GraphError::VertexNotFound)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(source = source.index(), vertices = self.vertex_count(), "dfs");

        let mut visit = VisitMap::new(self.vertex_count());
        let mut trace = Vec::new();

        visit.try_discover(source);
        trace.push(source);
        let mut stack = vec![Frame {
            vertex: source,
            cursor: 0,
            parent_link: None,
        }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            let adjacency = self.adjacency(u);
            if frame.cursor < adjacency.len() {
                let edge = *self.edge(adjacency[frame.cursor]);
                frame.cursor += 1;
                if visit.try_discover(edge.target()) {
                    trace.push(edge.target());
                    stack.push(Frame {
                        vertex: edge.target(),
                        cursor: 0,
                        parent_link: None,
                    });
                }
            } else {
                visit.finish(u);
                stack.pop();
            }
        }
        Ok(trace)
    }

    /// Depth-first **post-order** from `source`: vertices in the order they
    /// finish, i.e. after their whole reachable subtree.
    pub(crate) fn postorder_from(&self, source: VertexId) -> Vec<VertexId> {
        let mut visit = VisitMap::new(self.vertex_count());
        let mut order = Vec::new();

        visit.try_discover(source);
        let mut stack = vec![Frame {
            vertex: source,
            cursor: 0,
            parent_link: None,
        }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            let adjacency = self.adjacency(u);
            if frame.cursor < adjacency.len() {
                let edge = *self.edge(adjacency[frame.cursor]);
                frame.cursor += 1;
                if visit.try_discover(edge.target()) {
                    stack.push(Frame {
                        vertex: edge.target(),
                        cursor: 0,
                        parent_link: None,
                    });
                }
            } else {
                visit.finish(u);
                order.push(u);
                stack.pop();
            }
        }
        order
    }

    /// Constructs a replayable post-order depth-first sequence starting at
    /// `source`.
    ///
    /// Equivalent to [`DfsIter::new`].
    pub fn dfs_iter(&self, source: &T) -> DfsIter<'_, T> {
        DfsIter::new(self, source)
    }
}

impl<T: Eq + Hash + Clone> DiGraph<T> {
    /// Whole-graph depth-first pruning: extracts a forest in which every
    /// vertex has at most one parent.
    ///
    /// Every vertex is tried as a root in insertion order; roots already
    /// reached by an earlier tree are skipped. Each first discovery copies
    /// the vertex into the output graph, and the edge that caused the
    /// discovery is copied (weight preserved) once the child's subtree
    /// completes. Edges to already-discovered vertices are pruned, which is
    /// exactly what removes multi-parent relationships.
    ///
    /// The result contains every vertex of this graph and a subset of its
    /// edges forming a forest.
    pub fn dfs_forest(&self) -> DiGraph<T> {
        #[cfg(feature = "tracing")]
        tracing::trace!(vertices = self.vertex_count(), "dfs_forest");

        let mut visit = VisitMap::new(self.vertex_count());
        let mut forest = DiGraph::with_capacity(self.vertex_count());

        for root in self.vertex_ids() {
            if visit.is_unvisited(root) {
                self.grow_tree(root, &mut visit, &mut forest);
            }
        }
        forest
    }

    /// Grows one tree of the forest from `root`, claiming every vertex it
    /// first discovers.
    fn grow_tree(&self, root: VertexId, visit: &mut VisitMap, forest: &mut DiGraph<T>) {
        visit.try_discover(root);
        forest.add_vertex(self[root].clone());
        let mut stack = vec![Frame {
            vertex: root,
            cursor: 0,
            parent_link: None,
        }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            let adjacency = self.adjacency(u);
            if frame.cursor < adjacency.len() {
                let edge = *self.edge(adjacency[frame.cursor]);
                frame.cursor += 1;
                if visit.try_discover(edge.target()) {
                    let image_u = forest.add_vertex(self[u].clone());
                    forest.add_vertex(self[edge.target()].clone());
                    stack.push(Frame {
                        vertex: edge.target(),
                        cursor: 0,
                        parent_link: Some((image_u, edge.weight())),
                    });
                }
            } else {
                visit.finish(u);
                let link = frame.parent_link.take();
                stack.pop();
                if let Some((image_parent, weight)) = link {
                    let image_u = forest.add_vertex(self[u].clone());
                    forest.connect(image_parent, image_u, weight);
                }
            }
        }
    }
}

/// A restartable post-order depth-first sequence over a graph.
///
/// The full visitation order is computed at construction time and replayed
/// through the [`Iterator`] contract. Vertices enter the replay queue in
/// **finish order** — after their reachable subtree — which deliberately
/// differs from the pre-order trace of [`DiGraph::dfs`]. An unknown start
/// payload yields an empty sequence.
pub struct DfsIter<'g, T> {
    graph: &'g DiGraph<T>,
    replay: VecDeque<VertexId>,
}

impl<'g, T: Eq + Hash> DfsIter<'g, T> {
    /// Precomputes the post-order of `graph` from `source`.
    pub fn new(graph: &'g DiGraph<T>, source: &T) -> Self {
        let replay = match graph.find_vertex(source) {
            Some(start) => graph.postorder_from(start).into(),
            None => VecDeque::new(),
        };
        Self { graph, replay }
    }
}

impl<'g, T> DfsIter<'g, T> {
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

impl<T> Iterator for DfsIter<'_, T> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        self.replay.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.replay.len(), Some(self.replay.len()))
    }
}

impl<T> ExactSizeIterator for DfsIter<'_, T> {}

impl<T> std::iter::FusedIterator for DfsIter<'_, T> {}
