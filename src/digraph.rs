//! A dynamic payload-keyed directed graph stored as adjacency lists.
//!
//! Vertices carry a user-supplied payload and are identified by **value
//! equality** of that payload: `add_vertex` on an equal payload returns the
//! vertex that already exists. Edges are directed arcs keyed by their ordered
//! `(source, target)` pair, unique per pair, each carrying an integer weight.
//! Both collections preserve insertion order; hash indexes sit beside them so
//! lookup never degenerates into a scan.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Hash probe + append |
//! | `find_vertex` | \(O(1)\) expected | Payload hash index |
//! | `add_edge` / `find_edge` | \(O(1)\) expected | Ordered-pair hash index |
//! | `out_neighbors` | \(O(\text{out-degree})\) | Walks the adjacency list |
//! | `incident_to` | \(O(m)\) | Scans the edge collection |
//! | `in_degree` | \(O(m)\) | Scans the edge collection |
//! | `subgraph` | \(O(n + m)\) | Breadth-first copy of the reachable set |
//!
//! Individual vertices and edges cannot be removed; the only destructive
//! operation is [`DiGraph::clear`]. Ids handed out by a graph therefore stay
//! valid until the next `clear`.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use crate::error::{GraphError, Result};

/// A strongly-typed index for a vertex of a [`DiGraph`].
///
/// Ids are dense and ordered by insertion: the first vertex added is index
/// `0`. An id is only meaningful for the graph that produced it.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Returns the underlying dense index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A strongly-typed index for an edge of a [`DiGraph`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Returns the underlying dense index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A directed arc between two vertices, immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: i64,
}

impl Edge {
    /// The vertex this edge leaves.
    #[inline(always)]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The vertex this edge enters.
    #[inline(always)]
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// The weight recorded when the edge was first inserted.
    #[inline(always)]
    pub fn weight(&self) -> i64 {
        self.weight
    }
}

/// Storage for one vertex: its payload and outgoing adjacency.
#[derive(Debug, Clone)]
struct VertexSlot<T> {
    payload: T,
    adjacency: Vec<EdgeId>,
}

/// A payload-keyed directed graph.
///
/// See the [module docs](self) for the identity and ordering rules. The
/// payload type doubles as the vertex key, so it must support value equality
/// and hashing; `Clone` feeds the hash index.
#[derive(Debug, Clone)]
pub struct DiGraph<T> {
    slots: Vec<VertexSlot<T>>,
    edges: Vec<Edge>,
    payload_index: HashMap<T, VertexId>,
    pair_index: HashMap<(VertexId, VertexId), EdgeId>,
}

impl<T> DiGraph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            edges: Vec::new(),
            payload_index: HashMap::new(),
            pair_index: HashMap::new(),
        }
    }

    /// Creates an empty graph sized for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            slots: Vec::with_capacity(vertices),
            edges: Vec::new(),
            payload_index: HashMap::with_capacity(vertices),
            pair_index: HashMap::new(),
        }
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of edges.
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` iff the graph has no vertices.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Empties both collections.
    ///
    /// Afterwards the graph is indistinguishable from a freshly constructed
    /// one; all previously issued ids are invalidated.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.edges.clear();
        self.payload_index.clear();
        self.pair_index.clear();
    }

    /// Returns the payload of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds for this graph.
    #[inline(always)]
    pub fn payload(&self, vertex: VertexId) -> &T {
        &self.slots[vertex.index()].payload
    }

    /// Returns the edge behind `edge`.
    ///
    /// # Panics
    /// Panics if `edge` is out of bounds for this graph.
    #[inline(always)]
    pub fn edge(&self, edge: EdgeId) -> &Edge {
        &self.edges[edge.index()]
    }

    /// Iterates over all vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> {
        (0..self.slots.len()).map(VertexId)
    }

    /// Iterates over all payloads in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &T> {
        self.slots.iter().map(|slot| &slot.payload)
    }

    /// Iterates over all edges in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Returns the out-neighbors of `vertex`, in adjacency insertion order.
    ///
    /// This is the **directed adjacency** view: only edges leaving `vertex`
    /// are followed.
    pub fn out_neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.slots[vertex.index()]
            .adjacency
            .iter()
            .map(|&edge| self.edges[edge.index()].target)
    }

    /// Returns the out-degree of `vertex`.
    #[inline(always)]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.slots[vertex.index()].adjacency.len()
    }

    /// Returns the in-degree of `vertex` by scanning the edge collection.
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.edges.iter().filter(|edge| edge.target == vertex).count()
    }

    /// Returns the vertices connected to `vertex` by any edge, regardless of
    /// direction, in edge insertion order.
    ///
    /// This is the **reachability incidence** view used by the plain
    /// breadth-first sweep: a directed edge is walkable from either endpoint.
    /// A self-loop contributes a single entry. Deliberately distinct from
    /// [`out_neighbors`](Self::out_neighbors).
    pub fn incident_to(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut incident = Vec::new();
        for edge in &self.edges {
            if edge.target == vertex {
                incident.push(edge.source);
            } else if edge.source == vertex {
                incident.push(edge.target);
            }
        }
        incident
    }

    /// Adjacency list of `vertex` as raw edge ids (traversal hot path).
    #[inline(always)]
    pub(crate) fn adjacency(&self, vertex: VertexId) -> &[EdgeId] {
        &self.slots[vertex.index()].adjacency
    }
}

impl<T: Eq + Hash> DiGraph<T> {
    /// Looks up the vertex carrying a payload equal to `payload`.
    #[inline]
    pub fn find_vertex(&self, payload: &T) -> Option<VertexId> {
        self.payload_index.get(payload).copied()
    }

    /// Returns `true` iff a vertex with an equal payload exists.
    #[inline]
    pub fn contains_vertex(&self, payload: &T) -> bool {
        self.payload_index.contains_key(payload)
    }

    /// Looks up the edge for the ordered pair `(source, target)`.
    #[inline]
    pub fn find_edge(&self, source: VertexId, target: VertexId) -> Option<EdgeId> {
        self.pair_index.get(&(source, target)).copied()
    }

    /// Returns the weight of the edge `source -> target`, or `None` when no
    /// such edge exists.
    pub fn edge_weight(&self, source: VertexId, target: VertexId) -> Option<i64> {
        self.find_edge(source, target)
            .map(|edge| self.edges[edge.index()].weight)
    }
}

impl<T: Eq + Hash + Clone> DiGraph<T> {
    /// Adds a vertex carrying `payload`.
    ///
    /// If a vertex with an equal payload already exists, that vertex's id is
    /// returned and nothing is created. Never fails.
    pub fn add_vertex(&mut self, payload: T) -> VertexId {
        if let Some(&existing) = self.payload_index.get(&payload) {
            return existing;
        }
        let id = VertexId(self.slots.len());
        self.payload_index.insert(payload.clone(), id);
        self.slots.push(VertexSlot {
            payload,
            adjacency: Vec::new(),
        });
        id
    }

    /// Adds a directed edge between two payloads that must already be
    /// vertices of this graph.
    ///
    /// Fails with [`GraphError::VertexNotFound`] when either endpoint is
    /// absent — edges never create vertices, and the graph is left untouched.
    /// If the ordered pair already has an edge, the existing id is returned
    /// unchanged and `weight` is ignored.
    pub fn add_edge(&mut self, source: &T, target: &T, weight: i64) -> Result<EdgeId> {
        let (Some(source), Some(target)) = (self.find_vertex(source), self.find_vertex(target))
        else {
            return Err(GraphError::VertexNotFound);
        };
        Ok(self.connect(source, target, weight))
    }

    /// Adds a directed edge between two vertices already resolved to ids.
    ///
    /// Same idempotence as [`add_edge`](Self::add_edge): an existing ordered
    /// pair is returned unchanged with `weight` ignored.
    ///
    /// # Panics
    /// Panics if either id is out of bounds for this graph.
    pub fn connect(&mut self, source: VertexId, target: VertexId, weight: i64) -> EdgeId {
        assert!(
            source.index() < self.slots.len(),
            "source vertex {} out of bounds",
            source.index()
        );
        assert!(
            target.index() < self.slots.len(),
            "target vertex {} out of bounds",
            target.index()
        );
        if let Some(&existing) = self.pair_index.get(&(source, target)) {
            return existing;
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            source,
            target,
            weight,
        });
        self.pair_index.insert((source, target), id);
        self.slots[source.index()].adjacency.push(id);
        id
    }

    /// Extracts the component reachable from `start` via outgoing edges as a
    /// new graph.
    ///
    /// The copy is breadth-first over **directed adjacency** (not incidence)
    /// and contains every reached vertex together with every outgoing edge of
    /// a reached vertex, weights preserved. Returns `None` when `start` is
    /// not a vertex of this graph.
    pub fn subgraph(&self, start: &T) -> Option<DiGraph<T>> {
        let source = self.find_vertex(start)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(source = source.index(), vertices = self.vertex_count(), "subgraph");

        let mut reached = DiGraph::new();
        let mut discovered = vec![false; self.slots.len()];
        let mut queue = VecDeque::new();
        discovered[source.index()] = true;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            let image_u = reached.add_vertex(self[u].clone());
            for &edge in self.adjacency(u) {
                let edge = self.edges[edge.index()];
                let image_v = reached.add_vertex(self[edge.target].clone());
                reached.connect(image_u, image_v, edge.weight);
                if !discovered[edge.target.index()] {
                    discovered[edge.target.index()] = true;
                    queue.push_back(edge.target);
                }
            }
        }
        Some(reached)
    }
}

impl<T> Default for DiGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<VertexId> for DiGraph<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, vertex: VertexId) -> &T {
        &self.slots[vertex.index()].payload
    }
}

impl<T: fmt::Display> DiGraph<T> {
    /// Renders `edge` as `<source> --(<weight>)--> <target>`.
    pub fn edge_display(&self, edge: EdgeId) -> impl fmt::Display + '_ {
        EdgeDisplay { graph: self, edge }
    }
}

struct EdgeDisplay<'g, T> {
    graph: &'g DiGraph<T>,
    edge: EdgeId,
}

impl<T: fmt::Display> fmt::Display for EdgeDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = self.graph.edge(self.edge);
        write!(
            f,
            "{} --({})--> {}",
            self.graph[edge.source()],
            edge.weight(),
            self.graph[edge.target()]
        )
    }
}

/// One line per vertex with at least one outgoing edge, in vertex insertion
/// order: the payload, `" -> "`, then its outgoing neighbors comma-separated
/// in adjacency order.
impl<T: fmt::Display> fmt::Display for DiGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            if slot.adjacency.is_empty() {
                continue;
            }
            write!(f, "{} -> ", slot.payload)?;
            for (i, &edge) in slot.adjacency.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self[self.edges[edge.index()].target])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
