//! # `arbor` - Payload-Keyed Directed Graphs
//!
//! A dynamic directed-graph container whose vertices are identified by
//! **payload equality**: inserting an equal payload twice always yields the
//! same vertex, and at most one edge exists per ordered vertex pair. On top
//! of the container sit two traversal engines — breadth-first and
//! depth-first — each available both as an eager algorithm returning its
//! trace and as a restartable pull-based sequence over visited vertices.
//!
//! ## Key Features
//!
//! - **Idempotent construction**: `add_vertex`/`add_edge` on an existing key
//!   are no-ops returning the existing entity, backed by hash indexes for
//!   near-constant lookup.
//! - **Two neighbor modes**: the plain breadth-first sweep explores
//!   *reachability incidence* (edges treated as bidirectional), while
//!   distance labeling and depth-first descent follow *directed adjacency*
//!   only. See the [`traverse`] module for the distinction.
//! - **Transient traversal state**: visitation stages and hop distances live
//!   in per-call scratch, never in the graph, so traversals over a shared
//!   borrow may overlap freely and no reset step exists.
//! - **Derived graphs**: breadth-first subgraph extraction and depth-first
//!   forest pruning both produce new, independently owned graphs.
//!
//! ## Example
//!
//! ```rust
//! use arbor::DiGraph;
//!
//! let mut graph = DiGraph::new();
//! graph.add_vertex("a");
//! graph.add_vertex("b");
//! graph.add_vertex("c");
//! graph.add_edge(&"a", &"b", 1).unwrap();
//! graph.add_edge(&"b", &"c", 1).unwrap();
//!
//! let order = graph.dfs(&"a").unwrap();
//! let names: Vec<_> = order.into_iter().map(|v| graph[v]).collect();
//! assert_eq!(names, ["a", "b", "c"]);
//! ```
//!
//! ## Concurrency Model
//!
//! Single-threaded and synchronous. Mutation requires `&mut DiGraph<T>`;
//! every traversal takes `&self` and owns its bookkeeping, so the borrow
//! checker rules out traversal-vs-mutation races outright. There are no
//! blocking operations: a traversal always runs to completion over the
//! reachable set, bounded by vertex and edge counts.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod digraph;
pub mod error;
pub mod traverse;

pub use digraph::{DiGraph, Edge, EdgeId, VertexId};
pub use error::GraphError;
pub use traverse::{BfsIter, DfsIter, DistanceMap};

// Compile-time layout checks: the id newtypes must stay free wrappers.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<VertexId>() == mem::size_of::<usize>());
    assert!(mem::align_of::<VertexId>() == mem::align_of::<usize>());
    assert!(mem::size_of::<EdgeId>() == mem::size_of::<usize>());
};
