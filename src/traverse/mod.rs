//! Traversal engines over [`DiGraph`](crate::DiGraph).
//!
//! Every vertex reached by a traversal cycles through three stages —
//! unvisited, visited (discovered but not yet expanded), finished (all
//! neighbors considered) — tracked in scratch owned by the call, never in
//! the graph. Unreached vertices simply stay unvisited.
//!
//! ## Neighbor modes
//!
//! The engines intentionally expand neighbors in two different ways:
//!
//! - **Reachability incidence** — a directed edge is walkable from either
//!   endpoint. Used by the plain breadth-first sweep
//!   ([`DiGraph::bfs`](crate::DiGraph::bfs)), which answers "what is
//!   connected to this vertex at all".
//! - **Directed adjacency** — only outgoing edges are followed. Used by
//!   distance labeling
//!   ([`DiGraph::bfs_distances`](crate::DiGraph::bfs_distances)), the
//!   depth-first descent ([`DiGraph::dfs`](crate::DiGraph::dfs)) and its
//!   whole-graph forest form
//!   ([`DiGraph::dfs_forest`](crate::DiGraph::dfs_forest)).
//!
//! The asymmetry is part of the contract, not an accident; callers picking a
//! traversal pick a mode with it.
//!
//! ## Eager and replayed forms
//!
//! The eager methods return their trace as a `Vec` in one call. The sequence
//! types ([`BfsIter`], [`DfsIter`]) precompute the same run at construction
//! time and replay it through the [`Iterator`] contract, yielding vertices in
//! **finish order**: for the FIFO sweep that equals the eager dequeue trace,
//! but for depth-first it is post-recursion order, not the eager pre-order.

mod visit;

pub mod bfs;
pub mod dfs;

pub use bfs::{BfsIter, DistanceMap};
pub use dfs::DfsIter;
