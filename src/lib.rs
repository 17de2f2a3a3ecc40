//! Wayfinder Routing Core
//!
//! The shortest-path kernel of a logistics/routing application: a directed
//! multigraph store plus single-source and point-to-point Dijkstra solvers.
//! The caller builds a [`RouteGraph`], populates it from its map-data
//! provider, and queries travel costs and concrete routes for its trip/tour
//! model; route geometries fall out of the same results for visualization.
//!
//! # Architecture
//!
//! - `graph` — the caller-owned store: nodes are any hashable identifier,
//!   edges are weighted, keyed (parallel-edge capable), and carry opaque
//!   attribute bags.
//! - `algo` — the adapter layer mapping the store onto a dense snapshot view
//!   and back; the actual frontier expansion lives in the
//!   `wayfinder-route-algorithms` crate.
//!
//! The core performs no I/O, holds no global state, and runs each query to
//! completion synchronously. Independent queries over a store that is no
//! longer being mutated may run in parallel from separate threads; mutating
//! the store mid-query is not supported.
//!
//! # Example Usage
//!
//! ```rust
//! use wayfinder::graph::RouteGraph;
//! use wayfinder::algo::{shortest_path_between, shortest_path_from};
//!
//! let mut graph = RouteGraph::new();
//! for node in ["depot", "north", "harbor"] {
//!     graph.insert_node(node).unwrap();
//! }
//! graph.insert_edge("depot", "north", 0u64, 4.0).unwrap();
//! graph.insert_edge("north", "harbor", 0u64, 3.0).unwrap();
//! graph.insert_edge("depot", "harbor", 0u64, 9.5).unwrap();
//!
//! // One origin, every destination
//! let tree = shortest_path_from(&graph, &"depot").unwrap();
//! assert_eq!(tree.distance_to(&"harbor"), 7.0);
//! assert_eq!(tree.path_to(&"harbor").unwrap(), vec!["depot", "north", "harbor"]);
//!
//! // One origin/destination pair
//! let route = shortest_path_between(&graph, &"depot", &"harbor")
//!     .unwrap()
//!     .expect("harbor is reachable");
//! assert_eq!(route.distance, 7.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    AttrMap, AttrValue, Edge, EdgeKey, GraphError, GraphResult, NodeKey, RouteGraph,
};

pub use algo::{
    build_view, shortest_path_between, shortest_path_between_with_interrupt,
    shortest_path_from, shortest_path_from_with_interrupt, Route, ShortestPathTree,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
