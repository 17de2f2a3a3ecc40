//! Routing graph data model
//!
//! Implements the directed multigraph the solvers run against:
//! - caller-chosen node identifiers (any `Eq + Hash + Clone + Debug` type)
//! - weighted directed edges, with parallel edges per node pair told apart
//!   by keys
//! - auxiliary attribute bags on edges, opaque to the solvers
//! - in-memory storage with hash-based adjacency and stable iteration order

pub mod attr;
pub mod edge;
pub mod store;
pub mod types;

// Re-export main types
pub use attr::{AttrMap, AttrValue};
pub use edge::Edge;
pub use store::{GraphError, GraphResult, RouteGraph};
pub use types::{EdgeKey, NodeKey};
