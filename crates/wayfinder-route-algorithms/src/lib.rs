//! Shortest-path search kernel for the Wayfinder routing core
//!
//! Operates on a dense, integer-indexed snapshot of a graph ([`SearchView`]);
//! the owning store maps its node identifiers to indices before a query and
//! back afterwards. The kernel carries no logging, no storage, and no node
//! identity of its own.

pub mod common;
pub mod dijkstra;
pub mod queue;

pub use common::{reverse_index, SearchView};
pub use dijkstra::{dijkstra, dijkstra_bidir, PairRoute, SearchError, SearchTree};
pub use queue::FrontierQueue;
