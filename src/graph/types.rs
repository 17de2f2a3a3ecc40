//! Core type definitions for the routing graph

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Marker trait for node identifiers.
///
/// The store is reusable across integer, string, or composite node spaces;
/// anything equality-comparable, hashable, cloneable, and debug-printable
/// qualifies, and the blanket impl makes that automatic.
pub trait NodeKey: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> NodeKey for T {}

/// Disambiguating key for parallel edges between one ordered node pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeKey(pub u64);

impl EdgeKey {
    pub fn new(key: u64) -> Self {
        EdgeKey(key)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeKey({})", self.0)
    }
}

impl From<u64> for EdgeKey {
    fn from(key: u64) -> Self {
        EdgeKey(key)
    }
}
