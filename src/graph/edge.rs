//! Edge representation for the routing graph
//!
//! An edge is identified by the ordered triple (source, destination, key);
//! the key disambiguates parallel edges between the same node pair. The
//! store indexes edges by that triple, so the struct itself carries only the
//! per-edge payload: the traversal weight and the auxiliary attribute bag.

use super::attr::{AttrMap, AttrValue};
use super::types::EdgeKey;
use serde::{Deserialize, Serialize};

/// One directed, weighted connection between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Disambiguating key within the ordered (source, destination) pair
    pub key: EdgeKey,

    /// Non-negative traversal cost used for shortest-path relaxation
    pub weight: f64,

    /// Caller-defined attributes, opaque to the solvers
    pub attrs: AttrMap,
}

impl Edge {
    /// Create an edge with an empty attribute bag
    pub fn new(key: impl Into<EdgeKey>, weight: f64) -> Self {
        Edge {
            key: key.into(),
            weight,
            attrs: AttrMap::new(),
        }
    }

    /// Create an edge carrying attributes
    pub fn new_with_attrs(key: impl Into<EdgeKey>, weight: f64, attrs: AttrMap) -> Self {
        Edge {
            key: key.into(),
            weight,
            attrs,
        }
    }

    /// Set an attribute value
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Number of attributes on this edge
    pub fn attr_count(&self) -> usize {
        self.attrs.len()
    }
}
