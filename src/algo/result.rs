//! Query results: accessors over finished searches
//!
//! Both solvers hand back immutable result objects. They own everything they
//! need (identity mapping, distances, last-hop links), so reading a path or a
//! distance never touches the live graph and never re-runs a search — and a
//! store mutated after the query cannot retroactively change an answer.

use super::ViewIndex;
use crate::graph::{EdgeKey, GraphError, GraphResult, NodeKey};
use serde::{Deserialize, Serialize};
use wayfinder_route_algorithms::{PairRoute, SearchTree};

/// One concrete route between two nodes
///
/// `path` holds the node sequence, endpoints included; `edge_keys` names the
/// traversed edge of each hop (`edge_keys.len() == path.len() - 1`). This is
/// the sequence handed to visualization as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route<N: NodeKey> {
    pub path: Vec<N>,
    pub edge_keys: Vec<EdgeKey>,
    pub distance: f64,
}

impl<N: NodeKey> Route<N> {
    pub(crate) fn from_pair(index: &ViewIndex<N>, pair: &PairRoute) -> Self {
        Route {
            path: pair
                .nodes
                .iter()
                .map(|&idx| index.index_to_node[idx].clone())
                .collect(),
            edge_keys: pair.slots.iter().map(|&slot| index.slot_keys[slot]).collect(),
            distance: pair.distance,
        }
    }

    /// Number of edges traversed
    pub fn hop_count(&self) -> usize {
        self.edge_keys.len()
    }
}

/// Single-source query result: distances and lazily reconstructable paths to
/// every node reached from the source.
///
/// Full paths are never stored eagerly; `path_to` follows last-hop links
/// backward on demand. All reads are pure and idempotent.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N: NodeKey> {
    source: N,
    index: ViewIndex<N>,
    tree: SearchTree,
}

impl<N: NodeKey> ShortestPathTree<N> {
    pub(crate) fn new(index: ViewIndex<N>, tree: SearchTree) -> Self {
        ShortestPathTree {
            source: index.index_to_node[tree.source].clone(),
            index,
            tree,
        }
    }

    /// The node the query started from
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Minimum distance from the source; `f64::INFINITY` for nodes the search
    /// never reached (or that were not in the graph at query time)
    pub fn distance_to(&self, node: &N) -> f64 {
        match self.index.node_to_index.get(node) {
            Some(&idx) => self.tree.distance(idx),
            None => f64::INFINITY,
        }
    }

    /// Whether the search reached this node
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance_to(node).is_finite()
    }

    /// Node sequence of a minimum path from the source to `node`.
    ///
    /// Fails with `Unreachable` for nodes the search never settled.
    pub fn path_to(&self, node: &N) -> GraphResult<Vec<N>, N> {
        let idx = match self.index.node_to_index.get(node) {
            Some(&idx) => idx,
            None => return Err(GraphError::Unreachable(node.clone())),
        };

        self.tree
            .path(idx)
            .map(|path| {
                path.into_iter()
                    .map(|step| self.index.index_to_node[step].clone())
                    .collect()
            })
            .ok_or_else(|| GraphError::Unreachable(node.clone()))
    }

    /// Full route to `node`: path, traversed edge keys, and distance
    pub fn route_to(&self, node: &N) -> GraphResult<Route<N>, N> {
        let path = self.path_to(node)?;
        let idx = self.index.node_to_index[node];
        let edge_keys = self
            .tree
            .hops(idx)
            .map(|slots| {
                slots
                    .into_iter()
                    .map(|slot| self.index.slot_keys[slot])
                    .collect()
            })
            .unwrap_or_default();

        Ok(Route {
            path,
            edge_keys,
            distance: self.tree.distance(idx),
        })
    }

    /// Iterate `(node, distance)` over every node the search reached
    pub fn distances(&self) -> impl Iterator<Item = (&N, f64)> {
        self.tree
            .dist
            .iter()
            .enumerate()
            .filter(|(_, distance)| distance.is_finite())
            .map(|(idx, &distance)| (&self.index.index_to_node[idx], distance))
    }

    /// Number of nodes the search reached
    pub fn reached_count(&self) -> usize {
        self.tree.reached_count()
    }
}
