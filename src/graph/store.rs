//! In-memory routing graph storage
//!
//! A directed multigraph: nodes are caller-chosen identifiers, and any
//! ordered node pair may carry several parallel edges told apart by an
//! [`EdgeKey`]. Hash maps give O(1) lookup on the hot paths; insertion-ordered
//! maps keep `nodes()` and adjacency iteration stable for the lifetime of the
//! store, which in turn keeps query results reproducible run to run.
//!
//! The store is caller-owned and passed to the solvers by reference; there is
//! no process-wide instance. Mutations are rejected atomically: a failed
//! insertion leaves the store exactly as it was.

use super::attr::AttrMap;
use super::edge::Edge;
use super::types::{EdgeKey, NodeKey};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors that can occur during graph operations and queries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError<N: NodeKey> {
    #[error("node {0:?} already exists")]
    DuplicateNode(N),

    #[error("edge ({0:?} -> {1:?}, {2}) already exists")]
    DuplicateEdge(N, N, EdgeKey),

    #[error("node {0:?} does not exist")]
    UnknownNode(N),

    #[error("edge ({0:?} -> {1:?}, {2}) does not exist")]
    UnknownEdge(N, N, EdgeKey),

    #[error("no edge connects {0:?} to {1:?}")]
    NoEdgeBetween(N, N),

    #[error("edge weight {0} is not a non-negative real number")]
    NegativeWeight(f64),

    #[error("node {0:?} was not reached from the search source")]
    Unreachable(N),

    #[error("query interrupted")]
    Interrupted,
}

pub type GraphResult<T, N> = Result<T, GraphError<N>>;

/// Directed multigraph with weighted, keyed edges
///
/// Layout:
/// - `nodes`: insertion-ordered registry of node identifiers
/// - `outgoing`: src -> dst -> key -> edge (parallel edges nested per pair)
/// - `incoming`: dst -> set of srcs (reverse adjacency for backward search)
#[derive(Debug, Clone)]
pub struct RouteGraph<N: NodeKey> {
    nodes: IndexSet<N>,
    outgoing: FxHashMap<N, IndexMap<N, IndexMap<EdgeKey, Edge>>>,
    incoming: FxHashMap<N, IndexSet<N>>,
    edge_count: usize,
}

impl<N: NodeKey> RouteGraph<N> {
    /// Create a new empty graph
    pub fn new() -> Self {
        RouteGraph {
            nodes: IndexSet::new(),
            outgoing: FxHashMap::default(),
            incoming: FxHashMap::default(),
            edge_count: 0,
        }
    }

    /// Register a node identifier.
    ///
    /// Fails with `DuplicateNode` if the identifier is already registered.
    pub fn insert_node(&mut self, node: N) -> GraphResult<(), N> {
        if self.nodes.contains(&node) {
            return Err(GraphError::DuplicateNode(node));
        }

        self.outgoing.insert(node.clone(), IndexMap::new());
        self.incoming.insert(node.clone(), IndexSet::new());
        self.nodes.insert(node);
        Ok(())
    }

    /// Register an edge with an empty attribute bag. See
    /// [`insert_edge_with_attrs`](Self::insert_edge_with_attrs).
    pub fn insert_edge(
        &mut self,
        src: N,
        dst: N,
        key: impl Into<EdgeKey>,
        weight: f64,
    ) -> GraphResult<(), N> {
        self.insert_edge_with_attrs(src, dst, key, weight, AttrMap::new())
    }

    /// Register an edge under the triple (src, dst, key).
    ///
    /// Both endpoints must already be registered (`UnknownNode` otherwise;
    /// edges never auto-create nodes). The weight must be a non-negative
    /// finite number (`NegativeWeight`; NaN would poison every relaxation
    /// comparison, so it is rejected under the same variant). A repeated
    /// triple fails with `DuplicateEdge`. Any failure leaves the store
    /// unchanged.
    pub fn insert_edge_with_attrs(
        &mut self,
        src: N,
        dst: N,
        key: impl Into<EdgeKey>,
        weight: f64,
        attrs: AttrMap,
    ) -> GraphResult<(), N> {
        let key = key.into();

        if !self.nodes.contains(&src) {
            return Err(GraphError::UnknownNode(src));
        }
        if !self.nodes.contains(&dst) {
            return Err(GraphError::UnknownNode(dst));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::NegativeWeight(weight));
        }

        let parallel = match self.outgoing.get_mut(&src) {
            Some(targets) => targets.entry(dst.clone()).or_default(),
            None => return Err(GraphError::UnknownNode(src)),
        };
        if parallel.contains_key(&key) {
            return Err(GraphError::DuplicateEdge(src, dst, key));
        }
        parallel.insert(key, Edge::new_with_attrs(key, weight, attrs));

        if let Some(sources) = self.incoming.get_mut(&dst) {
            sources.insert(src);
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Distinct nodes reachable over one outgoing edge.
    ///
    /// Fails with `UnknownNode` for an unregistered node; a registered node
    /// without outgoing edges yields an empty iterator.
    pub fn children_of<'a>(&'a self, node: &N) -> GraphResult<impl Iterator<Item = &'a N>, N> {
        self.outgoing
            .get(node)
            .map(|targets| targets.keys())
            .ok_or_else(|| GraphError::UnknownNode(node.clone()))
    }

    /// Distinct nodes with an edge into `node`; symmetric to `children_of`
    pub fn parents_of<'a>(&'a self, node: &N) -> GraphResult<impl Iterator<Item = &'a N>, N> {
        self.incoming
            .get(node)
            .map(|sources| sources.iter())
            .ok_or_else(|| GraphError::UnknownNode(node.clone()))
    }

    /// All parallel edges from `src` to `dst`, in key insertion order.
    ///
    /// Empty when the pair is unconnected or either endpoint is unknown;
    /// absence of edges is an ordinary answer, not an error.
    pub fn edges_between<'a>(&'a self, src: &N, dst: &N) -> impl Iterator<Item = &'a Edge> {
        self.outgoing
            .get(src)
            .and_then(|targets| targets.get(dst))
            .into_iter()
            .flat_map(|parallel| parallel.values())
    }

    /// Look up one edge by its full triple; `UnknownEdge` when absent
    pub fn edge(&self, src: &N, dst: &N, key: impl Into<EdgeKey>) -> GraphResult<&Edge, N> {
        let key = key.into();
        self.outgoing
            .get(src)
            .and_then(|targets| targets.get(dst))
            .and_then(|parallel| parallel.get(&key))
            .ok_or_else(|| GraphError::UnknownEdge(src.clone(), dst.clone(), key))
    }

    /// Attribute bag of the edge (src, dst, key); `UnknownEdge` when absent
    pub fn edge_data(&self, src: &N, dst: &N, key: impl Into<EdgeKey>) -> GraphResult<&AttrMap, N> {
        self.edge(src, dst, key).map(|edge| &edge.attrs)
    }

    /// Traversal weight of the edge (src, dst, key); `UnknownEdge` when absent
    pub fn weight_of(&self, src: &N, dst: &N, key: impl Into<EdgeKey>) -> GraphResult<f64, N> {
        self.edge(src, dst, key).map(|edge| edge.weight)
    }

    /// The parallel edge the solvers would traverse for this pair: minimum
    /// weight, ties broken by lowest key. `None` when the pair is unconnected.
    pub fn cheapest_edge_between(&self, src: &N, dst: &N) -> Option<&Edge> {
        let mut best: Option<&Edge> = None;
        for edge in self.edges_between(src, dst) {
            let better = match best {
                None => true,
                Some(current) => {
                    edge.weight < current.weight
                        || (edge.weight == current.weight && edge.key < current.key)
                }
            };
            if better {
                best = Some(edge);
            }
        }
        best
    }

    /// Restartable iterator over all node identifiers, in insertion order
    /// (stable for the lifetime of the store)
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Check whether a node identifier is registered
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of registered edges, parallel edges counted individually
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Total traversal weight along a node path, hop by hop over the cheapest
    /// parallel edge.
    ///
    /// Fails with `UnknownNode` for an unregistered node on the path and
    /// `NoEdgeBetween` for a consecutive pair with no connecting edge. A path
    /// of one node (or none) costs zero.
    pub fn path_weight_total(&self, path: &[N]) -> GraphResult<f64, N> {
        let mut total = 0.0;
        for edge in self.path_edges(path)? {
            total += edge.weight;
        }
        Ok(total)
    }

    /// Total of a numeric attribute along a node path, hop by hop over the
    /// cheapest parallel edge (e.g. a travel-time metric stored alongside the
    /// cost weight).
    ///
    /// Returns `Ok(None)` when any hop's cheapest edge lacks a numeric value
    /// for `attr` — a partial sum would misrepresent the path. Path and edge
    /// failures are the same as for [`path_weight_total`](Self::path_weight_total).
    pub fn path_attr_total(&self, path: &[N], attr: &str) -> GraphResult<Option<f64>, N> {
        let mut total = 0.0;
        for edge in self.path_edges(path)? {
            match edge.get_attr(attr).and_then(|value| value.as_number()) {
                Some(value) => total += value,
                None => return Ok(None),
            }
        }
        Ok(Some(total))
    }

    /// Resolve a node path to the cheapest edge of each hop
    fn path_edges(&self, path: &[N]) -> GraphResult<Vec<&Edge>, N> {
        for node in path {
            if !self.nodes.contains(node) {
                return Err(GraphError::UnknownNode(node.clone()));
            }
        }

        let mut edges = Vec::with_capacity(path.len().saturating_sub(1));
        for pair in path.windows(2) {
            let edge = self
                .cheapest_edge_between(&pair[0], &pair[1])
                .ok_or_else(|| GraphError::NoEdgeBetween(pair[0].clone(), pair[1].clone()))?;
            edges.push(edge);
        }
        Ok(edges)
    }
}

impl<N: NodeKey> Default for RouteGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
