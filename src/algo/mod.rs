//! Shortest-path queries over a [`RouteGraph`]
//!
//! Algorithms are implemented in the `wayfinder-route-algorithms` crate over
//! dense integer indices. This module provides the integration/adapter layer:
//! it maps caller node identifiers onto a snapshot view, runs the kernel, and
//! wraps the outcome in typed result accessors.

pub mod result;

use crate::graph::{EdgeKey, GraphError, GraphResult, NodeKey, RouteGraph};
use rustc_hash::FxHashMap;
use std::sync::atomic::AtomicBool;
use tracing::debug;

// Re-export the kernel surface for callers working on dense views directly
pub use wayfinder_route_algorithms::{
    dijkstra, dijkstra_bidir, FrontierQueue, PairRoute, SearchError, SearchTree, SearchView,
};

pub use result::{Route, ShortestPathTree};

/// Identity mapping between caller node identifiers and the dense indices of
/// one snapshot view
#[derive(Debug, Clone)]
pub struct ViewIndex<N: NodeKey> {
    /// Dense index -> node identifier
    pub index_to_node: Vec<N>,
    /// Node identifier -> dense index
    pub node_to_index: FxHashMap<N, usize>,
    /// CSR slot -> key of the parallel edge the slot represents
    pub slot_keys: Vec<EdgeKey>,
}

/// Build a dense snapshot view of the graph for algorithm execution.
///
/// Node indices follow the store's stable node order and slots follow
/// adjacency insertion order, so the same store always yields the same view.
/// Each ordered node pair contributes exactly one slot, carrying its cheapest
/// parallel edge (ties broken by lowest key): dominated parallel edges never
/// reach the solvers. The query runs wholly against this snapshot, which is
/// why results do not observe store mutation after the call.
pub fn build_view<N: NodeKey>(graph: &RouteGraph<N>) -> (SearchView, ViewIndex<N>) {
    let node_count = graph.node_count();

    let mut index_to_node = Vec::with_capacity(node_count);
    let mut node_to_index =
        FxHashMap::with_capacity_and_hasher(node_count, Default::default());
    for node in graph.nodes() {
        node_to_index.insert(node.clone(), index_to_node.len());
        index_to_node.push(node.clone());
    }

    let mut out_offsets = Vec::with_capacity(node_count + 1);
    let mut out_targets = Vec::new();
    let mut out_weights = Vec::new();
    let mut slot_keys = Vec::new();

    out_offsets.push(0);
    for node in &index_to_node {
        for child in graph.children_of(node).into_iter().flatten() {
            if let Some(edge) = graph.cheapest_edge_between(node, child) {
                out_targets.push(node_to_index[child]);
                out_weights.push(edge.weight);
                slot_keys.push(edge.key);
            }
        }
        out_offsets.push(out_targets.len());
    }

    let (in_offsets, in_sources, in_slots) =
        wayfinder_route_algorithms::reverse_index(node_count, &out_offsets, &out_targets);

    let view = SearchView {
        node_count,
        out_offsets,
        out_targets,
        out_weights,
        in_offsets,
        in_sources,
        in_slots,
    };
    let index = ViewIndex {
        index_to_node,
        node_to_index,
        slot_keys,
    };

    (view, index)
}

/// Run a single-source query: distances and paths from `source` to every
/// reachable node.
///
/// Fails with `UnknownNode` if `source` is not registered.
pub fn shortest_path_from<N: NodeKey>(
    graph: &RouteGraph<N>,
    source: &N,
) -> GraphResult<ShortestPathTree<N>, N> {
    run_single_source(graph, source, None)
}

/// [`shortest_path_from`] with a cooperative interrupt flag, checked between
/// node settlements. Raising the flag aborts the query with `Interrupted`.
pub fn shortest_path_from_with_interrupt<N: NodeKey>(
    graph: &RouteGraph<N>,
    source: &N,
    interrupt: &AtomicBool,
) -> GraphResult<ShortestPathTree<N>, N> {
    run_single_source(graph, source, Some(interrupt))
}

/// Run a point-to-point query for one `(source, target)` pair using
/// bidirectional search.
///
/// Returns `Ok(None)` when `target` is unreachable from `source`; absence of
/// a path is an ordinary outcome, not a fault. Fails with `UnknownNode` if
/// either endpoint is not registered.
pub fn shortest_path_between<N: NodeKey>(
    graph: &RouteGraph<N>,
    source: &N,
    target: &N,
) -> GraphResult<Option<Route<N>>, N> {
    run_point_to_point(graph, source, target, None)
}

/// [`shortest_path_between`] with a cooperative interrupt flag, checked
/// between node settlements.
pub fn shortest_path_between_with_interrupt<N: NodeKey>(
    graph: &RouteGraph<N>,
    source: &N,
    target: &N,
    interrupt: &AtomicBool,
) -> GraphResult<Option<Route<N>>, N> {
    run_point_to_point(graph, source, target, Some(interrupt))
}

fn run_single_source<N: NodeKey>(
    graph: &RouteGraph<N>,
    source: &N,
    interrupt: Option<&AtomicBool>,
) -> GraphResult<ShortestPathTree<N>, N> {
    if !graph.contains_node(source) {
        return Err(GraphError::UnknownNode(source.clone()));
    }

    let (view, index) = build_view(graph);
    let tree = dijkstra(&view, index.node_to_index[source], interrupt)
        .map_err(map_search_error)?;

    debug!(
        "single-source query from {:?} reached {} of {} nodes",
        source,
        tree.reached_count(),
        view.node_count
    );

    Ok(ShortestPathTree::new(index, tree))
}

fn run_point_to_point<N: NodeKey>(
    graph: &RouteGraph<N>,
    source: &N,
    target: &N,
    interrupt: Option<&AtomicBool>,
) -> GraphResult<Option<Route<N>>, N> {
    if !graph.contains_node(source) {
        return Err(GraphError::UnknownNode(source.clone()));
    }
    if !graph.contains_node(target) {
        return Err(GraphError::UnknownNode(target.clone()));
    }

    let (view, index) = build_view(graph);
    let outcome = dijkstra_bidir(
        &view,
        index.node_to_index[source],
        index.node_to_index[target],
        interrupt,
    )
    .map_err(map_search_error)?;

    match outcome {
        Some(pair) => {
            debug!(
                "point-to-point query {:?} -> {:?}: distance {} via {:?}",
                source, target, pair.distance, index.index_to_node[pair.meeting]
            );
            Ok(Some(Route::from_pair(&index, &pair)))
        }
        None => {
            debug!("point-to-point query {:?} -> {:?}: no path", source, target);
            Ok(None)
        }
    }
}

fn map_search_error<N: NodeKey>(err: SearchError) -> GraphError<N> {
    match err {
        SearchError::NegativeWeight { weight, .. } => GraphError::NegativeWeight(weight),
        SearchError::Interrupted => GraphError::Interrupted,
    }
}
