//! Shared search-view structure for the shortest-path solvers
//!
//! Provides a read-only, dense snapshot of the graph topology for one query.
//! The owning store maps its node identifiers onto the indices `0..node_count`
//! before a search and maps them back afterwards; the kernel never sees them.

use std::collections::HashMap;
use std::ops::Range;

/// A dense, integer-indexed snapshot of the graph topology in Compressed
/// Sparse Row (CSR) form.
///
/// Invariants expected by the solvers:
/// - exactly one slot per ordered `(source, target)` pair: parallel edges are
///   collapsed to the cheapest one before the view is built, so a dominated
///   parallel edge can never take part in relaxation;
/// - the reverse index mirrors the forward one slot for slot, so backward
///   expansion reads the same weight array and records forward-oriented hops.
pub struct SearchView {
    /// Number of nodes
    pub node_count: usize,

    /// Outgoing CSR structure: offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices ("slots")
    pub out_targets: Vec<usize>,
    /// Traversal weight per slot, aligned with `out_targets`
    pub out_weights: Vec<f64>,

    /// Incoming CSR structure: offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,
    /// For each incoming entry, the forward slot it mirrors
    pub in_slots: Vec<usize>,
}

impl SearchView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Slot range of a node's outgoing edges
    pub fn out_range(&self, idx: usize) -> Range<usize> {
        self.out_offsets[idx]..self.out_offsets[idx + 1]
    }

    /// Entry range of a node's incoming edges
    pub fn in_range(&self, idx: usize) -> Range<usize> {
        self.in_offsets[idx]..self.in_offsets[idx + 1]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.out_targets[self.out_range(idx)]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        &self.in_sources[self.in_range(idx)]
    }

    /// Get weights for outgoing edges of a node
    pub fn weights(&self, idx: usize) -> &[f64] {
        &self.out_weights[self.out_range(idx)]
    }

    /// Build a view from a plain edge list (test and adapter support).
    ///
    /// Edges repeating an ordered `(source, target)` pair are collapsed to the
    /// cheapest occurrence, upholding the one-slot-per-pair invariant. Slot
    /// order follows first appearance in `edges`, so views built from the same
    /// list are identical run to run.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut targets: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut weights: Vec<Vec<f64>> = vec![Vec::new(); node_count];
        let mut positions: HashMap<(usize, usize), usize> = HashMap::with_capacity(edges.len());

        for &(src, dst, weight) in edges {
            match positions.get(&(src, dst)) {
                Some(&pos) => {
                    if weight < weights[src][pos] {
                        weights[src][pos] = weight;
                    }
                }
                None => {
                    positions.insert((src, dst), targets[src].len());
                    targets[src].push(dst);
                    weights[src].push(weight);
                }
            }
        }

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut out_weights = Vec::new();

        out_offsets.push(0);
        for (row_targets, row_weights) in targets.into_iter().zip(weights) {
            out_targets.extend(row_targets);
            out_weights.extend(row_weights);
            out_offsets.push(out_targets.len());
        }

        let (in_offsets, in_sources, in_slots) =
            reverse_index(node_count, &out_offsets, &out_targets);

        SearchView {
            node_count,
            out_offsets,
            out_targets,
            out_weights,
            in_offsets,
            in_sources,
            in_slots,
        }
    }
}

/// Derive the incoming CSR structure from a forward one.
///
/// Incoming entries for a node are ordered by forward slot, which keeps the
/// reverse index deterministic for a given forward layout.
pub fn reverse_index(
    node_count: usize,
    out_offsets: &[usize],
    out_targets: &[usize],
) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
    let mut incoming: Vec<Vec<(usize, usize)>> = vec![Vec::new(); node_count];

    for src in 0..node_count {
        for slot in out_offsets[src]..out_offsets[src + 1] {
            incoming[out_targets[slot]].push((src, slot));
        }
    }

    let mut in_offsets = Vec::with_capacity(node_count + 1);
    let mut in_sources = Vec::new();
    let mut in_slots = Vec::new();

    in_offsets.push(0);
    for entries in incoming {
        for (src, slot) in entries {
            in_sources.push(src);
            in_slots.push(slot);
        }
        in_offsets.push(in_sources.len());
    }

    (in_offsets, in_sources, in_slots)
}
