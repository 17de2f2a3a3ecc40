//! Shortest-path solvers over a [`SearchView`]
//!
//! Implements label-setting Dijkstra from one source and the bidirectional
//! point-to-point variant. Both record last hops as `(parent, slot)` pairs so
//! a concrete path is reconstructed lazily instead of being stored per node.

use super::common::SearchView;
use super::queue::FrontierQueue;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Errors surfaced by the solvers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Relaxation met an edge with a negative weight; the optimality argument
    /// no longer holds, so no partial result is returned.
    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: usize,
        to: usize,
        weight: f64,
    },

    /// The caller's interrupt flag was raised between settlements.
    #[error("search interrupted")]
    Interrupted,
}

/// Single-source search result: distance and last hop per reached node.
///
/// `parent[v]` holds the predecessor index and the forward slot of the edge
/// that realized `dist[v]`; the source itself has no parent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchTree {
    pub source: usize,
    pub dist: Vec<f64>,
    pub parent: Vec<Option<(usize, usize)>>,
}

impl SearchTree {
    /// Minimum distance from the source, `f64::INFINITY` when unreached
    pub fn distance(&self, node: usize) -> f64 {
        self.dist.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Whether the search reached (and settled) this node
    pub fn is_reached(&self, node: usize) -> bool {
        self.distance(node).is_finite()
    }

    /// Node sequence from the source to `node`, or `None` when unreached
    pub fn path(&self, node: usize) -> Option<Vec<usize>> {
        if !self.is_reached(node) {
            return None;
        }

        let mut path = vec![node];
        let mut current = node;
        while let Some((parent, _)) = self.parent[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// Forward slots of the edges along `path(node)`, or `None` when unreached
    pub fn hops(&self, node: usize) -> Option<Vec<usize>> {
        if !self.is_reached(node) {
            return None;
        }

        let mut slots = Vec::new();
        let mut current = node;
        while let Some((parent, slot)) = self.parent[current] {
            slots.push(slot);
            current = parent;
        }
        slots.reverse();
        Some(slots)
    }

    /// Number of nodes the search reached
    pub fn reached_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_finite()).count()
    }
}

/// Point-to-point search result for one `(source, target)` pair
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairRoute {
    /// Total traversal cost of the route
    pub distance: f64,
    /// Node sequence from source to target, endpoints included
    pub nodes: Vec<usize>,
    /// Forward slot per hop; `slots.len() == nodes.len() - 1`
    pub slots: Vec<usize>,
    /// The node where the two expansions met on the optimal route
    pub meeting: usize,
}

fn interrupted(flag: Option<&AtomicBool>) -> bool {
    flag.is_some_and(|f| f.load(Ordering::Relaxed))
}

/// Dijkstra's algorithm from `source` over the whole view.
///
/// Classic label-setting expansion: repeatedly settle the unsettled node with
/// the smallest tentative distance and relax its outgoing slots. Stale queue
/// entries left behind by re-pushes are discarded when popped. `interrupt` is
/// checked once per settlement.
pub fn dijkstra(
    view: &SearchView,
    source: usize,
    interrupt: Option<&AtomicBool>,
) -> Result<SearchTree, SearchError> {
    debug_assert!(source < view.node_count);

    let mut dist = vec![f64::INFINITY; view.node_count];
    let mut parent: Vec<Option<(usize, usize)>> = vec![None; view.node_count];
    let mut frontier = FrontierQueue::with_capacity(view.node_count);

    dist[source] = 0.0;
    frontier.push(source, 0.0);

    while let Some((node, cost)) = frontier.pop() {
        if cost > dist[node] {
            continue; // superseded by a cheaper re-push
        }
        if interrupted(interrupt) {
            return Err(SearchError::Interrupted);
        }

        for slot in view.out_range(node) {
            let next = view.out_targets[slot];
            let weight = view.out_weights[slot];
            if weight < 0.0 {
                return Err(SearchError::NegativeWeight {
                    from: node,
                    to: next,
                    weight,
                });
            }

            let candidate = cost + weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                parent[next] = Some((node, slot));
                frontier.push(next, candidate);
            }
        }
    }

    Ok(SearchTree {
        source,
        dist,
        parent,
    })
}

/// Bidirectional Dijkstra between one `(source, target)` pair.
///
/// Expands a forward frontier from `source` over outgoing slots and a
/// backward frontier from `target` over the reverse index, always growing the
/// side whose frontier minimum is smaller. Any node holding a finite distance
/// from both sides is a meeting candidate scored `dist_fwd + dist_bwd`; the
/// first frontier intersection is NOT sufficient, so expansion continues until
/// no remaining frontier work can beat the best candidate:
/// `min_fwd + min_bwd >= best` while both frontiers live, or the surviving
/// minimum alone reaching `best` once one side is exhausted.
///
/// Returns `Ok(None)` when the searches never meet, i.e. `target` is
/// unreachable from `source`.
pub fn dijkstra_bidir(
    view: &SearchView,
    source: usize,
    target: usize,
    interrupt: Option<&AtomicBool>,
) -> Result<Option<PairRoute>, SearchError> {
    debug_assert!(source < view.node_count);
    debug_assert!(target < view.node_count);

    let mut dist_fwd = vec![f64::INFINITY; view.node_count];
    let mut dist_bwd = vec![f64::INFINITY; view.node_count];
    let mut parent_fwd: Vec<Option<(usize, usize)>> = vec![None; view.node_count];
    let mut parent_bwd: Vec<Option<(usize, usize)>> = vec![None; view.node_count];
    let mut fwd = FrontierQueue::new();
    let mut bwd = FrontierQueue::new();

    dist_fwd[source] = 0.0;
    fwd.push(source, 0.0);
    dist_bwd[target] = 0.0;
    bwd.push(target, 0.0);

    let mut best = f64::INFINITY;
    let mut meeting = None;
    if source == target {
        best = 0.0;
        meeting = Some(source);
    }

    loop {
        if interrupted(interrupt) {
            return Err(SearchError::Interrupted);
        }

        let front_fwd = fwd.peek_priority();
        let front_bwd = bwd.peek_priority();

        // Lower bound on any candidate still discoverable: a new candidate
        // needs an improvement on a live frontier, which costs at least that
        // frontier's minimum, plus the other side's distance (>= 0, or >= its
        // own minimum while it is still expanding).
        let bound = match (front_fwd, front_bwd) {
            (None, None) => break,
            (Some(f), None) => f,
            (None, Some(b)) => b,
            (Some(f), Some(b)) => f + b,
        };
        if bound >= best {
            break;
        }

        let expand_fwd = match (front_fwd, front_bwd) {
            (Some(f), Some(b)) => f <= b,
            (Some(_), None) => true,
            _ => false,
        };

        if expand_fwd {
            let (node, cost) = match fwd.pop() {
                Some(popped) => popped,
                None => continue,
            };
            if cost > dist_fwd[node] {
                continue;
            }
            for slot in view.out_range(node) {
                let next = view.out_targets[slot];
                let weight = view.out_weights[slot];
                if weight < 0.0 {
                    return Err(SearchError::NegativeWeight {
                        from: node,
                        to: next,
                        weight,
                    });
                }
                let candidate = cost + weight;
                if candidate < dist_fwd[next] {
                    dist_fwd[next] = candidate;
                    parent_fwd[next] = Some((node, slot));
                    fwd.push(next, candidate);
                    let through = candidate + dist_bwd[next];
                    if through < best {
                        best = through;
                        meeting = Some(next);
                    }
                }
            }
        } else {
            let (node, cost) = match bwd.pop() {
                Some(popped) => popped,
                None => continue,
            };
            if cost > dist_bwd[node] {
                continue;
            }
            for entry in view.in_range(node) {
                let prev = view.in_sources[entry];
                let slot = view.in_slots[entry];
                let weight = view.out_weights[slot];
                if weight < 0.0 {
                    return Err(SearchError::NegativeWeight {
                        from: prev,
                        to: node,
                        weight,
                    });
                }
                let candidate = cost + weight;
                if candidate < dist_bwd[prev] {
                    dist_bwd[prev] = candidate;
                    parent_bwd[prev] = Some((node, slot));
                    bwd.push(prev, candidate);
                    let through = dist_fwd[prev] + candidate;
                    if through < best {
                        best = through;
                        meeting = Some(prev);
                    }
                }
            }
        }
    }

    let meeting = match meeting {
        Some(node) => node,
        None => return Ok(None),
    };

    // Forward chain source -> meeting, then the backward chain walked out
    // toward the target; the meeting node appears exactly once.
    let mut nodes = vec![meeting];
    let mut slots = Vec::new();
    let mut current = meeting;
    while let Some((parent, slot)) = parent_fwd[current] {
        nodes.push(parent);
        slots.push(slot);
        current = parent;
    }
    nodes.reverse();
    slots.reverse();

    let mut current = meeting;
    while let Some((next, slot)) = parent_bwd[current] {
        nodes.push(next);
        slots.push(slot);
        current = next;
    }

    Ok(Some(PairRoute {
        distance: best,
        nodes,
        slots,
        meeting,
    }))
}
