//! Shortest augmenting path search over the residual graph
//!
//! Breadth-first search from the source, enqueuing `v` from `u` only when
//! `capacity(u, v) > 0` and `v` has not been visited in the current pass.
//! Neighbors are scanned in ascending index order, which fixes the path
//! chosen when several shortest paths tie. The pass stops as soon as the
//! sink is discovered.
//!
//! Choosing a fewest-edges path each round is what bounds Edmonds-Karp to
//! O(V·E) augmentations regardless of capacity magnitude.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;
use serde::{Serialize, Deserialize};

use crate::algorithm::traits::NodeId;
use crate::data_structures::capacity_matrix::CapacityMatrix;

/// Node → predecessor mapping produced by one search pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    predecessors: Vec<Option<NodeId>>,
    visited: Vec<bool>,
    queue: VecDeque<NodeId>,
}

impl PredecessorMap {
    /// Allocate a map sized to `node_count`
    pub fn new(node_count: usize) -> Self {
        Self {
            predecessors: vec![None; node_count],
            visited: vec![false; node_count],
            queue: VecDeque::with_capacity(node_count),
        }
    }

    /// Forget everything recorded by the previous pass
    pub fn reset(&mut self) {
        self.predecessors.fill(None);
        self.visited.fill(false);
        self.queue.clear();
    }

    /// Node `node` was reached from
    #[inline]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node).copied().flatten()
    }

    /// Whether `node` was reached in the last pass
    #[inline]
    pub fn visited(&self, node: NodeId) -> bool {
        self.visited.get(node).copied().unwrap_or(false)
    }

    /// Trace `sink` back to `source` by repeated predecessor lookup
    pub fn path_to(&self, source: NodeId, sink: NodeId) -> Option<AugmentingPath> {
        if source == sink || !self.visited(sink) {
            return None;
        }

        let mut nodes = vec![sink];
        let mut current = sink;

        while current != source {
            current = self.predecessor(current)?;
            nodes.push(current);
            // A chain longer than the node count means the map is corrupt
            if nodes.len() > self.predecessors.len() {
                return None;
            }
        }

        nodes.reverse();
        Some(AugmentingPath { nodes })
    }
}

/// Ordered node sequence `source = p0, p1, ..., pk = sink`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentingPath {
    nodes: Vec<NodeId>,
}

impl AugmentingPath {
    /// Nodes along the path, source first
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of edges on the path
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consecutive `(u, v)` pairs along the path
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

/// Run one BFS pass from `source`, recording predecessors in `map`
///
/// Returns `true` when `sink` was reached. The map is reset first, so a
/// single allocation can be reused across every pass of a driver run.
pub fn breadth_first_search(
    network: &CapacityMatrix,
    source: NodeId,
    sink: NodeId,
    map: &mut PredecessorMap,
) -> bool {
    map.reset();
    map.visited[source] = true;
    map.queue.push_back(source);

    while let Some(node) = map.queue.pop_front() {
        for (next, &residual) in network.row(node).iter().enumerate() {
            if map.visited[next] || residual == 0 {
                continue;
            }

            map.predecessors[next] = Some(node);
            map.visited[next] = true;

            if next == sink {
                return true;
            }

            map.queue.push_back(next);
        }
    }

    false
}

/// Find a shortest augmenting path, if one exists
pub fn find_augmenting_path(
    network: &CapacityMatrix,
    source: NodeId,
    sink: NodeId,
    map: &mut PredecessorMap,
) -> Option<AugmentingPath> {
    if breadth_first_search(network, source, sink, map) {
        map.path_to(source, sink)
    } else {
        None
    }
}
