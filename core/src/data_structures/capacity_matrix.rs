//! Dense capacity matrix doubling as the residual graph
//!
//! The network is an `N×N` matrix where `capacity(u, v)` is the residual
//! capacity of the directed edge `u → v`. A zero entry is equivalent to no
//! edge. The reverse entry `capacity(v, u)` holds the flow currently pushed
//! along `u → v` that may still be undone, so the same storage serves as the
//! original network before any augmentation and as the live residual graph
//! afterwards.
//!
//! # Invariants
//! - Every entry is non-negative (enforced by the unsigned `Capacity` type)
//! - `push_flow` is the only mutation that moves flow, and it never drives
//!   a forward entry below zero
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;
use serde::{Serialize, Deserialize};

use crate::algorithm::graph::max_flow::FlowError;
use crate::algorithm::traits::{Capacity, NodeId};

/// Row-major `N×N` capacity storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityMatrix {
    /// Number of nodes (matrix side length)
    node_count: usize,
    /// Row-major cells, `cells[u * node_count + v]` is `u → v`
    cells: Vec<Capacity>,
}

impl CapacityMatrix {
    /// Create a network of `node_count` nodes with no edges
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            cells: vec![0; node_count * node_count],
        }
    }

    /// Build a network from nested rows, rejecting non-square input
    pub fn from_rows(rows: &[Vec<Capacity>]) -> Result<Self, FlowError> {
        let node_count = rows.len();
        let mut matrix = Self::new(node_count);

        for (u, row) in rows.iter().enumerate() {
            if row.len() != node_count {
                return Err(FlowError::InvalidDimension {
                    node_count,
                    reason: format!("row {} has {} entries, expected {}", u, row.len(), node_count),
                });
            }
            matrix.cells[u * node_count..(u + 1) * node_count].copy_from_slice(row);
        }

        Ok(matrix)
    }

    /// Number of nodes in the network
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    #[inline]
    fn index(&self, from: NodeId, to: NodeId) -> usize {
        debug_assert!(from < self.node_count && to < self.node_count);
        from * self.node_count + to
    }

    /// Residual capacity of `from → to`
    #[inline]
    pub fn capacity(&self, from: NodeId, to: NodeId) -> Capacity {
        self.cells[self.index(from, to)]
    }

    /// Overwrite the capacity of `from → to`
    #[inline]
    pub fn set_capacity(&mut self, from: NodeId, to: NodeId, capacity: Capacity) {
        let index = self.index(from, to);
        self.cells[index] = capacity;
    }

    /// Outgoing residual capacities of `node`, indexed by target
    #[inline]
    pub fn row(&self, node: NodeId) -> &[Capacity] {
        let start = node * self.node_count;
        &self.cells[start..start + self.node_count]
    }

    /// Sum of all finite capacities in the network
    pub fn total_capacity(&self) -> Capacity {
        self.cells.iter().fold(0, |sum: Capacity, &c| sum.saturating_add(c))
    }

    /// Push `amount` units along `from → to` in the residual graph
    ///
    /// The forward residual shrinks by `amount` and the reverse residual
    /// grows by the same amount. Callers must never push more than the
    /// forward residual capacity.
    pub fn push_flow(&mut self, from: NodeId, to: NodeId, amount: Capacity) {
        let forward = self.index(from, to);
        let reverse = self.index(to, from);

        debug_assert!(
            self.cells[forward] >= amount,
            "push of {} exceeds residual {} on {} -> {}",
            amount, self.cells[forward], from, to
        );

        self.cells[forward] -= amount;
        self.cells[reverse] += amount;
    }

    /// Nodes reachable from `source` over strictly positive residual edges
    ///
    /// After a maximum flow has been computed this is the source side of a
    /// minimum cut.
    pub fn residual_reachable(&self, source: NodeId) -> Vec<bool> {
        let mut reached = vec![false; self.node_count];
        if source >= self.node_count {
            return reached;
        }

        let mut queue = VecDeque::new();
        reached[source] = true;
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            for (next, &residual) in self.row(node).iter().enumerate() {
                if residual > 0 && !reached[next] {
                    reached[next] = true;
                    queue.push_back(next);
                }
            }
        }

        reached
    }

    /// Copy the matrix back out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Capacity>> {
        (0..self.node_count).map(|u| self.row(u).to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix_is_empty() {
        let matrix = CapacityMatrix::new(3);
        assert_eq!(matrix.node_count(), 3);
        assert_eq!(matrix.total_capacity(), 0);
        assert!(matrix.to_rows().iter().flatten().all(|&c| c == 0));
    }

    #[test]
    fn test_from_rows_round_trip() {
        let rows = vec![vec![0, 7, 0], vec![0, 0, 6], vec![9, 0, 0]];
        let matrix = CapacityMatrix::from_rows(&rows).unwrap();

        assert_eq!(matrix.capacity(0, 1), 7);
        assert_eq!(matrix.capacity(2, 0), 9);
        assert_eq!(matrix.row(1), &[0, 0, 6]);
        assert_eq!(matrix.total_capacity(), 22);
        assert_eq!(matrix.to_rows(), rows);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![vec![0, 1], vec![0]];
        let err = CapacityMatrix::from_rows(&rows).unwrap_err();
        assert!(matches!(err, FlowError::InvalidDimension { node_count: 2, .. }));
    }

    #[test]
    fn test_push_flow_moves_residual_to_reverse_edge() {
        let mut matrix = CapacityMatrix::new(2);
        matrix.set_capacity(0, 1, 10);

        matrix.push_flow(0, 1, 4);
        assert_eq!(matrix.capacity(0, 1), 6);
        assert_eq!(matrix.capacity(1, 0), 4);

        // Undo part of the flow through the reverse edge
        matrix.push_flow(1, 0, 3);
        assert_eq!(matrix.capacity(0, 1), 9);
        assert_eq!(matrix.capacity(1, 0), 1);
        assert_eq!(matrix.total_capacity(), 10);
    }

    #[test]
    fn test_residual_reachability() {
        let mut matrix = CapacityMatrix::new(4);
        matrix.set_capacity(0, 1, 1);
        matrix.set_capacity(1, 2, 1);
        matrix.set_capacity(3, 0, 5);

        assert_eq!(matrix.residual_reachable(0), vec![true, true, true, false]);
        assert_eq!(matrix.residual_reachable(3), vec![true, true, true, true]);
        assert_eq!(matrix.residual_reachable(9), vec![false; 4]);
    }
}
