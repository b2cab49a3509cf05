//! Boundary validation of flow problems
//!
//! All preconditions are checked once, before reduction runs. The search,
//! augmentation and driver phases rely on these checks and never
//! re-validate.
//!
//! Checks run in a fixed order: dimensions, capacities, self loops, node
//! indices, source/sink overlap, and finally empty role sets.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeSet;

use crate::algorithm::graph::max_flow::FlowError;
use crate::algorithm::traits::{Capacity, NodeId};
use crate::config::{EmptyRolePolicy, SolverConfig};
use crate::data_structures::capacity_matrix::CapacityMatrix;

/// Raw capacity as supplied by callers, before range checks
pub type RawCapacity = i64;

/// Which side of the network a role set describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Source,
    Sink,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Source => f.write_str("source"),
            Role::Sink => f.write_str("sink"),
        }
    }
}

/// A problem that passed every boundary check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProblem {
    pub network: CapacityMatrix,
    /// Sorted, de-duplicated sources
    pub sources: Vec<NodeId>,
    /// Sorted, de-duplicated sinks
    pub sinks: Vec<NodeId>,
}

impl ValidatedProblem {
    /// Whether either role set is empty (no flow can exist)
    pub fn is_degenerate(&self) -> bool {
        self.sources.is_empty() || self.sinks.is_empty()
    }
}

/// Validate a raw problem and convert it into a network
pub fn validate_problem(
    node_count: usize,
    capacities: &[Vec<RawCapacity>],
    sources: &[NodeId],
    sinks: &[NodeId],
    config: &SolverConfig,
) -> Result<ValidatedProblem, FlowError> {
    if node_count == 0 || node_count > config.max_nodes {
        return Err(FlowError::InvalidDimension {
            node_count,
            reason: format!("node count must be in [1, {}]", config.max_nodes),
        });
    }

    if capacities.len() != node_count {
        return Err(FlowError::InvalidDimension {
            node_count,
            reason: format!("matrix has {} rows", capacities.len()),
        });
    }

    let mut network = CapacityMatrix::new(node_count);

    for (from, row) in capacities.iter().enumerate() {
        if row.len() != node_count {
            return Err(FlowError::InvalidDimension {
                node_count,
                reason: format!("row {} has {} entries", from, row.len()),
            });
        }

        for (to, &value) in row.iter().enumerate() {
            let capacity = checked_capacity(from, to, value, config.max_capacity)?;
            if from == to && capacity != 0 {
                return Err(FlowError::SelfLoop { node: from, capacity });
            }
            network.set_capacity(from, to, capacity);
        }
    }

    let sources = checked_role_set(sources, node_count)?;
    let sinks = checked_role_set(sinks, node_count)?;

    if let Some(&node) = sources.intersection(&sinks).next() {
        return Err(FlowError::InvalidSourceSinkOverlap { node });
    }

    if config.empty_roles == EmptyRolePolicy::Reject {
        if sources.is_empty() {
            return Err(FlowError::EmptyRoleSet { role: Role::Source });
        }
        if sinks.is_empty() {
            return Err(FlowError::EmptyRoleSet { role: Role::Sink });
        }
    }

    Ok(ValidatedProblem {
        network,
        sources: sources.into_iter().collect(),
        sinks: sinks.into_iter().collect(),
    })
}

fn checked_capacity(
    from: NodeId,
    to: NodeId,
    value: RawCapacity,
    max: Capacity,
) -> Result<Capacity, FlowError> {
    match Capacity::try_from(value) {
        Ok(capacity) if capacity <= max => Ok(capacity),
        _ => Err(FlowError::InvalidCapacity { from, to, value, max }),
    }
}

fn checked_role_set(nodes: &[NodeId], node_count: usize) -> Result<BTreeSet<NodeId>, FlowError> {
    nodes
        .iter()
        .map(|&node| {
            if node < node_count {
                Ok(node)
            } else {
                Err(FlowError::InvalidNode { node, node_count })
            }
        })
        .collect()
}
