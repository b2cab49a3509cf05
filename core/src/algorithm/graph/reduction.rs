//! Multi-source, multi-sink reduction
//!
//! Converts a network with several declared sources and sinks into an
//! equivalent single-source, single-sink network. Two synthetic nodes are
//! appended: the super-source at index `N` with an unbounded edge to every
//! declared source, and the super-sink at index `N + 1` with an unbounded
//! edge from every declared sink.
//!
//! "Unbounded" is the sum of all finite capacities plus one. No flow can
//! exceed the total finite capacity, so these edges are never saturated
//! and every cut that matters lies among the original edges.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::trace;

use crate::algorithm::traits::{Capacity, NodeId};
use crate::data_structures::capacity_matrix::CapacityMatrix;

/// Single-source, single-sink network produced by the reduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedNetwork {
    /// Network of `N + 2` nodes
    pub network: CapacityMatrix,
    /// Super-source index (`N`)
    pub super_source: NodeId,
    /// Super-sink index (`N + 1`)
    pub super_sink: NodeId,
    /// Capacity used for the synthetic edges
    pub unbounded: Capacity,
}

/// Capacity larger than any flow the network could carry
pub fn unbounded_capacity(network: &CapacityMatrix) -> Capacity {
    network.total_capacity().saturating_add(1)
}

/// Append a super-source and super-sink to `network`
///
/// Original entries are copied unchanged. Rows and columns of the synthetic
/// nodes are zero except for the `N → s` and `t → N + 1` edges. The caller's
/// matrix is not touched.
pub fn reduce_to_single_pair(
    network: &CapacityMatrix,
    sources: &[NodeId],
    sinks: &[NodeId],
) -> ReducedNetwork {
    let node_count = network.node_count();
    let super_source = node_count;
    let super_sink = node_count + 1;
    let unbounded = unbounded_capacity(network);

    let mut reduced = CapacityMatrix::new(node_count + 2);

    for u in 0..node_count {
        for (v, &capacity) in network.row(u).iter().enumerate() {
            if capacity > 0 {
                reduced.set_capacity(u, v, capacity);
            }
        }
    }

    for &source in sources {
        reduced.set_capacity(super_source, source, unbounded);
    }

    for &sink in sinks {
        reduced.set_capacity(sink, super_sink, unbounded);
    }

    trace!(
        "Reduced {} nodes with {} sources and {} sinks (unbounded = {})",
        node_count, sources.len(), sinks.len(), unbounded
    );

    ReducedNetwork {
        network: reduced,
        super_source,
        super_sink,
        unbounded,
    }
}
