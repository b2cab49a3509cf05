//! Flow augmentation along a found path
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use crate::algorithm::graph::augmenting_path::AugmentingPath;
use crate::algorithm::traits::Capacity;
use crate::data_structures::capacity_matrix::CapacityMatrix;

/// Minimum residual capacity over the edges of `path`
///
/// Returns zero for a path without edges.
pub fn bottleneck(network: &CapacityMatrix, path: &AugmentingPath) -> Capacity {
    path.edges()
        .map(|(u, v)| network.capacity(u, v))
        .min()
        .unwrap_or(0)
}

/// Push the bottleneck amount along the whole of `path`
///
/// Every forward residual on the path shrinks by the bottleneck and every
/// reverse residual grows by it. The whole path is updated before this
/// returns. Returns the amount pushed.
pub fn augment(network: &mut CapacityMatrix, path: &AugmentingPath) -> Capacity {
    let amount = bottleneck(network, path);
    if amount == 0 {
        return 0;
    }

    for (u, v) in path.edges() {
        network.push_flow(u, v, amount);
    }

    amount
}
