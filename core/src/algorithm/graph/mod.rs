//! Network flow algorithms over the dense capacity matrix
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod reduction;
pub mod augmenting_path;
pub mod augmentation;
pub mod max_flow;

pub use self::augmenting_path::{AugmentingPath, PredecessorMap};
pub use self::max_flow::{maximum_flow, EdmondsKarpSolver, FlowError, MaxFlowOutcome};
pub use self::reduction::{reduce_to_single_pair, ReducedNetwork};
