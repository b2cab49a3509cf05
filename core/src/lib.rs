//! Floodgate: maximum flow over capacitated directed networks
//!
//! Computes the maximum flow from a set of source nodes to a set of sink
//! nodes in a network given as a dense capacity matrix. The network is
//! reduced to a single super-source and super-sink, then solved by
//! Edmonds-Karp (BFS shortest augmenting paths).
//!
//! ```
//! use floodgate_core::maximum_flow;
//!
//! let capacities = vec![
//!     vec![0, 7, 0, 0],
//!     vec![0, 0, 6, 0],
//!     vec![0, 0, 0, 8],
//!     vec![9, 0, 0, 0],
//! ];
//! assert_eq!(maximum_flow(4, &capacities, &[0], &[3]), Ok(6));
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod execution;
pub mod optimization;
pub mod problem;
pub mod validation;

pub use algorithm::graph::{maximum_flow, EdmondsKarpSolver, FlowError, MaxFlowOutcome};
pub use algorithm::traits::{Algorithm, AlgorithmError, Capacity, NodeId};
pub use config::{EmptyRolePolicy, SolverConfig};
pub use data_structures::CapacityMatrix;
pub use execution::{ExecutionTracer, TraceEvent};
pub use optimization::solve_batch;
pub use problem::FlowProblem;
