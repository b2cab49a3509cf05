//! Serializable flow problem records
//!
//! A `FlowProblem` is the file-level form of one maximum flow query. Field
//! aliases accept the corridor-and-rooms vocabulary (`entrances`, `exits`,
//! `path`) alongside the graph vocabulary.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Serialize, Deserialize};

use crate::algorithm::graph::max_flow::{EdmondsKarpSolver, FlowError};
use crate::algorithm::traits::{Capacity, NodeId};
use crate::config::SolverConfig;
use crate::execution::tracer::ExecutionTracer;
use crate::validation::input::RawCapacity;

/// One multi-source, multi-sink maximum flow query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowProblem {
    #[serde(alias = "entrances")]
    pub sources: Vec<NodeId>,
    #[serde(alias = "exits")]
    pub sinks: Vec<NodeId>,
    #[serde(alias = "path")]
    pub capacities: Vec<Vec<RawCapacity>>,
}

impl FlowProblem {
    pub fn new(sources: Vec<NodeId>, sinks: Vec<NodeId>, capacities: Vec<Vec<RawCapacity>>) -> Self {
        Self { sources, sinks, capacities }
    }

    /// Node count implied by the matrix
    pub fn node_count(&self) -> usize {
        self.capacities.len()
    }

    /// Maximum flow under `config`
    pub fn solve(&self, config: &SolverConfig) -> Result<Capacity, FlowError> {
        self.solve_with_trace(config).map(|(flow, _)| flow)
    }

    /// Maximum flow plus the execution trace when `config.record_trace` is set
    pub fn solve_with_trace(
        &self,
        config: &SolverConfig,
    ) -> Result<(Capacity, Option<ExecutionTracer>), FlowError> {
        let mut solver = EdmondsKarpSolver::with_config(config.clone());
        let mut tracer = config.record_trace.then(ExecutionTracer::new);

        let flow = solver.maximum_flow(
            self.node_count(),
            &self.capacities,
            &self.sources,
            &self.sinks,
            tracer.as_mut(),
        )?;

        Ok((flow, tracer))
    }
}
