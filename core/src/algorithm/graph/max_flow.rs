//! Edmonds-Karp Maximum Flow Implementation
//!
//! This module drives the maximum flow computation: repeated shortest
//! augmenting path search followed by augmentation along the found path,
//! until the search fails. The multi-source, multi-sink entry point first
//! reduces the network to a single super-source and super-sink.
//!
//! # Driver States
//!
//! `Searching → Augmenting → Searching → ... → Done`. The driver starts in
//! `Searching` with zero flow and reaches `Done` the first time the search
//! fails. Each augmentation completes before the next search begins.
//!
//! # Algorithmic Complexity
//!
//! - **Augmentations**: O(V·E), independent of capacity magnitude
//! - **Per pass**: O(V²) over the dense capacity matrix
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;
use std::time::Instant;
use log::{debug, info, trace, warn};
use serde::{Serialize, Deserialize};

use crate::algorithm::graph::augmentation::augment;
use crate::algorithm::graph::augmenting_path::{find_augmenting_path, AugmentingPath, PredecessorMap};
use crate::algorithm::graph::reduction::reduce_to_single_pair;
use crate::algorithm::traits::{
    Algorithm, AlgorithmError, AlgorithmMetrics, AlgorithmParameter, Capacity, NodeId,
    ParameterConstraints, ParameterType,
};
use crate::config::{EmptyRolePolicy, SolverConfig};
use crate::data_structures::capacity_matrix::CapacityMatrix;
use crate::execution::tracer::{ExecutionTracer, TraceEvent};
use crate::validation::input::{validate_problem, RawCapacity, Role};

/// Flow algorithm errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("Invalid dimension for {node_count} nodes: {reason}")]
    InvalidDimension { node_count: usize, reason: String },

    #[error("Invalid capacity {value} on edge {from} -> {to}: must be in [0, {max}]")]
    InvalidCapacity { from: NodeId, to: NodeId, value: RawCapacity, max: Capacity },

    #[error("Self loop on node {node} carries capacity {capacity}, expected 0")]
    SelfLoop { node: NodeId, capacity: Capacity },

    #[error("Node {node} is outside [0, {node_count})")]
    InvalidNode { node: NodeId, node_count: usize },

    #[error("Node {node} is declared as both source and sink")]
    InvalidSourceSinkOverlap { node: NodeId },

    #[error("No {role} nodes declared")]
    EmptyRoleSet { role: Role },

    #[error("Invalid terminals for the driver: source {from}, sink {to}")]
    InvalidTerminals { from: NodeId, to: NodeId },

    #[error(transparent)]
    Config(#[from] AlgorithmError),
}

/// Driver state machine
#[derive(Debug, Clone, PartialEq, Eq)]
enum DriverPhase {
    Searching,
    Augmenting(AugmentingPath),
    Done,
}

/// Result of one driver run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlowOutcome {
    /// Total flow pushed from source to sink
    pub max_flow: Capacity,
    /// Number of augmenting paths used
    pub augmentations: usize,
    /// Nodes reachable from the source in the final residual graph
    pub source_side: Vec<bool>,
}

/// Edmonds-Karp solver with configurable validation limits
#[derive(Debug, Clone)]
pub struct EdmondsKarpSolver {
    /// Typed configuration
    config: SolverConfig,
    /// String view of the configuration for the parameter interface
    parameters: HashMap<String, String>,
    /// Metrics of the last run
    metrics: AlgorithmMetrics,
}

impl EdmondsKarpSolver {
    /// Create a solver with default limits
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Create a solver with explicit configuration
    pub fn with_config(config: SolverConfig) -> Self {
        let mut solver = Self {
            config,
            parameters: HashMap::new(),
            metrics: AlgorithmMetrics::default(),
        };
        solver.sync_parameters();
        solver
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Metrics recorded by the most recent `solve`
    pub fn metrics(&self) -> &AlgorithmMetrics {
        &self.metrics
    }

    fn sync_parameters(&mut self) {
        self.parameters.insert("max_nodes".to_string(), self.config.max_nodes.to_string());
        self.parameters.insert("max_capacity".to_string(), self.config.max_capacity.to_string());
        self.parameters.insert("empty_roles".to_string(), self.config.empty_roles.to_string());
        self.parameters.insert("record_trace".to_string(), self.config.record_trace.to_string());
    }

    /// Compute the maximum flow from `source` to `sink` in place
    ///
    /// `network` becomes the final residual graph. Callers that need the
    /// original capacities afterwards must keep their own copy.
    pub fn solve(
        &mut self,
        network: &mut CapacityMatrix,
        source: NodeId,
        sink: NodeId,
        mut tracer: Option<&mut ExecutionTracer>,
    ) -> Result<MaxFlowOutcome, FlowError> {
        let node_count = network.node_count();
        if source >= node_count || sink >= node_count || source == sink {
            return Err(FlowError::InvalidTerminals { from: source, to: sink });
        }

        let started = Instant::now();
        let mut predecessors = PredecessorMap::new(node_count);
        let mut phase = DriverPhase::Searching;
        let mut total_flow: Capacity = 0;
        let mut iteration = 0;
        let mut nodes_explored = 0;

        loop {
            phase = match phase {
                DriverPhase::Searching => {
                    if let Some(tracer) = tracer.as_deref_mut() {
                        tracer.record(TraceEvent::SearchStarted { iteration });
                    }

                    let found = find_augmenting_path(network, source, sink, &mut predecessors);
                    nodes_explored += (0..node_count).filter(|&n| predecessors.visited(n)).count();
                    trace!("Search pass {} reached sink: {}", iteration, found.is_some());

                    match found {
                        Some(path) => DriverPhase::Augmenting(path),
                        None => DriverPhase::Done,
                    }
                }
                DriverPhase::Augmenting(path) => {
                    let pushed = augment(network, &path);
                    total_flow += pushed;
                    debug!(
                        "Augmentation {}: pushed {} along {:?} (total {})",
                        iteration, pushed, path.nodes(), total_flow
                    );

                    if let Some(tracer) = tracer.as_deref_mut() {
                        tracer.record(TraceEvent::PathFound {
                            iteration,
                            path: path.into_nodes(),
                            bottleneck: pushed,
                        });
                    }

                    iteration += 1;
                    DriverPhase::Searching
                }
                DriverPhase::Done => break,
            };
        }

        if let Some(tracer) = tracer.as_deref_mut() {
            tracer.record(TraceEvent::SearchExhausted { iteration, total_flow });
        }

        self.metrics = AlgorithmMetrics {
            steps_executed: iteration,
            nodes_explored,
            execution_time: started.elapsed(),
        };

        info!(
            "Maximum flow {} from {} to {} after {} augmentations",
            total_flow, source, sink, iteration
        );

        Ok(MaxFlowOutcome {
            max_flow: total_flow,
            augmentations: iteration,
            source_side: network.residual_reachable(source),
        })
    }

    /// Validate, reduce and solve a multi-source, multi-sink problem
    pub fn maximum_flow(
        &mut self,
        node_count: usize,
        capacities: &[Vec<RawCapacity>],
        sources: &[NodeId],
        sinks: &[NodeId],
        tracer: Option<&mut ExecutionTracer>,
    ) -> Result<Capacity, FlowError> {
        self.config.validate()?;
        let problem = validate_problem(node_count, capacities, sources, sinks, &self.config)?;

        if problem.is_degenerate() {
            debug_assert_eq!(self.config.empty_roles, EmptyRolePolicy::ZeroFlow);
            warn!(
                "Empty role set ({} sources, {} sinks): no flow exists",
                problem.sources.len(), problem.sinks.len()
            );
            self.metrics = AlgorithmMetrics::default();
            return Ok(0);
        }

        let mut reduced = reduce_to_single_pair(&problem.network, &problem.sources, &problem.sinks);
        let outcome = self.solve(
            &mut reduced.network,
            reduced.super_source,
            reduced.super_sink,
            tracer,
        )?;

        Ok(outcome.max_flow)
    }
}

impl Default for EdmondsKarpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for EdmondsKarpSolver {
    fn name(&self) -> &'static str {
        "Edmonds-Karp"
    }

    fn category(&self) -> &'static str {
        "max_flow"
    }

    fn description(&self) -> &'static str {
        "Maximum flow by repeated BFS shortest augmenting paths, O(V·E) augmentations, with super-source/super-sink reduction for multiple terminals."
    }

    fn parameters(&self) -> Vec<AlgorithmParameter> {
        vec![
            AlgorithmParameter {
                name: "max_nodes".to_string(),
                value: self.config.max_nodes.to_string(),
                value_type: ParameterType::Integer,
                constraints: Some(ParameterConstraints { min: Some(1), max: None, allowed_values: None }),
            },
            AlgorithmParameter {
                name: "max_capacity".to_string(),
                value: self.config.max_capacity.to_string(),
                value_type: ParameterType::Integer,
                constraints: Some(ParameterConstraints { min: Some(0), max: None, allowed_values: None }),
            },
            AlgorithmParameter {
                name: "empty_roles".to_string(),
                value: self.config.empty_roles.to_string(),
                value_type: ParameterType::Enum(vec!["zero_flow".to_string(), "reject".to_string()]),
                constraints: None,
            },
            AlgorithmParameter {
                name: "record_trace".to_string(),
                value: self.config.record_trace.to_string(),
                value_type: ParameterType::Boolean,
                constraints: None,
            },
        ]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), AlgorithmError> {
        match name {
            "max_nodes" => {
                let max_nodes = value.parse::<usize>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| AlgorithmError::InvalidParameter {
                        name: name.to_string(),
                        reason: "max_nodes must be a positive integer".to_string(),
                    })?;
                let candidate = SolverConfig { max_nodes, ..self.config.clone() };
                candidate.validate()?;
                self.config = candidate;
            },
            "max_capacity" => {
                let max_capacity = value.parse::<Capacity>()
                    .map_err(|_| AlgorithmError::InvalidParameter {
                        name: name.to_string(),
                        reason: "max_capacity must be a non-negative integer".to_string(),
                    })?;
                let candidate = SolverConfig { max_capacity, ..self.config.clone() };
                candidate.validate()?;
                self.config = candidate;
            },
            "empty_roles" => {
                self.config.empty_roles = value.parse::<EmptyRolePolicy>()?;
            },
            "record_trace" => {
                self.config.record_trace = value.parse::<bool>()
                    .map_err(|_| AlgorithmError::InvalidParameter {
                        name: name.to_string(),
                        reason: "record_trace must be true or false".to_string(),
                    })?;
            },
            _ => {
                return Err(AlgorithmError::InvalidParameter {
                    name: name.to_string(),
                    reason: "unknown parameter".to_string(),
                });
            }
        }

        self.sync_parameters();
        Ok(())
    }

    fn get_parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(|s| s.as_str())
    }

    fn get_parameters(&self) -> HashMap<String, String> {
        self.parameters.clone()
    }
}

/// Maximum flow from the combined `sources` to the combined `sinks`
///
/// Validates the input against the default limits, reduces to a single
/// source and sink, and runs Edmonds-Karp. The working network is dropped
/// before returning.
pub fn maximum_flow(
    node_count: usize,
    capacities: &[Vec<RawCapacity>],
    sources: &[NodeId],
    sinks: &[NodeId],
) -> Result<Capacity, FlowError> {
    EdmondsKarpSolver::new().maximum_flow(node_count, capacities, sources, sinks, None)
}
