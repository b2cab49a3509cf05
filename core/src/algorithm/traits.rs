//! Core algorithm trait definitions for the Floodgate flow solver
//!
//! This module establishes the shared vocabulary of the solver: node and
//! capacity types, the framework-level error type, and the parameter
//! interface every algorithm exposes to its callers.
//!
//! # Key Design Principles
//! - Nodes are positional indices, there is no separate node object
//! - Capacities are exact unsigned integers, never floating point
//! - Parameters are string-keyed and validated on assignment
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;
use std::fmt::Debug;
use std::time::Duration;
use serde::{Serialize, Deserialize};

/// Node identifier: a positional index in `[0, N)`
pub type NodeId = usize;

/// Edge capacity (and residual capacity) with exact integer arithmetic
pub type Capacity = u64;

/// Universal algorithm identifier for type-safe dispatch
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmId(String);

impl AlgorithmId {
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Algorithm parameter with strongly typed values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmParameter {
    pub name: String,
    pub value: String,
    pub value_type: ParameterType,
    pub constraints: Option<ParameterConstraints>,
}

/// Parameter type enumeration for type-safe parameter handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterType {
    Integer,
    Boolean,
    Enum(Vec<String>),
}

/// Parameter constraints for validating algorithm parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterConstraints {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub allowed_values: Option<Vec<String>>,
}

/// Framework-level error types for algorithm configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Algorithm execution metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlgorithmMetrics {
    pub steps_executed: usize,
    pub nodes_explored: usize,
    pub execution_time: Duration,
}

/// Main algorithm trait
///
/// # Invariants
/// - State isolation between runs
/// - Deterministic behavior for given inputs
pub trait Algorithm: Debug + Send + Sync {
    /// Returns the algorithm's unique identifier
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new(self.name())
    }

    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Returns the algorithm's category (e.g., max_flow)
    fn category(&self) -> &'static str;

    /// Returns the algorithm's description with complexity guarantees
    fn description(&self) -> &'static str;

    /// Returns supported parameters with type information
    fn parameters(&self) -> Vec<AlgorithmParameter>;

    /// Sets algorithm parameter with type validation
    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), AlgorithmError>;

    /// Gets algorithm parameter value
    fn get_parameter(&self, name: &str) -> Option<&str>;

    /// Gets all parameter values
    fn get_parameters(&self) -> HashMap<String, String>;
}
