//! Solver configuration
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::algorithm::traits::{AlgorithmError, Capacity};

/// Default upper bound on the number of nodes
pub const DEFAULT_MAX_NODES: usize = 50;

/// Default upper bound on a single edge capacity
pub const DEFAULT_MAX_CAPACITY: Capacity = 2_000_000;

/// How an empty source or sink set is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyRolePolicy {
    /// No flow can exist, report zero without searching
    #[default]
    ZeroFlow,
    /// Reject the problem with `FlowError::EmptyRoleSet`
    Reject,
}

impl EmptyRolePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            EmptyRolePolicy::ZeroFlow => "zero_flow",
            EmptyRolePolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for EmptyRolePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmptyRolePolicy {
    type Err = AlgorithmError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "zero_flow" => Ok(EmptyRolePolicy::ZeroFlow),
            "reject" => Ok(EmptyRolePolicy::Reject),
            other => Err(AlgorithmError::InvalidParameter {
                name: "empty_roles".to_string(),
                reason: format!("expected zero_flow or reject, got {}", other),
            }),
        }
    }
}

/// Limits and policies applied by the solver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Largest accepted node count
    pub max_nodes: usize,
    /// Largest accepted edge capacity
    pub max_capacity: Capacity,
    /// Treatment of empty source or sink sets
    pub empty_roles: EmptyRolePolicy,
    /// Record every augmentation in an execution trace
    pub record_trace: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            max_capacity: DEFAULT_MAX_CAPACITY,
            empty_roles: EmptyRolePolicy::default(),
            record_trace: false,
        }
    }
}

impl SolverConfig {
    /// Check the configuration itself is usable
    ///
    /// The synthetic super edges carry the total capacity plus one, so
    /// `max_nodes² · max_capacity + 1` must fit in a `Capacity`.
    pub fn validate(&self) -> Result<(), AlgorithmError> {
        if self.max_nodes == 0 {
            return Err(AlgorithmError::InvalidParameter {
                name: "max_nodes".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let cells = Capacity::try_from(self.max_nodes)
            .ok()
            .and_then(|n| n.checked_mul(n));
        let unbounded = cells
            .and_then(|cells| cells.checked_mul(self.max_capacity))
            .and_then(|total| total.checked_add(1));

        if unbounded.is_none() {
            return Err(AlgorithmError::InvalidParameter {
                name: "max_capacity".to_string(),
                reason: format!(
                    "{} nodes at capacity {} overflow the total capacity",
                    self.max_nodes, self.max_capacity
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.max_nodes, 50);
        assert_eq!(config.max_capacity, 2_000_000);
        assert_eq!(config.empty_roles, EmptyRolePolicy::ZeroFlow);
        assert!(!config.record_trace);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SolverConfig = serde_json::from_str(r#"{"empty_roles": "reject"}"#).unwrap();
        assert_eq!(config.empty_roles, EmptyRolePolicy::Reject);
        assert_eq!(config.max_nodes, DEFAULT_MAX_NODES);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("reject".parse::<EmptyRolePolicy>().unwrap(), EmptyRolePolicy::Reject);
        assert_eq!(EmptyRolePolicy::ZeroFlow.to_string(), "zero_flow");
        assert!("lenient".parse::<EmptyRolePolicy>().is_err());
    }

    #[test]
    fn test_total_capacity_overflow_rejected() {
        let config = SolverConfig { max_capacity: Capacity::MAX, ..SolverConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(AlgorithmError::InvalidParameter { ref name, .. }) if name == "max_capacity"
        ));

        let huge_graph = SolverConfig { max_nodes: usize::MAX, ..SolverConfig::default() };
        assert!(huge_graph.validate().is_err());

        // Largest capacity that still leaves room for the super edges
        let edge = SolverConfig { max_nodes: 4, max_capacity: (Capacity::MAX - 1) / 16, ..SolverConfig::default() };
        assert!(edge.validate().is_ok());
        let past_edge = SolverConfig { max_capacity: (Capacity::MAX - 1) / 16 + 1, ..edge };
        assert!(past_edge.validate().is_err());
    }

    #[test]
    fn test_zero_max_nodes_rejected() {
        let config = SolverConfig { max_nodes: 0, ..SolverConfig::default() };
        assert!(config.validate().is_err());
    }
}
