//! Execution tracing for the max-flow driver
//!
//! The tracer is an append-only record of driver phases. It is passed by
//! mutable reference into a single driver run and never shared between
//! runs.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Serialize, Deserialize};

use crate::algorithm::traits::{Capacity, NodeId};

/// A single observable step of a driver run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A search pass began
    SearchStarted { iteration: usize },
    /// A search pass found a path and the driver augmented along it
    PathFound {
        iteration: usize,
        path: Vec<NodeId>,
        bottleneck: Capacity,
    },
    /// A search pass failed, the flow is maximum
    SearchExhausted { iteration: usize, total_flow: Capacity },
}

/// Recorder for driver events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionTracer {
    events: Vec<TraceEvent>,
}

impl ExecutionTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Edge counts of every augmenting path, in discovery order
    pub fn path_lengths(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraceEvent::PathFound { path, .. } => Some(path.len().saturating_sub(1)),
                _ => None,
            })
            .collect()
    }

    /// Number of augmentations recorded
    pub fn augmentation_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, TraceEvent::PathFound { .. }))
            .count()
    }

    /// Sum of recorded bottlenecks
    pub fn total_pushed(&self) -> Capacity {
        self.events
            .iter()
            .map(|event| match event {
                TraceEvent::PathFound { bottleneck, .. } => *bottleneck,
                _ => 0,
            })
            .sum()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracer_summaries() {
        let mut tracer = ExecutionTracer::new();
        tracer.record(TraceEvent::SearchStarted { iteration: 0 });
        tracer.record(TraceEvent::PathFound { iteration: 0, path: vec![4, 0, 3, 5], bottleneck: 6 });
        tracer.record(TraceEvent::SearchStarted { iteration: 1 });
        tracer.record(TraceEvent::PathFound { iteration: 1, path: vec![4, 1, 2, 3, 5], bottleneck: 2 });
        tracer.record(TraceEvent::SearchStarted { iteration: 2 });
        tracer.record(TraceEvent::SearchExhausted { iteration: 2, total_flow: 8 });

        assert_eq!(tracer.events().len(), 6);
        assert_eq!(tracer.path_lengths(), vec![3, 4]);
        assert_eq!(tracer.augmentation_count(), 2);
        assert_eq!(tracer.total_pushed(), 8);

        tracer.clear();
        assert!(tracer.events().is_empty());
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = TraceEvent::SearchExhausted { iteration: 3, total_flow: 16 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"search_exhausted","iteration":3,"total_flow":16}"#);
    }
}
