//! Parallel solving of independent flow problems
//!
//! Every problem owns its own capacity matrix, so problems share nothing
//! and can be solved on separate rayon workers. A single problem is never
//! split: its search and augmentation cycles always run sequentially on
//! one thread.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;
use rayon::prelude::*;

use crate::algorithm::graph::max_flow::FlowError;
use crate::algorithm::traits::Capacity;
use crate::config::SolverConfig;
use crate::problem::FlowProblem;

/// Solve every problem in `problems`, preserving input order
pub fn solve_batch(problems: &[FlowProblem], config: &SolverConfig) -> Vec<Result<Capacity, FlowError>> {
    debug!("Solving batch of {} flow problems", problems.len());

    problems
        .par_iter()
        .map(|problem| problem.solve(config))
        .collect()
}

/// Total flow across a batch, failing on the first invalid problem
pub fn total_batch_flow(problems: &[FlowProblem], config: &SolverConfig) -> Result<Capacity, FlowError> {
    solve_batch(problems, config).into_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(capacity: i64) -> FlowProblem {
        FlowProblem::new(vec![0], vec![2], vec![
            vec![0, capacity, 0],
            vec![0, 0, capacity],
            vec![0, 0, 0],
        ])
    }

    #[test]
    fn test_batch_preserves_order() {
        let problems: Vec<FlowProblem> = (1..=32).map(chain).collect();
        let results = solve_batch(&problems, &SolverConfig::default());

        let flows: Vec<Capacity> = results.into_iter().map(Result::unwrap).collect();
        assert_eq!(flows, (1..=32).collect::<Vec<Capacity>>());
    }

    #[test]
    fn test_batch_matches_sequential() {
        let problems: Vec<FlowProblem> = (0..16).map(|c| chain(c * 1000)).collect();
        let config = SolverConfig::default();

        let parallel = solve_batch(&problems, &config);
        let sequential: Vec<_> = problems.iter().map(|p| p.solve(&config)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_batch_reports_errors_per_problem() {
        let problems = vec![chain(5), FlowProblem::new(vec![0], vec![0], vec![vec![0]]), chain(7)];
        let results = solve_batch(&problems, &SolverConfig::default());

        assert_eq!(results[0], Ok(5));
        assert_eq!(results[1], Err(FlowError::InvalidSourceSinkOverlap { node: 0 }));
        assert_eq!(results[2], Ok(7));

        assert!(total_batch_flow(&problems, &SolverConfig::default()).is_err());
        assert_eq!(total_batch_flow(&[chain(5), chain(7)], &SolverConfig::default()), Ok(12));
    }
}
