//! Parallel execution of independent problems
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod parallel;

pub use self::parallel::{solve_batch, total_batch_flow};
