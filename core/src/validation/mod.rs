//! Input validation at the solver boundary
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod input;

pub use self::input::{validate_problem, RawCapacity, Role, ValidatedProblem};
