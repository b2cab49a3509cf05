//! Core data structures
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod capacity_matrix;

pub use self::capacity_matrix::CapacityMatrix;
