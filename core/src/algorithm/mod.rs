//! Floodgate Algorithm Framework
//! Maximum flow over capacitated directed networks
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod traits;
pub mod graph;

pub use self::traits::*;
pub use self::graph::*;
