//! Command-line error reporting
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::path::PathBuf;

use floodgate_core::{AlgorithmError, FlowError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("failed to parse {path}: {source}")]
    Json { path: PathBuf, source: serde_json::Error },

    #[error("invalid configuration: {0}")]
    Config(#[from] AlgorithmError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("{failed} of {total} problems failed")]
    Batch { failed: usize, total: usize },
}
