//! Floodgate command-line front end
//!
//! Parses problem files, runs the solver, prints the flow value.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

mod cli;
mod error;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use serde::de::DeserializeOwned;

use floodgate_core::{solve_batch, FlowProblem, SolverConfig, TraceEvent};

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("floodgate: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Solve { input, trace } => {
            let problem: FlowProblem = read_json(&input)?;
            let config = SolverConfig { record_trace: trace || config.record_trace, ..config };
            let (flow, tracer) = problem.solve_with_trace(&config)?;

            if let Some(tracer) = tracer {
                for event in tracer.events() {
                    if let TraceEvent::PathFound { iteration, path, bottleneck } = event {
                        writeln!(out, "path {}: {:?} carries {}", iteration, path, bottleneck)?;
                    }
                }
            }
            writeln!(out, "{}", flow)?;
            Ok(())
        }
        Command::Batch { input } => {
            let problems: Vec<FlowProblem> = read_json(&input)?;
            info!("Loaded {} problems from {}", problems.len(), input.display());

            let results = solve_batch(&problems, &config);
            let mut failed = 0;
            for (index, result) in results.iter().enumerate() {
                match result {
                    Ok(flow) => writeln!(out, "{}: {}", index, flow)?,
                    Err(err) => {
                        failed += 1;
                        writeln!(out, "{}: error: {}", index, err)?;
                    }
                }
            }

            if failed > 0 {
                return Err(CliError::Batch { failed, total: results.len() });
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SolverConfig, CliError> {
    let config = match path {
        Some(path) => read_json(path)?,
        None => SolverConfig::default(),
    };
    config.validate()?;
    debug!("Solver configuration: {:?}", config);
    Ok(config)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let io_error = |source| CliError::Io { path: PathBuf::from(path), source };
    let text = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map_err(io_error)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(io_error)?
    };

    serde_json::from_str(&text).map_err(|source| CliError::Json { path: PathBuf::from(path), source })
}
