// src/cli/handlers.rs
use crate::cli::args::Cli;
use crate::config::{Config, Overrides};
use crate::exit::SeqRankExit;
use crate::graph::GraphEngine;
use crate::input;
use crate::report;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::info;

/// Runs the full pipeline for one invocation.
///
/// # Errors
/// Returns error if configuration is invalid, input is unreadable, or the
/// report cannot be written.
pub fn handle_run(cli: Cli) -> Result<SeqRankExit> {
    let overrides = Overrides {
        jump: cli.jump,
        tolerance: cli.tolerance,
        max_iterations: cli.max_iterations,
        prefix: cli.prefix,
    };
    let config = Config::load(cli.config.as_deref(), overrides)?;

    let (graph, _stats) = input::load_graph(&cli.input, &config.input.prefix)?;
    let analysis = GraphEngine::analyze(graph, config.pagerank)?;

    if cli.verbose {
        eprintln!("{}", report::format_summary(&analysis));
    }

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            report::write_report(&mut BufWriter::new(file), &analysis)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = io::stdout();
            report::write_report(&mut stdout.lock(), &analysis)
                .context("Failed to write report to stdout")?;
        }
    }

    Ok(SeqRankExit::Success)
}

