// src/cli/mod.rs
//! Command-line shell around the analysis pipeline.

pub mod args;
pub mod handlers;

pub use args::Cli;
