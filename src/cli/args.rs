use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "seqrank",
    version,
    about = "PageRank and weak components for an adjacency-list graph"
)]
pub struct Cli {
    /// Adjacency-list file, or a directory of part files
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the report here instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Random jump factor [default: 0.15]
    #[arg(long, value_name = "VAL")]
    pub jump: Option<f64>,

    /// L1 convergence tolerance [default: 1e-10]
    #[arg(long, value_name = "VAL")]
    pub tolerance: Option<f64>,

    /// Iteration cap [default: 1000]
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,

    /// File-name prefix of part files in an input directory [default: part]
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}
