use clap::Parser;
use colored::Colorize;
use seqrank_core::cli::{handlers, Cli};
use seqrank_core::exit::SeqRankExit;
use tracing_subscriber::EnvFilter;

fn main() -> SeqRankExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match handlers::handle_run(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            SeqRankExit::from(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
