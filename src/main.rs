//! modelscout - Main Entry Point
//!
//! Profiles a data file and recommends algorithms from the command line.

use clap::Parser;
use modelscout::cli::{cmd_algorithms, cmd_analyze, cmd_estimate, cmd_info, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modelscout=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { data, target, top_k, config, json } => {
            cmd_analyze(&data, target.as_deref(), top_k, config.as_deref(), json)?;
        }
        Commands::Algorithms { problem_type } => {
            cmd_algorithms(problem_type.as_deref())?;
        }
        Commands::Estimate { rows, cols, complexity } => {
            cmd_estimate(rows, cols, complexity)?;
        }
        Commands::Info { data } => {
            cmd_info(&data)?;
        }
    }

    Ok(())
}
