//! layera-pipeline CLI - inspect and replay the listing wizard

use clap::{CommandFactory, Parser};
use layera_pipeline::cli::{Cli, Commands};
use layera_pipeline::config::load_config;
use layera_pipeline::errors::{to_exit_code, PipelineError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> layera_pipeline::Result<()> {
    match cli.command {
        Some(Commands::Path {
            category,
            intent,
            availability,
            json,
        }) => layera_pipeline::cli::commands::path::run(&category, &intent, &availability, json),
        Some(Commands::Replay {
            script,
            json,
            output,
        }) => {
            let cwd = std::env::current_dir()
                .map_err(|e| PipelineError::wrap(e, "Failed to read working directory"))?;
            let config = load_config(cli.config.as_deref(), &cwd)?;
            layera_pipeline::cli::commands::replay::run(&script, config, json, output.as_deref())
                .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
