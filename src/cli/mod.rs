//! CLI module for layera-pipeline
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Layera listing pipeline - inspect and replay the listing wizard
#[derive(Parser, Debug)]
#[command(name = "layera-pipeline")]
#[command(version)]
#[command(about = "Inspect and replay the Layera listing wizard state machine")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a pipeline config file (defaults to .layera/pipeline.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the steps the wizard visits for a set of answers
    Path {
        /// Listing category (property, job)
        #[arg(long)]
        category: String,

        /// Listing intent (offer, search)
        #[arg(long)]
        intent: String,

        /// When the listing becomes available (now, future)
        #[arg(long, default_value = "now")]
        availability: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drive a wizard session from a JSON script of events
    Replay {
        /// Path to the replay script
        script: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Also write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
