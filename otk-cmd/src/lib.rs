//! Command implementations for the Oita tide CLI.
//!
//! Two subcommands mirror the two collection pipelines: `observed`
//! merges the latest gauge readings into a cumulative per-day store,
//! `prediction` rewrites the 7-day forecast store. Both are meant to be
//! run unattended by an external scheduler.

use clap::Subcommand;

pub mod config;
pub mod observed;
pub mod prediction;

use config::PipelineConfig;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the latest 5-minute observed readings and merge them into
    /// the observed store
    Observed {
        /// Output directory for observed JSON stores
        #[arg(short = 'o', long, default_value = "data/observed")]
        output_dir: PathBuf,
    },

    /// Fetch the 7-day hourly forecast and rewrite the prediction store
    Prediction {
        /// Output directory for forecast JSON stores
        #[arg(short = 'o', long, default_value = "data/prediction")]
        output_dir: PathBuf,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Observed { output_dir } => {
            let config = PipelineConfig {
                observed_dir: output_dir,
                ..PipelineConfig::default()
            };
            observed::run_observed(&config).await
        }
        Command::Prediction { output_dir } => {
            let config = PipelineConfig {
                prediction_dir: output_dir,
                ..PipelineConfig::default()
            };
            prediction::run_prediction(&config).await
        }
    }
}

/// Bannered start line with the run timestamp.
pub(crate) fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!(
        "   started {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("{}", "=".repeat(60));
}

/// Closing rule under the completion summary.
pub(crate) fn banner_close() {
    println!("{}", "=".repeat(60));
}
