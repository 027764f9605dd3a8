//! Oita tide CLI - fetches observed and predicted tide heights for the
//! Oita Tsurusaki station and stores them as JSON.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "otk-cli",
    version,
    about = "Oita tide data collection toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: otk_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    otk_cmd::run(cli.command).await
}
