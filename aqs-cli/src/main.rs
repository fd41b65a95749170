//! Aqua Sentinel CLI - inspect the tide and water-level generators, manage
//! local preferences, fetch the news feed and warm the offline cache.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aqs-cli",
    version,
    about = "Aqua Sentinel flood-monitoring toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: aqs_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    aqs_cmd::run(cli.command).await
}
