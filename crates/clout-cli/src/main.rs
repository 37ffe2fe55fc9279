// crates/clout-cli/src/main.rs
//
// CLI entrypoint for the Clout developer tools.
//
// Submits reputes, fetches reputations, and checks daemon health over the
// daemon's JSON-RPC endpoint.

mod commands;
mod output;
mod rpc_client;

use clap::{Parser, Subcommand};
use commands::get::GetCmd;
use commands::submit::SubmitCmd;

/// Clout CLI: record endorsements and read reputation scores.
#[derive(Parser, Debug)]
#[command(
    name = "clout",
    version = "0.1.0",
    about = "Clout CLI: submit reputes and query reach, clarity, and clout"
)]
struct Cli {
    /// RPC endpoint for the clout-daemon.
    #[arg(long, global = true, default_value = "http://localhost:50051")]
    rpc: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Record one repute for a reputee.
    Submit(SubmitCmd),

    /// Show a reputee's clout, reach, and clarity.
    Get(GetCmd),

    /// Display daemon health.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Submit(cmd) => commands::submit::run(&cli.rpc, cmd).await?,
        Commands::Get(cmd) => commands::get::run(&cli.rpc, cmd).await?,
        Commands::Status => commands::status::run(&cli.rpc).await?,
    }

    Ok(())
}
