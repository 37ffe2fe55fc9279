// crates/clout-cli/src/commands/get.rs
//
// `clout get <reputee>` — fetch a reputation via `reputation/get`.

use clap::Args;
use serde_json::json;

use clout_core::Reputation;

use crate::output::{format_reputation, OutputFormat};
use crate::rpc_client;

/// Reputation query command.
#[derive(Debug, Args)]
pub struct GetCmd {
    /// The reputee to score.
    #[arg()]
    pub reputee: String,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Run the get command.
pub async fn run(endpoint: &str, cmd: &GetCmd) -> Result<(), Box<dyn std::error::Error>> {
    let rep: Reputation =
        rpc_client::call_result(endpoint, "reputation/get", json!({ "reputee": cmd.reputee }))
            .await?;

    let format = OutputFormat::from_json_flag(cmd.json);
    if format == OutputFormat::Table {
        println!("Reputation of {}", rep.reputee);
        println!();
    }
    println!("{}", format_reputation(&rep, &format));

    Ok(())
}
