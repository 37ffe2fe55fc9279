// crates/clout-cli/src/commands/submit.rs
//
// `clout submit` — record one repute via `reputation/submit`.

use clap::Args;
use serde_json::json;

use clout_rpc::handlers::reputation::SubmitReputeResponse;

use crate::rpc_client;

/// Submit a repute.
#[derive(Debug, Args)]
pub struct SubmitCmd {
    /// Who is endorsing.
    #[arg(long)]
    pub reputer: String,

    /// Who is being endorsed.
    #[arg(long)]
    pub reputee: String,

    /// Feature being rated: reach or clarity.
    #[arg(long)]
    pub feature: String,

    /// Numeric rating.
    #[arg(long, allow_hyphen_values = true)]
    pub value: f64,

    /// Endorsement id. Defaults to a fresh UUIDv7.
    #[arg(long)]
    pub rid: Option<String>,
}

/// Run the submit command.
pub async fn run(endpoint: &str, cmd: &SubmitCmd) -> Result<(), Box<dyn std::error::Error>> {
    let rid = cmd
        .rid
        .clone()
        .unwrap_or_else(|| uuid::Uuid::now_v7().to_string());

    let params = json!({
        "reputer": cmd.reputer,
        "reputee": cmd.reputee,
        "repute": { "rid": rid, "feature": cmd.feature, "value": cmd.value },
    });

    let resp: SubmitReputeResponse =
        rpc_client::call_result(endpoint, "reputation/submit", params).await?;
    println!("{}", resp.message);

    Ok(())
}
