// crates/clout-cli/src/commands/status.rs
//
// `clout status` — display daemon health.

use serde_json::json;

use clout_rpc::handlers::node::HealthResponse;

use crate::rpc_client;

/// Run the status command.
pub async fn run(endpoint: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Clout v0.1.0");
    println!();
    println!("Node Status");
    println!("-----------");
    println!("  RPC endpoint: {}", endpoint);

    match rpc_client::call_result::<HealthResponse>(endpoint, "node/health", json!({})).await {
        Ok(health) => {
            println!("  Connection:   {}", health.status);
            println!("  Reputes:      {}", health.records);
            match health.uptime_secs {
                Some(secs) => println!("  Uptime:       {}s", secs),
                None => println!("  Uptime:       unknown"),
            }
        }
        Err(e) => {
            println!("  Connection:   unreachable ({})", e);
        }
    }

    Ok(())
}
