// crates/clout-cli/src/rpc_client.rs
//
// Lightweight JSON-RPC client that POSTs to the clout-daemon HTTP endpoint.

use serde::de::DeserializeOwned;

use clout_rpc::{JsonRpcRequest, JsonRpcResponse};

/// Send a JSON-RPC call to the daemon and return the parsed envelope.
pub async fn rpc_call(
    endpoint: &str,
    method: &str,
    params: serde_json::Value,
) -> Result<JsonRpcResponse, Box<dyn std::error::Error>> {
    let request = JsonRpcRequest::new(method, params);

    let client = reqwest::Client::new();
    let resp = client.post(endpoint).json(&request).send().await?;

    let rpc_response: JsonRpcResponse = resp.json().await?;
    Ok(rpc_response)
}

/// Call `method` and decode its result, turning a failed envelope into an error.
pub async fn call_result<T: DeserializeOwned>(
    endpoint: &str,
    method: &str,
    params: serde_json::Value,
) -> Result<T, Box<dyn std::error::Error>> {
    let response = rpc_call(endpoint, method, params).await?;
    unwrap_envelope(response)
}

fn unwrap_envelope<T: DeserializeOwned>(
    response: JsonRpcResponse,
) -> Result<T, Box<dyn std::error::Error>> {
    if !response.success {
        let message = response
            .error
            .unwrap_or_else(|| "request failed without an error message".to_string());
        return Err(message.into());
    }
    let result = response.result.unwrap_or(serde_json::Value::Null);
    Ok(serde_json::from_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: serde_json::Value) -> JsonRpcResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_unwrap_success() {
        let resp = envelope(serde_json::json!({
            "success": true,
            "result": { "created": true, "message": "rid-1 successfully created." },
            "error": null
        }));
        let value: serde_json::Value = unwrap_envelope(resp).unwrap();
        assert_eq!(value["created"], serde_json::json!(true));
    }

    #[test]
    fn test_unwrap_failure_carries_message() {
        let resp = envelope(serde_json::json!({
            "success": false,
            "result": null,
            "error": "Reputee could not be found."
        }));
        let err = unwrap_envelope::<serde_json::Value>(resp).unwrap_err();
        assert_eq!(err.to_string(), "Reputee could not be found.");
    }
}
