use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Public Solana mainnet endpoint.
pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

#[derive(Debug, Serialize)]
pub(crate) struct JsonRpcRequest {
    jsonrpc: String,
    id: u64,
    method: String,
    params: Vec<Value>,
}

/// Response envelope for getBlock.
///
/// The block itself is kept untyped, it is passed through to the caller
/// unchanged. An absent `result` becomes an empty object, while an explicit
/// `null` (e.g., a slot with no block) stays `null`.
#[derive(Debug, Deserialize)]
pub(crate) struct BlockResponse {
    #[serde(default = "empty_object")]
    pub(crate) result: Value,
    pub(crate) error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcErrorObject {
    #[serde(default)]
    pub(crate) message: String,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Generates a JSON-RPC request for getBlock for the given slot, with
/// json encoding and support for version 0 transactions.
pub(crate) fn get_block(slot: u64) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".to_owned(),
        id: 1,
        method: "getBlock".to_owned(),
        params: vec![
            json!(slot),
            json!({"encoding": "json", "maxSupportedTransactionVersion": 0}),
        ],
    }
}
