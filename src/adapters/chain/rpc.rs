//! Sui JSON-RPC envelope and response types.
//!
//! Only the fields the reader consumes are modelled; everything else
//! the fullnode returns is ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ports::chain_reader::ModuleEvent;

/// JSON-RPC 2.0 request.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcError>,
}

/// JSON-RPC error object.
#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// `sui_getObject` result.
#[derive(Debug, Deserialize)]
pub struct ObjectResponse {
    pub data: Option<ObjectData>,
    /// Present when the object does not exist or was deleted.
    pub error: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ObjectData {
    pub content: Option<ObjectContent>,
}

/// Parsed object content. Packages carry no `fields`.
#[derive(Debug, Deserialize)]
pub struct ObjectContent {
    #[serde(rename = "dataType")]
    pub data_type: String,
    #[serde(default)]
    pub fields: Option<Map<String, Value>>,
}

/// `suix_queryEvents` page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPage {
    pub data: Vec<ModuleEvent>,
    #[serde(default)]
    pub next_cursor: Option<Value>,
    #[serde(default)]
    pub has_next_page: bool,
}
