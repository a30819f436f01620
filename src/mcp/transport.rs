//! JSON-RPC 2.0 message types for the MCP server.
//!
//! Provides serialization and deserialization of JSON-RPC 2.0 messages
//! used to communicate between the MCP client and server over stdio.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error code for both an unknown method and an unknown tool.
pub const METHOD_NOT_FOUND: i32 = -32601;

/// A JSON-RPC 2.0 request received from the client.
///
/// Only `method`, `id` and `params` are read. The `jsonrpc` member is never
/// inspected, so a missing or odd-typed version does not lose the request.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRpcRequest {
    /// Request identifier. May be a number, string, or null.
    /// Absent for notifications.
    pub id: Value,
    /// The RPC method name. A non-string `method` keeps its JSON text
    /// (e.g. `7`), which never names a known method.
    pub method: String,
    /// Optional parameters for the method.
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Decodes one input line. Returns `None` for anything that is not a
    /// JSON object with a non-null `method`.
    pub fn from_line(line: &str) -> Option<Self> {
        serde_json::from_str(line).ok().and_then(Self::from_value)
    }

    /// Pulls the request members out of an already decoded message.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut message) = value else {
            return None;
        };
        let method = match message.remove("method")? {
            Value::Null => return None,
            Value::String(method) => method,
            other => other.to_string(),
        };

        Some(Self {
            id: message.remove("id").unwrap_or(Value::Null),
            method,
            params: message.remove("params"),
        })
    }
}

/// A JSON-RPC 2.0 response sent back to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version; always `"2.0"`.
    pub jsonrpc: String,
    /// The request identifier that this response corresponds to.
    pub id: Value,
    /// The result on success; absent on error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// The error on failure; absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Creates a successful JSON-RPC response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Creates an error JSON-RPC response.
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }

    /// Serializes the response as one compact line, without the trailing newline.
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Numeric error code.
    pub code: i32,
    /// Human-readable error message.
    pub message: String,
}

/// The methods this server understands, plus a catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McpMethod<'a> {
    Initialize,
    /// `notifications/initialized`; never answered.
    Initialized,
    ToolsList,
    ToolsCall,
    Unknown(&'a str),
}

impl<'a> McpMethod<'a> {
    pub fn parse(method: &'a str) -> Self {
        match method {
            "initialize" => Self::Initialize,
            "notifications/initialized" => Self::Initialized,
            "tools/list" => Self::ToolsList,
            "tools/call" => Self::ToolsCall,
            other => Self::Unknown(other),
        }
    }
}
