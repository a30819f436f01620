//! The contract every tool exposed over MCP implements.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ToolError;

/// A tool definition exposed by the MCP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
    /// JSON Schema describing the tool's input parameters.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// A named, schema-described operation that can be invoked by clients.
///
/// `execute` returns a JSON-encoded payload with at least a `status` field
/// (`"success"` or `"error"`, plus `message` on error). Argument problems and
/// missing rows belong in that payload; `Err` is reserved for real failures.
pub trait Tool {
    /// Dispatch key; unique within a registry.
    fn name(&self) -> &str;

    /// Static metadata returned by `tools/list`.
    fn definition(&self) -> ToolDefinition;

    fn execute(&self, arguments: &Map<String, Value>) -> Result<String, ToolError>;
}

/// One item of a `tools/call` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// The `result` object of a `tools/call` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolCallResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent {
                kind: "text".to_string(),
                text: text.into(),
            }],
            is_error: false,
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            is_error: true,
            ..Self::text(format!("Error: {message}"))
        }
    }
}
