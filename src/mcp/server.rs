//! MCP server that reads JSON-RPC 2.0 messages line by line and writes
//! responses as single JSON lines.
//!
//! Diagnostics go through `tracing`, whose subscriber writes to stderr, so
//! the response stream only ever carries JSON-RPC.

use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tracing::{debug, error, info, warn};

use crate::errors::{Result, ToolError};

use super::registry::ToolRegistry;
use super::stdio::LineTransport;
use super::tool::{ToolCallResult, ToolDefinition};
use super::transport::{JsonRpcRequest, JsonRpcResponse, McpMethod, METHOD_NOT_FOUND};

/// MCP protocol revision announced during `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// The MCP server: identity plus the tools it exposes.
pub struct McpServer {
    name: String,
    version: String,
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(name: impl Into<String>, version: impl Into<String>, registry: ToolRegistry) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            registry,
        }
    }

    /// Runs the server on process stdin/stdout until stdin is closed.
    pub async fn run_stdio(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run(stdin, stdout).await
    }

    /// Reads requests from `reader` until end of input, answering on `writer`.
    ///
    /// Malformed lines are skipped. A fault raised while dispatching a request
    /// is logged and the request goes unanswered; the loop keeps going. Only
    /// a failure to write a response stops the server with an error.
    pub async fn run<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(name = %self.name, version = %self.version, "starting MCP server");
        let mut transport = LineTransport::new(reader, writer);

        loop {
            let line = match transport.read_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    info!("input closed, shutting down");
                    return Ok(());
                }
                Err(e) => {
                    warn!(error = %e, "failed to read input, shutting down");
                    return Ok(());
                }
            };

            let Some(request) = JsonRpcRequest::from_line(&line) else {
                debug!(len = line.len(), "skipping malformed line");
                continue;
            };
            debug!(method = %request.method, id = %request.id, "received request");

            match self.dispatch(&request) {
                Ok(Some(response)) => transport.write_response(&response).await?,
                Ok(None) => {}
                Err(e) => {
                    error!(method = %request.method, id = %request.id, error = %e, "request failed");
                }
            }
        }
    }

    /// Routes one request to its handler.
    ///
    /// Returns `Ok(None)` when no response must be sent. An `Err` is a fault
    /// from inside a tool that the tool could not turn into a result.
    pub fn dispatch(&self, request: &JsonRpcRequest) -> Result<Option<JsonRpcResponse>> {
        let id = request.id.clone();

        let response = match McpMethod::parse(&request.method) {
            McpMethod::Initialize => self.handle_initialize(id),
            McpMethod::Initialized => return Ok(None),
            McpMethod::ToolsList => self.handle_tools_list(id),
            McpMethod::ToolsCall => self.handle_tools_call(id, request.params.as_ref())?,
            McpMethod::Unknown(_) => JsonRpcResponse::error(id, METHOD_NOT_FOUND, "Method not found"),
        };

        Ok(Some(response))
    }

    /// Handles the `initialize` method, returning server capabilities.
    fn handle_initialize(&self, id: Value) -> JsonRpcResponse {
        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": { "listChanged": false }
                },
                "serverInfo": {
                    "name": self.name,
                    "version": self.version
                }
            }),
        )
    }

    /// Handles the `tools/list` method, returning all tool definitions.
    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        let tools: Vec<ToolDefinition> = self.registry.list().map(|tool| tool.definition()).collect();
        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    /// Handles the `tools/call` method.
    ///
    /// A missing or non-string `name` is treated like an unknown tool, and
    /// `arguments` that are not an object are treated as empty.
    fn handle_tools_call(&self, id: Value, params: Option<&Value>) -> Result<JsonRpcResponse> {
        let tool_name = params
            .and_then(|p| p.get("name"))
            .and_then(|v| v.as_str())
            .unwrap_or_default();

        let Some(tool) = self.registry.get(tool_name) else {
            return Ok(JsonRpcResponse::error(id, METHOD_NOT_FOUND, "Tool not found"));
        };

        let arguments = params
            .and_then(|p| p.get("arguments"))
            .and_then(|v| v.as_object())
            .cloned()
            .unwrap_or_else(Map::new);

        let result = match tool.execute(&arguments) {
            Ok(text) => ToolCallResult::text(text),
            Err(ToolError::Execution(message)) => {
                warn!(tool = tool_name, error = %message, "tool call failed");
                ToolCallResult::failure(&message)
            }
            Err(ToolError::Fault(e)) => return Err(e),
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }
}
