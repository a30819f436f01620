//! MCP (Model Context Protocol) server core.
//!
//! Provides a JSON-RPC 2.0 interface over line-delimited stdio: the request
//! dispatcher, the tool contract and registry, and the read/write loop.

/// MCP server implementation.
pub mod server;

/// Tool registry.
pub mod registry;

/// Line-delimited reader/writer.
pub mod stdio;

/// Tool contract and call result types.
pub mod tool;

/// JSON-RPC 2.0 transport types.
pub mod transport;

pub use registry::ToolRegistry;
pub use server::{McpServer, PROTOCOL_VERSION};
pub use stdio::LineTransport;
pub use tool::{Tool, ToolCallResult, ToolContent, ToolDefinition};
pub use transport::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpMethod, METHOD_NOT_FOUND};
