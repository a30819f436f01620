use thiserror::Error;

/// Errors that can occur while serving requests or talking to the store.
#[derive(Error, Debug)]
pub enum SalesAgentError {
    #[error("database error: {message} (operation: {operation})")]
    Database { message: String, operation: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `SalesAgentError`.
pub type Result<T> = std::result::Result<T, SalesAgentError>;

/// Failure raised by a tool's `execute`.
///
/// Domain problems (bad arguments, missing rows) are not errors at all: tools
/// encode them as a `{"status":"error"}` payload. This type only covers the
/// two ways a call can actually fail.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The tool gave up on this call but the server is healthy. Reported to
    /// the client inside the result with `isError: true`.
    #[error("{0}")]
    Execution(String),

    /// Something underneath the tool broke. Propagates to the transport loop,
    /// which logs it and sends no reply for the request.
    #[error(transparent)]
    Fault(#[from] SalesAgentError),
}

impl ToolError {
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }
}
