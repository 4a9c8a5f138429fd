use serde_json::{json, Value as JsonValue};
use thiserror::Error;

/// Process-level failures that stop the gateway from booting.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Failure of a single tool invocation.
///
/// Usage errors (`MissingParameter`, `InvalidParameter`, `UnknownTool`) are
/// raised before any network traffic. The remaining variants come from the
/// outbound request itself.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("missing required parameter '{0}'")]
    MissingParameter(String),
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("{0}")]
    Unconfigured(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream status {status}")]
    Upstream { status: u16, body: JsonValue },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ToolError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ToolError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's arguments rather than the API.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ToolError::MissingParameter(_)
                | ToolError::InvalidParameter { .. }
                | ToolError::UnknownTool(_)
        )
    }

    /// Structured detail for upstream failures: `{"status": .., "body": ..}`.
    pub fn upstream_detail(&self) -> Option<JsonValue> {
        match self {
            ToolError::Upstream { status, body } => Some(json!({ "status": status, "body": body })),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(e: reqwest::Error) -> Self {
        ToolError::Transport(e.to_string())
    }
}
