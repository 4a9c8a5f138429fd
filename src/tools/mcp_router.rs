//! MCP handler exposing every registered Wrike tool.
//!
//! Tools are table-driven, so `list_tools`/`call_tool` are implemented by hand
//! over the [`ToolRegistry`] instead of through `#[tool_router]`.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool as McpTool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};
use serde_json::Value as JsonValue;

use crate::core::error::ToolError;
use crate::tools::registry::ToolRegistry;

const INSTRUCTIONS: &str = "Wrike v4 API tools. Each tool maps to one endpoint; \
arguments are validated against the tool's input schema and the API's JSON \
response is returned unchanged as structured content.";

#[derive(Clone)]
pub struct WrikeSvc {
    registry: ToolRegistry,
}

impl WrikeSvc {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn tool_list(&self) -> Vec<McpTool> {
        self.registry
            .list()
            .into_iter()
            .map(|meta| {
                let schema = match meta.input_schema {
                    JsonValue::Object(map) => map,
                    _ => JsonObject::new(),
                };
                McpTool::new(meta.name, meta.description, Arc::new(schema))
            })
            .collect()
    }

    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let args = arguments.map(JsonValue::Object).unwrap_or(JsonValue::Null);
        match self.registry.call(name, &args).await {
            Ok(payload) => Ok(into_success(payload)),
            Err(e) => into_mcp_result(name, e),
        }
    }
}

/// `structuredContent` must be an object. A 204 (`null`) yields an empty
/// result; any other non-object payload travels as JSON text.
fn into_success(payload: JsonValue) -> CallToolResult {
    match payload {
        JsonValue::Object(_) => CallToolResult::structured(payload),
        JsonValue::Null => CallToolResult::success(vec![]),
        other => CallToolResult::success(vec![Content::text(other.to_string())]),
    }
}

/// Upstream API failures stay in-band as tool errors; everything else is a
/// protocol error.
fn into_mcp_result(tool: &str, err: ToolError) -> Result<CallToolResult, McpError> {
    if let Some(detail) = err.upstream_detail() {
        tracing::debug!(tool, error = %err, "tool returned upstream error");
        return Ok(CallToolResult::structured_error(detail));
    }
    if err.is_usage() {
        tracing::debug!(tool, error = %err, "rejected tool arguments");
        return Err(McpError::invalid_params(err.to_string(), None));
    }
    tracing::warn!(tool, error = %err, "tool call failed");
    Err(McpError::internal_error(err.to_string(), None))
}

impl ServerHandler for WrikeSvc {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = env!("CARGO_PKG_NAME").into();
        server_info.version = env!("CARGO_PKG_VERSION").into();
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            instructions: Some(INSTRUCTIONS.into()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: self.tool_list(),
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&request.name, request.arguments).await
    }
}
