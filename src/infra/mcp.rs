//! MCP server wiring for wrike-mcp-gateway.
//!
//! - Mounts the Streamable HTTP service (POST frames, GET SSE) at `/mcp`
//! - Serves stdio when `MODE=stdio`

use std::sync::Arc;

use rmcp::transport::streamable_http_server::tower::StreamableHttpService;

pub use crate::infra::runtime::mcp_transport::LocalSessionManager;

use crate::infra::runtime::mcp_transport;
use crate::tools::mcp_router::WrikeSvc;
use crate::tools::registry::ToolRegistry;

/// Streamable HTTP service sharing one registry across sessions.
pub fn make_streamable_http_service(
    registry: ToolRegistry,
    session_mgr: Arc<LocalSessionManager>,
) -> StreamableHttpService<WrikeSvc, LocalSessionManager> {
    tracing::info!(tools = registry.len(), "mounting streamable MCP service");
    mcp_transport::make_streamable_http_service(move || WrikeSvc::new(registry.clone()), session_mgr)
}

/// Stdio MCP; logs stay on stderr so stdout carries only frames.
pub async fn serve_stdio_from(
    factory: impl FnOnce() -> WrikeSvc,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    mcp_transport::serve_stdio(factory()).await
}
