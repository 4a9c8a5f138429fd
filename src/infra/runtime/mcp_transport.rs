//! Generic MCP transport helpers (stdio + streamable HTTP) decoupled from tool logic.

use std::sync::Arc;

use rmcp::serve_server;
use rmcp::transport::streamable_http_server::tower::{StreamableHttpServerConfig, StreamableHttpService};

pub use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
pub use rmcp::ServerHandler;

/// Serve one handler over stdin/stdout until the peer disconnects.
pub async fn serve_stdio<H>(handler: H) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    H: ServerHandler,
{
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();
    let running = serve_server(handler, (stdin, stdout)).await?;
    let reason = running.waiting().await?;
    tracing::info!(?reason, "stdio MCP session ended");
    Ok(())
}

pub fn make_streamable_http_service<H>(
    factory: impl Fn() -> H + Send + Sync + Clone + 'static,
    session_mgr: Arc<LocalSessionManager>,
) -> StreamableHttpService<H, LocalSessionManager>
where
    H: ServerHandler,
{
    let cfg = StreamableHttpServerConfig::default();
    tracing::debug!(stateful_mode = %cfg.stateful_mode, keep_alive = ?cfg.sse_keep_alive, "streamable HTTP config");
    StreamableHttpService::new(move || Ok(factory()), session_mgr, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::wrike::WrikeRemote;
    use crate::tools::mcp_router::WrikeSvc;
    use crate::tools::registry::build_registry;

    #[test]
    fn builds_streamable_service_from_factory() {
        let session_mgr = Arc::new(LocalSessionManager::default());
        let registry = build_registry(WrikeRemote::unconfigured());
        let factory = move || WrikeSvc::new(registry.clone());
        let _service = make_streamable_http_service(factory, session_mgr);
    }
}
