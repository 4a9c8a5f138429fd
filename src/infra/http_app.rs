use axum::{
    routing::{any_service, get, post},
    Router,
};
use std::sync::Arc;

use crate::infra::mcp::{self, LocalSessionManager};
use crate::tools::registry::ToolRegistry;

fn base_routes(registry: ToolRegistry) -> Router<ToolRegistry> {
    let session_mgr = Arc::new(LocalSessionManager::default());
    let mcp_service = mcp::make_streamable_http_service(registry, session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}

/// `/healthz` + streamable MCP at `/mcp`.
pub fn build_app_default(registry: ToolRegistry) -> Router {
    base_routes(registry.clone()).with_state(registry)
}

/// Default app plus the deprecated JSON-RPC shim at `/v1/rpc`.
pub fn build_app_with_deprecated_api(registry: ToolRegistry) -> Router {
    base_routes(registry.clone())
        .route("/v1/rpc", post(crate::api::mcp::http))
        .with_state(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::wrike::WrikeRemote;
    use crate::tools::registry::build_registry;
    use axum::body::{to_bytes, Body};
    use hyper::Request;
    use tower::ServiceExt;

    fn registry() -> ToolRegistry {
        build_registry(WrikeRemote::unconfigured())
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let app = build_app_default(registry());
        let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 200);
        let bytes = to_bytes(resp.into_body(), 1024).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn shim_is_absent_from_default_app() {
        let app = build_app_default(registry());
        let req = Request::builder()
            .method("POST")
            .uri("/v1/rpc")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn shim_is_mounted_when_enabled() {
        let app = build_app_with_deprecated_api(registry());
        let req = Request::builder()
            .method("POST")
            .uri("/v1/rpc")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 200);
    }
}
