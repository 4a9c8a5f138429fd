use crate::infra::config::Config;
use crate::tools::mcp_router::WrikeSvc;
use crate::tools::registry::build_registry_from_env;
use std::net::SocketAddr;

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env();
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        deprecate_rest = cfg.deprecate_rest,
        "BOOT wrike-mcp-gateway"
    );

    cfg.validate()?;
    let registry = build_registry_from_env();

    if cfg.is_stdio() {
        crate::infra::mcp::serve_stdio_from(move || WrikeSvc::new(registry))
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = if cfg.deprecate_rest {
        crate::infra::http_app::build_app_default(registry)
    } else {
        crate::infra::http_app::build_app_with_deprecated_api(registry)
    };

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
