//! Deprecated line-oriented JSON-RPC shim over the tool registry.
//!
//! Served over HTTP at `/v1/rpc` and, via `wrike-mcp-gateway rpc`, as
//! newline-delimited frames on stdin/stdout.

use axum::Json;
use serde_json::{json, Value as J};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::core::error::ToolError;
use crate::core::mcp::{InitializeResult, RpcReq, RpcResp, METHOD_NOT_FOUND};
use crate::infra::http::json as http_json;
use crate::tools::registry::ToolRegistry;

fn tools_list(reg: &ToolRegistry) -> J {
    let tools: Vec<J> = reg
        .list()
        .into_iter()
        .map(|t| json!({ "name": t.name, "description": t.description, "inputSchema": t.input_schema }))
        .collect();
    json!({ "tools": tools })
}

async fn call_tool(reg: &ToolRegistry, params: &J) -> Result<J, ToolError> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::MissingParameter("name".into()))?;
    let args = params.get("arguments").unwrap_or(&J::Null);
    reg.call(name, args).await
}

async fn dispatch(reg: &ToolRegistry, req: RpcReq) -> RpcResp {
    let id = req.id;
    match req.method.as_str() {
        "initialize" => {
            let init = serde_json::to_value(InitializeResult::current()).unwrap_or(J::Null);
            http_json::ok(id, init).0
        }
        "shutdown" => http_json::ok(id, J::Null).0,
        "tools.list" | "tools/list" => http_json::ok(id, tools_list(reg)).0,
        "tools.call" | "tools/call" => match call_tool(reg, &req.params).await {
            Ok(out) => http_json::ok(id, out).0,
            Err(e) => {
                tracing::warn!(error = %e, "tools.call error response");
                http_json::from_tool_error(id, e).0
            }
        },
        other => http_json::error(id, METHOD_NOT_FOUND, format!("unknown method: {other}")).0,
    }
}

// HTTP handler
pub async fn http(
    axum::extract::State(reg): axum::extract::State<ToolRegistry>,
    Json(req): Json<RpcReq>,
) -> Json<RpcResp> {
    tracing::debug!(method = %req.method, id = ?req.id, "rpc shim request");
    let resp = dispatch(&reg, req).await;
    tracing::trace!(response = ?resp, "rpc shim response");
    Json(resp)
}

/// Answer one JSON-RPC frame per non-empty input line until EOF.
pub async fn serve_lines<R, W>(reg: &ToolRegistry, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let resp = match serde_json::from_str::<RpcReq>(&line) {
            Ok(req) => dispatch(reg, req).await,
            Err(e) => http_json::parse_error(format!("parse error: {e}")).0,
        };
        let mut out = serde_json::to_vec(&resp)?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        writer.flush().await?;
    }
    Ok(())
}

pub async fn stdio_loop(reg: ToolRegistry) -> anyhow::Result<()> {
    tracing::info!("mode=rpc-stdio");
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    serve_lines(&reg, stdin, tokio::io::stdout()).await
}
