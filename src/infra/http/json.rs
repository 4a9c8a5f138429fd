use axum::Json;

use crate::core::error::ToolError;
use crate::core::mcp::{
    err as rpc_err, ok as rpc_ok, RpcResp, APPLICATION_ERROR, INVALID_PARAMS, PARSE_ERROR,
};

pub fn ok(id: serde_json::Value, result: serde_json::Value) -> Json<RpcResp> {
    Json(rpc_ok(id, result))
}

pub fn error(id: serde_json::Value, code: i32, message: impl Into<String>) -> Json<RpcResp> {
    Json(rpc_err(id, code, message, None))
}

pub fn parse_error(message: impl Into<String>) -> Json<RpcResp> {
    Json(rpc_err(serde_json::Value::Null, PARSE_ERROR, message, None))
}

/// Usage errors map to -32602; everything else is a -32000 application error,
/// with `{"status","body"}` attached for upstream failures.
pub fn from_tool_error(id: serde_json::Value, err: ToolError) -> Json<RpcResp> {
    let code = if err.is_usage() { INVALID_PARAMS } else { APPLICATION_ERROR };
    Json(rpc_err(id, code, err.to_string(), err.upstream_detail()))
}
