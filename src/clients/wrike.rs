use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde_json::Value as JsonValue;
use std::time::Instant;

use crate::core::error::ToolError;
use crate::domain::{HttpMethod, PreparedRequest};
use crate::infra::config::{WrikeConfig, DEFAULT_BASE_URL};
use crate::infra::http::headers::add_standard_headers;
use crate::infra::logging::log_metric;
use crate::infra::runtime::limits::{make_http_client, make_http_client_with};

/// Outbound Wrike v4 client. Cheap to clone; shared read-only across calls.
#[derive(Clone)]
pub struct WrikeRemote {
    base: String,
    token: Option<String>,
    http: Client,
}

impl WrikeRemote {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token: token.filter(|t| !t.trim().is_empty()),
            http: make_http_client(),
        }
    }

    pub fn from_config(cfg: &WrikeConfig) -> Self {
        Self {
            base: cfg.base_url().to_owned(),
            token: cfg.token().map(str::to_owned),
            http: make_http_client_with(cfg),
        }
    }

    /// Client against the public API with no credential; every call fails fast.
    pub fn unconfigured() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    /// Absolute URL for a prepared request. Each path segment is percent-encoded,
    /// so an identifier containing `/` stays a single segment.
    pub fn url_for(&self, req: &PreparedRequest) -> Result<Url, ToolError> {
        let mut url = Url::parse(&self.base)
            .map_err(|e| ToolError::Unconfigured(format!("invalid Wrike base url '{}': {e}", self.base)))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ToolError::Unconfigured(format!("invalid Wrike base url '{}'", self.base))
            })?;
            segments.pop_if_empty().extend(&req.segments);
        }
        if !req.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&req.query);
        }
        Ok(url)
    }

    /// Send one request and decode the reply. No retries.
    pub async fn execute(&self, tool: &str, req: &PreparedRequest) -> Result<JsonValue, ToolError> {
        let token = self.token.as_deref().ok_or_else(|| {
            ToolError::Unconfigured(
                "WRIKE_ACCESS_TOKEN not configured; set it to enable Wrike tools".into(),
            )
        })?;
        let url = self.url_for(req)?;

        let (builder, rid) = add_standard_headers(self.http.request(method(req.method), url), None);
        let mut builder = builder.bearer_auth(token);
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        tracing::debug!(tool, method = %req.method, path = %req.path(), request_id = %rid, "wrike request");
        log_metric(tool, "request_total", 1.0);
        let start = Instant::now();

        let (status, text) = match read_response(builder).await {
            Ok(reply) => reply,
            Err(e) => {
                log_metric(tool, "request_error_total", 1.0);
                tracing::warn!(tool, request_id = %rid, error = %e, "wrike transport failure");
                return Err(e.into());
            }
        };
        let elapsed_ms = start.elapsed().as_millis() as f64;
        log_metric(tool, "request_latency_ms", elapsed_ms);

        if !status.is_success() {
            log_metric(tool, "request_error_total", 1.0);
            tracing::warn!(tool, request_id = %rid, status = status.as_u16(), "wrike upstream error");
            return Err(ToolError::Upstream {
                status: status.as_u16(),
                body: lenient_json(&text),
            });
        }
        tracing::trace!(tool, request_id = %rid, status = status.as_u16(), "wrike response");
        decode_success(&text)
    }
}

/// Send and read the whole body; a failure in either step is a transport error.
async fn read_response(builder: RequestBuilder) -> Result<(StatusCode, String), reqwest::Error> {
    let resp = builder.send().await?;
    let status = resp.status();
    Ok((status, resp.text().await?))
}

fn method(m: HttpMethod) -> Method {
    match m {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Empty success bodies (204) decode to `null`.
fn decode_success(text: &str) -> Result<JsonValue, ToolError> {
    if text.trim().is_empty() {
        return Ok(JsonValue::Null);
    }
    serde_json::from_str(text).map_err(|e| ToolError::Decode(e.to_string()))
}

/// Error bodies are kept even when they are not JSON.
fn lenient_json(text: &str) -> JsonValue {
    if text.trim().is_empty() {
        return JsonValue::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| JsonValue::String(text.to_owned()))
}
