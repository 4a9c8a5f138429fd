use reqwest::RequestBuilder;

/// Generate a simple request id suitable for logging/correlation.
pub fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("wmg-{}-{}", now.as_secs(), now.subsec_nanos())
}

/// Add standard headers to an outgoing request. Returns the updated builder and the request id used.
pub fn add_standard_headers(
    builder: RequestBuilder,
    request_id: Option<String>,
) -> (RequestBuilder, String) {
    let rid = request_id.unwrap_or_else(generate_request_id);
    let b = builder
        .header("x-request-id", rid.as_str())
        .header(reqwest::header::ACCEPT, "application/json")
        .header(
            reqwest::header::USER_AGENT,
            format!("wrike-mcp-gateway/{}", env!("CARGO_PKG_VERSION")),
        );
    (b, rid)
}

/// Mask a credential for display: keep the first and last four characters.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_are_prefixed() {
        assert!(generate_request_id().starts_with("wmg-"));
    }

    #[test]
    fn keeps_supplied_request_id() {
        let client = reqwest::Client::new();
        let (_b, rid) = add_standard_headers(client.get("http://localhost/"), Some("abc".into()));
        assert_eq!(rid, "abc");
    }

    #[test]
    fn masks_tokens() {
        assert_eq!(mask_token("short"), "*****");
        assert_eq!(mask_token("abcdefghijkl"), "abcd...ijkl");
    }
}
