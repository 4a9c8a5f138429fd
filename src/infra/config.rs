use serde::Deserialize;
use std::path::Path;

use crate::core::error::GatewayError;

pub const DEFAULT_BASE_URL: &str = "https://www.wrike.com/api/v4";
pub const DEFAULT_CONFIG_PATH: &str = "wrike-mcp.toml";

pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub port: u16,
    pub deprecate_rest: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE").unwrap_or_else(|_| "server".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let deprecate_rest = std::env::var("DEPRECATE_REST")
            .map(|v| !v.is_empty())
            .unwrap_or(false);

        Self {
            mode,
            port,
            deprecate_rest,
        }
    }

    pub fn is_stdio(&self) -> bool {
        self.mode == "stdio"
    }

    /// Reject modes other than `server`/`stdio` and port 0.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.mode != "server" && self.mode != "stdio" {
            return Err(GatewayError::Config(format!(
                "MODE must be 'server' or 'stdio', got '{}'",
                self.mode
            )));
        }
        if self.port == 0 {
            return Err(GatewayError::Config("PORT must be between 1 and 65535".into()));
        }
        Ok(())
    }
}

/// Settings for the outbound Wrike client.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct WrikeConfig {
    pub base_url: Option<String>,
    pub access_token: Option<String>,
    pub timeout_ms: Option<u64>,
    pub connect_timeout_ms: Option<u64>,
}

impl WrikeConfig {
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|s| !s.trim().is_empty())
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("WRIKE_BASE_URL") {
            self.base_url = Some(v);
        }
        if let Ok(v) = std::env::var("WRIKE_ACCESS_TOKEN") {
            self.access_token = Some(v);
        }
        if let Some(v) = env_u64("WRIKE_TIMEOUT_MS") {
            self.timeout_ms = Some(v);
        }
        if let Some(v) = env_u64("WRIKE_CONNECT_TIMEOUT_MS") {
            self.connect_timeout_ms = Some(v);
        }
    }
}

/// File + environment configuration. Environment wins over the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub wrike: WrikeConfig,
}

impl AppConfig {
    pub fn from_env_and_toml() -> Self {
        let path = std::env::var("WRIKE_MCP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let mut cfg = Self::from_toml_file(Path::new(&path));
        cfg.wrike.apply_env();
        cfg
    }

    /// Missing or unreadable files yield defaults; parse errors are logged.
    pub fn from_toml_file(path: &Path) -> Self {
        let Ok(text) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        Self::from_toml_str(&text).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config file");
            Self::default()
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|s| s.parse::<u64>().ok())
}
