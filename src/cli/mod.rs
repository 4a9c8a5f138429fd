use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::infra::config::{AppConfig, Config};
use crate::infra::http::headers::mask_token;
use crate::tools::catalog::OPERATIONS;
use crate::tools::registry::{build_registry_from_env, ToolRegistry};

#[derive(Parser)]
#[command(name = "wrike-mcp-gateway")]
#[command(about = "Wrike MCP Gateway - server and admin CLI")]
#[command(version)]
pub struct Cli {
    /// Without a command the server boots (see MODE/PORT).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Health check the service
    Health {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Validate configuration
    Config {
        /// Validate config without starting service
        #[arg(long)]
        validate: bool,
    },
    /// Show service status and configuration
    Status {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// List the Wrike operations exposed as tools
    Tools,
    /// Invoke one tool against the configured Wrike API
    Call {
        /// Tool name, e.g. get_tasks_by_taskid
        tool: String,
        /// Arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
    /// Serve the deprecated line-delimited JSON-RPC shim on stdin/stdout
    Rpc,
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("✅ Service is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Health check failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate: _ } => match validate_config() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Configuration validation failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Status { url } => match show_status(&url).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("❌ Status check failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Tools => {
            print!("{}", render_catalog());
            ExitCode::SUCCESS
        }
        Commands::Call { tool, args } => {
            match call_tool(&build_registry_from_env(), &tool, &args).await {
                Ok(out) => {
                    println!("{out}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("❌ {tool} failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Rpc => match crate::api::mcp::stdio_loop(build_registry_from_env()).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("❌ RPC loop failed: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

async fn health_check(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/healthz", url))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()).into())
    }
}

fn validate_config() -> Result<(), Box<dyn std::error::Error>> {
    Config::from_env().validate()?;

    let app = AppConfig::from_env_and_toml();
    reqwest::Url::parse(app.wrike.base_url())
        .map_err(|e| format!("Invalid Wrike base URL '{}': {}", app.wrike.base_url(), e))?;
    if app.wrike.token().is_none() {
        return Err("WRIKE_ACCESS_TOKEN is not set".into());
    }
    if matches!(app.wrike.timeout_ms, Some(0)) || matches!(app.wrike.connect_timeout_ms, Some(0)) {
        return Err("Wrike timeouts must be greater than 0".into());
    }
    Ok(())
}

async fn show_status(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();

    let health_response = client
        .get(format!("{}/healthz", url))
        .timeout(std::time::Duration::from_secs(5))
        .send()
        .await?;

    println!(
        "🏥 Health Status: {}",
        if health_response.status().is_success() {
            "✅ Healthy"
        } else {
            "❌ Unhealthy"
        }
    );

    println!("{}", tools_status(&client, url).await);

    let cfg = Config::from_env();
    let app = AppConfig::from_env_and_toml();
    println!("\n📋 Configuration:");
    println!("  Mode: {}", cfg.mode);
    println!("  Port: {}", cfg.port);
    println!(
        "  Log Level: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    );
    println!("  Wrike API: {}", app.wrike.base_url());
    match app.wrike.token() {
        Some(t) => println!("  Access Token: {}", mask_token(t)),
        None => println!("  Access Token: Not configured"),
    }

    Ok(())
}

/// `tools/list` over the JSON-RPC shim. A 404 means the server runs with
/// `DEPRECATE_REST` and only serves `/mcp`.
async fn tools_status(client: &reqwest::Client, url: &str) -> String {
    let tools_response = client
        .post(format!("{}/v1/rpc", url))
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/list",
            "params": {}
        }))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await;

    match tools_response {
        Ok(resp) if resp.status().is_success() => {
            let count = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v["result"]["tools"].as_array().map(Vec::len));
            match count {
                Some(n) => format!("🔧 Tools: ✅ {} available", n),
                None => "🔧 Tools: ✅ Available".into(),
            }
        }
        Ok(resp) if resp.status() == reqwest::StatusCode::NOT_FOUND => {
            "🔧 Tools: ➖ JSON-RPC shim disabled (DEPRECATE_REST), tools are served on /mcp".into()
        }
        Ok(resp) => format!("🔧 Tools: ❌ HTTP {}", resp.status()),
        Err(_) => "🔧 Tools: ❌ Unavailable".into(),
    }
}

fn render_catalog() -> String {
    OPERATIONS
        .iter()
        .map(|op| format!("{:<42} {:<6} {}\n", op.name, op.method.as_str(), op.path))
        .collect()
}

async fn call_tool(
    registry: &ToolRegistry,
    tool: &str,
    args: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let args: serde_json::Value =
        serde_json::from_str(args).map_err(|e| format!("--args is not valid JSON: {}", e))?;
    match registry.call(tool, &args).await {
        Ok(out) => Ok(serde_json::to_string_pretty(&out)?),
        Err(e) => match e.upstream_detail() {
            Some(detail) => Err(format!("{}: {}", e, detail).into()),
            None => Err(e.into()),
        },
    }
}
