use std::process::ExitCode;

use wrike_mcp_gateway::{cli, infra};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    infra::logging::init();

    match cli::parse().command {
        Some(command) => Ok(cli::run_commands(command).await),
        None => {
            infra::boot::run_server().await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
