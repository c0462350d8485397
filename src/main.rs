//! RAX Account Server - Entry Point
//!
//! Account registration, login and image reference uploads over HTTP.

use std::process::ExitCode;

use log::info;

use rax_account_server::config::ServerConfig;
use rax_account_server::error::ServerError;
use rax_account_server::error::handlers::handle_error;
use rax_account_server::server::Server;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Launching account server...");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::load()?;
    let server = Server::new(config).await?;
    server.start().await
}
