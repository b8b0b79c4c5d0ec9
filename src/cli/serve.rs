//! `serve` command: run the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::common::{config_path, load_config, CliError, CliResult};
use crate::web;

/// Start the web server
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute serve command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = load_config(self.config.as_deref())?;
        info!(
            "Using configuration {}",
            config_path(self.config.as_deref())?.display()
        );

        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        let addr = socket_addr(&config.server.host, config.server.port)?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;

        runtime
            .block_on(web::run_server(config, addr))
            .map_err(|e| CliError::io(format!("Server error: {e:#}")))
    }
}

fn socket_addr(host: &str, port: u16) -> CliResult<SocketAddr> {
    format!("{host}:{port}")
        .parse()
        .map_err(|e| CliError::validation(format!("Invalid listen address '{host}:{port}': {e}")))
}
