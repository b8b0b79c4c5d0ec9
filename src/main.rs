//! Komorebi - bilingual mental-wellness site
//!
//! # Usage
//!
//! ```bash
//! # Start the server with the saved configuration
//! komorebi serve
//!
//! # Print the Japanese check-in page with "rainy" selected
//! komorebi render check-in --lang ja --weather rainy
//!
//! # Switch to the minimal header/footer
//! komorebi config set --preset baseline
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use komorebi::cli::{CliResult, ConfigArgs, RenderArgs};
#[cfg(feature = "web")]
use komorebi::cli::ServeArgs;

/// Komorebi - bilingual mental-wellness site
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the web server
    #[cfg(feature = "web")]
    Serve(ServeArgs),
    /// Render a page to stdout or a file
    Render(RenderArgs),
    /// Show or change the configuration
    Config(ConfigArgs),
}

impl Command {
    fn verbose(&self) -> bool {
        match self {
            #[cfg(feature = "web")]
            Self::Serve(args) => args.verbose,
            Self::Render(_) | Self::Config(_) => false,
        }
    }

    fn execute(&self) -> CliResult<()> {
        match self {
            #[cfg(feature = "web")]
            Self::Serve(args) => args.execute(),
            Self::Render(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.command.verbose());

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
}
