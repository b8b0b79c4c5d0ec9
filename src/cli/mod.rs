//! CLI command handlers for Komorebi.
//!
//! Every command is a clap `Args` struct with an `execute` method returning
//! [`CliResult`](common::CliResult); `main` maps errors to exit codes.

pub mod common;
pub mod config;
pub mod render;
#[cfg(feature = "web")]
pub mod serve;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use render::RenderArgs;
#[cfg(feature = "web")]
pub use serve::ServeArgs;
