//! Shared types for CLI commands: errors, exit codes and config loading.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid arguments or configuration
    ValidationError = 1,
    /// Filesystem, network or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Kind of failure a command reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Bad input from the user
    Validation,
    /// Failure talking to the outside world
    Io,
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

impl CliError {
    /// Validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Kind of this error.
    #[must_use]
    pub const fn kind(&self) -> CliErrorKind {
        self.kind
    }

    /// Exit code the process should terminate with.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Config file to use: `explicit` when given, otherwise the platform default.
pub fn config_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}"))),
    }
}

/// Loads the configuration from `explicit` or the platform default.
pub fn load_config(explicit: Option<&Path>) -> CliResult<Config> {
    let loaded = match explicit {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Saves `config` to `explicit` or the platform default.
pub fn save_config(config: &Config, explicit: Option<&Path>) -> CliResult<()> {
    let saved = match explicit {
        Some(path) => config.save_to(path),
        None => config.save(),
    };
    saved.map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(CliError::validation("x").exit_code().code(), 1);
        assert_eq!(CliError::io("x").exit_code().code(), 2);
        assert_eq!(ExitCode::Success.code(), 0);
    }

    #[test]
    fn test_error_display() {
        let err = CliError::io("disk full");
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(err.kind(), CliErrorKind::Io);
    }

    #[test]
    fn test_load_config_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(Some(&dir.path().join("none.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_config_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::new();
        config.server.port = 4100;

        save_config(&config, Some(&path)).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap().server.port, 4100);
    }

    #[test]
    fn test_load_config_invalid_file_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server = 3").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
        assert!(err.to_string().contains("Failed to load configuration"));
    }
}
