//! Configuration management CLI commands.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{config_path, load_config, save_config, CliError, CliResult};
use crate::config::{Config, FeaturePreset};
use crate::i18n::{Language, Localized};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Feature preset (baseline or full)
    #[arg(long, value_name = "PRESET")]
    preset: Option<String>,

    /// Port the server listens on
    #[arg(long)]
    port: Option<u16>,

    /// Host the server binds to
    #[arg(long)]
    host: Option<String>,

    /// Name in the footer copyright line
    #[arg(long, value_name = "NAME")]
    copyright_holder: Option<String>,

    /// Footer tagline as LANG=TEXT; give one per language
    #[arg(long, value_name = "LANG=TEXT")]
    tagline: Vec<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: String,
    preset: String,
    #[serde(flatten)]
    config: &'a Config,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        let path = self.config.as_deref();
        match &self.command {
            ConfigCommand::Show(args) => args.execute(path),
            ConfigCommand::Set(args) => args.execute(path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, path: Option<&Path>) -> CliResult<()> {
        let config = load_config(path)?;
        let shown = config_path(path)?;

        if self.json {
            output_json(&config, &shown)?;
        } else {
            output_human_readable(&config, &shown);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, path: Option<&Path>) -> CliResult<()> {
        if self.preset.is_none()
            && self.port.is_none()
            && self.host.is_none()
            && self.copyright_holder.is_none()
            && self.tagline.is_empty()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --preset, --port, --host, --copyright-holder, or --tagline",
            ));
        }

        let mut config = load_config(path)?;

        if let Some(preset) = &self.preset {
            let preset: FeaturePreset = preset
                .parse()
                .map_err(|e| CliError::validation(format!("{e}")))?;
            config.apply_preset(preset);
        }

        if let Some(port) = self.port {
            if port == 0 {
                return Err(CliError::validation("Port must be between 1 and 65535"));
            }
            config.server.port = port;
        }

        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }

        if let Some(holder) = &self.copyright_holder {
            config.content.copyright_holder.clone_from(holder);
        }

        if !self.tagline.is_empty() {
            config.content.tagline = parse_tagline(&self.tagline)?;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        save_config(&config, path)?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Parses `LANG=TEXT` entries into a tagline covering every language.
fn parse_tagline(entries: &[String]) -> CliResult<Localized<String>> {
    let mut parsed = Vec::with_capacity(entries.len());
    for entry in entries {
        let (lang, text) = entry.split_once('=').ok_or_else(|| {
            CliError::validation(format!("Invalid tagline '{entry}': expected LANG=TEXT"))
        })?;
        let lang: Language = lang
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;
        parsed.push((lang, text.to_string()));
    }
    Localized::from_entries(parsed).map_err(|e| CliError::validation(format!("{e}")))
}

/// Output configuration in JSON format
fn output_json(config: &Config, path: &Path) -> CliResult<()> {
    let output = ConfigOutput {
        path: path.display().to_string(),
        preset: preset_name(config),
        config,
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &Path) {
    let features = config.features;
    println!("Configuration ({})", path.display());
    println!();
    println!("Server:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!();
    println!("Features (preset: {}):", preset_name(config));
    println!("  Dark mode:     {}", on_off(features.dark_mode_enabled));
    println!("  Pricing link:  {}", on_off(features.show_pricing_link));
    println!("  Auth controls: {}", on_off(features.show_auth_controls));
    println!("  Install link:  {}", on_off(features.show_install_link));
    println!();
    println!("Content:");
    println!("  Copyright: {} {}", config.content.effective_year(), config.content.copyright_holder);
    for &lang in Language::all() {
        println!("  Tagline ({lang}): {}", config.content.tagline.text(lang));
    }
}

fn preset_name(config: &Config) -> String {
    config
        .preset()
        .map_or_else(|| "custom".to_string(), |p| p.to_string())
}

const fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagline_both_languages() {
        let tagline = parse_tagline(&["ja=いまここ".to_string(), "en=Here and now".to_string()])
            .unwrap();
        assert_eq!(tagline.text(Language::En), "Here and now");
        assert_eq!(tagline.text(Language::Ja), "いまここ");
    }

    #[test]
    fn test_parse_tagline_missing_language() {
        let err = parse_tagline(&["en=Here and now".to_string()]).unwrap_err();
        assert!(err.to_string().contains("'ja'"));
    }

    #[test]
    fn test_parse_tagline_malformed() {
        assert!(parse_tagline(&["Here and now".to_string()]).is_err());
        assert!(parse_tagline(&["fr=Ici".to_string(), "en=Here".to_string()]).is_err());
    }

    #[test]
    fn test_preset_name() {
        let mut config = Config::new();
        assert_eq!(preset_name(&config), "full");
        config.features.show_pricing_link = false;
        assert_eq!(preset_name(&config), "custom");
    }
}
