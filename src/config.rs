//! Configuration management for the site.
//!
//! This module handles loading, validating, and saving site configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{bail, Context, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::branding::{APP_CONFIG_DIR, APP_DISPLAY_NAME};
use crate::i18n::{Language, Localized};

/// Named feature bundles for the header and footer.
///
/// `Baseline` is the minimal theme (no dark mode, pricing, auth, or install
/// affordances); `Full` turns everything on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeaturePreset {
    /// Minimal chrome
    Baseline,
    /// Every optional affordance enabled
    #[default]
    Full,
}

impl FeaturePreset {
    /// Returns all presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Baseline, Self::Full]
    }

    /// Lowercase identifier used on the command line and in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Full => "full",
        }
    }

    /// Feature flags of this preset.
    #[must_use]
    pub const fn features(self) -> SiteFeatures {
        match self {
            Self::Baseline => SiteFeatures {
                dark_mode_enabled: false,
                show_pricing_link: false,
                show_auth_controls: false,
                show_install_link: false,
            },
            Self::Full => SiteFeatures {
                dark_mode_enabled: true,
                show_pricing_link: true,
                show_auth_controls: true,
                show_install_link: true,
            },
        }
    }
}

impl fmt::Display for FeaturePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeaturePreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "baseline" => Ok(Self::Baseline),
            "full" => Ok(Self::Full),
            other => bail!("Unknown preset '{other}' (expected 'baseline' or 'full')"),
        }
    }
}

/// Optional affordances of the header and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct SiteFeatures {
    /// Emit `dark:` style classes and the dark-mode toggle
    pub dark_mode_enabled: bool,
    /// Show the pricing link in header and footer
    pub show_pricing_link: bool,
    /// Show the auth container and user avatar slot in the header
    pub show_auth_controls: bool,
    /// Show the "Add to Home Screen" link in the footer
    pub show_install_link: bool,
}

impl SiteFeatures {
    /// Minimal preset.
    #[must_use]
    pub const fn baseline() -> Self {
        FeaturePreset::Baseline.features()
    }

    /// Everything-on preset.
    #[must_use]
    pub const fn full() -> Self {
        FeaturePreset::Full.features()
    }
}

impl Default for SiteFeatures {
    fn default() -> Self {
        FeaturePreset::default().features()
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Site-wide copy that operators may change without a rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Name shown in the copyright line
    pub copyright_holder: String,
    /// Fixed copyright year (current year when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright_year: Option<i32>,
    /// Footer tagline; both languages are required
    pub tagline: Localized<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            copyright_holder: APP_DISPLAY_NAME.to_string(),
            copyright_year: None,
            tagline: Localized::new(
                "Small practices for the inner weather.".to_string(),
                "心のお天気のための、小さな習慣。".to_string(),
            ),
        }
    }
}

impl ContentConfig {
    /// Year printed in the copyright line.
    #[must_use]
    pub fn effective_year(&self) -> i32 {
        self.copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Komorebi/config.toml`
/// - macOS: `~/Library/Application Support/Komorebi/config.toml`
/// - Windows: `%APPDATA%\Komorebi\config.toml`
///
/// # Validation
///
/// - `server.host` must be non-empty and `server.port` non-zero
/// - `content.copyright_holder` must be non-empty
/// - `content.tagline` must be non-empty in every language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,
    /// Header/footer affordances
    #[serde(default)]
    pub features: SiteFeatures,
    /// Operator-editable copy
    #[serde(default)]
    pub content: ContentConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using an atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            bail!("Server host cannot be empty");
        }

        if self.server.port == 0 {
            bail!("Server port must be between 1 and 65535");
        }

        if self.content.copyright_holder.trim().is_empty() {
            bail!("Copyright holder cannot be empty");
        }

        for &lang in Language::all() {
            if self.content.tagline.text(lang).trim().is_empty() {
                bail!("Tagline is empty for language '{lang}'");
            }
        }

        Ok(())
    }

    /// Replaces the feature flags with those of `preset`.
    pub fn apply_preset(&mut self, preset: FeaturePreset) {
        self.features = preset.features();
    }

    /// Returns the preset matching the current flags, if any.
    #[must_use]
    pub fn preset(&self) -> Option<FeaturePreset> {
        FeaturePreset::all()
            .iter()
            .copied()
            .find(|p| p.features() == self.features)
    }
}
