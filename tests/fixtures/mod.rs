//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::path::{Path, PathBuf};

use komorebi::config::{Config, FeaturePreset};
use komorebi::i18n::Localized;
use tempfile::TempDir;

/// Configuration with deterministic footer content.
pub fn test_config(preset: FeaturePreset) -> Config {
    let mut config = Config::new();
    config.apply_preset(preset);
    config.content.copyright_holder = "Komorebi Test".to_string();
    config.content.copyright_year = Some(2025);
    config.content.tagline = Localized::new(
        "Test tagline".to_string(),
        "テストのタグライン".to_string(),
    );
    config
}

/// Writes `config` into `dir` and returns the file path.
pub fn write_config(dir: &Path, config: &Config) -> PathBuf {
    let path = dir.join("config.toml");
    config.save_to(&path).expect("Failed to write config");
    path
}

/// Temp dir holding a saved test config.
pub fn temp_config(preset: FeaturePreset) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(dir.path(), &test_config(preset));
    (dir, path)
}

/// Every `href` attribute value in `html`, in document order.
pub fn hrefs(html: &str) -> Vec<String> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|chunk| chunk.split('"').next())
        .map(|href| href.replace("&amp;", "&"))
        .collect()
}
