//! `render` command: print a composed page without running the server.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::FeaturePreset;
use crate::content::Mood;
use crate::i18n::Language;
use crate::pages::{Page, Site};

/// Render a page to stdout or a file
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Page to render (home, check-in, garden, study, tatami, install,
    /// pricing, profile, not-found)
    #[arg(value_name = "PAGE")]
    page: String,

    /// Language (en or ja)
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Mood selected on the check-in page (sunny, cloudy, rainy, stormy)
    #[arg(short, long)]
    weather: Option<String>,

    /// Feature preset overriding the configuration (baseline or full)
    #[arg(long)]
    preset: Option<String>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the page to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute render command
    pub fn execute(&self) -> CliResult<()> {
        let html = self.render()?;

        match &self.output {
            Some(path) => {
                fs::write(path, &html).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {}", path.display(), e))
                })?;
                println!("Wrote {} to {}", self.page, path.display());
            }
            None => println!("{html}"),
        }

        Ok(())
    }

    /// Resolves the arguments and renders the page.
    fn render(&self) -> CliResult<String> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(preset) = &self.preset {
            let preset: FeaturePreset = preset
                .parse()
                .map_err(|e| CliError::validation(format!("{e}")))?;
            config.apply_preset(preset);
        }

        let lang: Language = self
            .lang
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        let mut page: Page = self
            .page
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        if let Some(weather) = &self.weather {
            let mood: Mood = weather
                .parse()
                .map_err(|e| CliError::validation(format!("{e}")))?;
            match page {
                Page::CheckIn(_) => page = Page::CheckIn(Some(mood)),
                other => {
                    return Err(CliError::validation(format!(
                        "--weather only applies to the check-in page, not '{other}'"
                    )))
                }
            }
        }

        debug!("Rendering {} in {}", page, lang);
        Ok(Site::from_config(&config).render(page, lang).into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(dir: &TempDir, page: &str) -> RenderArgs {
        RenderArgs {
            page: page.to_string(),
            lang: "en".to_string(),
            weather: None,
            preset: None,
            config: Some(dir.path().join("config.toml")),
            output: None,
        }
    }

    #[test]
    fn test_render_check_in_with_weather() {
        let dir = TempDir::new().unwrap();
        let mut a = args(&dir, "check-in");
        a.lang = "ja".to_string();
        a.weather = Some("sunny".to_string());

        let html = a.render().unwrap();
        assert!(html.contains(r#"<html lang="ja""#));
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
    }

    #[test]
    fn test_render_rejects_weather_on_other_pages() {
        let dir = TempDir::new().unwrap();
        let mut a = args(&dir, "garden");
        a.weather = Some("sunny".to_string());
        assert!(a.render().is_err());
    }

    #[test]
    fn test_render_rejects_unknown_values() {
        let dir = TempDir::new().unwrap();
        assert!(args(&dir, "kitchen").render().is_err());

        let mut a = args(&dir, "home");
        a.lang = "fr".to_string();
        assert!(a.render().is_err());

        let mut a = args(&dir, "home");
        a.preset = Some("deluxe".to_string());
        assert!(a.render().is_err());
    }

    #[test]
    fn test_render_baseline_preset() {
        let dir = TempDir::new().unwrap();
        let mut a = args(&dir, "pricing");
        a.preset = Some("baseline".to_string());

        let html = a.render().unwrap();
        assert!(!html.contains("dark-mode-toggle"));
        assert!(!html.contains("auth-container"));
    }

    #[test]
    fn test_render_to_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("home.html");
        let mut a = args(&dir, "home");
        a.output = Some(out.clone());

        a.execute().unwrap();
        let html = std::fs::read_to_string(out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
