//! Branding and site identity.
//!
//! This module centralizes the site's names and fixed asset paths so that a
//! rebrand touches one file.

use crate::i18n::LocalizedText;

/// The site name as shown in the header logo and page titles.
pub const APP_DISPLAY_NAME: &str = "Komorebi";

/// The site name in both languages (logo text).
pub const SITE_NAME: LocalizedText = LocalizedText::new("Komorebi", "こもれび");

/// The logo mark shown next to the site name.
pub const LOGO_MARK: &str = "🍃";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "komorebi";

/// The directory name for application data (config).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_CONFIG_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_CONFIG_DIR}/`
/// - Windows: `%APPDATA%\{APP_CONFIG_DIR}\`
pub const APP_CONFIG_DIR: &str = "Komorebi";

/// URL prefix under which embedded static assets are served.
pub const ASSETS_PREFIX: &str = "/assets";

/// Theme color for the web manifest and mobile browser chrome.
pub const THEME_COLOR: &str = "#4d7c0f";

/// Stylesheet URL.
pub fn stylesheet_url() -> String {
    format!("{ASSETS_PREFIX}/site.css")
}

/// Client controller script URL (menu, dark mode, auth state).
pub fn script_url() -> String {
    format!("{ASSETS_PREFIX}/site.js")
}

/// Web manifest URL.
pub fn manifest_url() -> String {
    format!("{ASSETS_PREFIX}/manifest.webmanifest")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_branding_consistency() {
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_CONFIG_DIR.contains(' '));
        assert_eq!(SITE_NAME.pick(Language::En), APP_DISPLAY_NAME);
    }

    #[test]
    fn test_asset_urls() {
        assert_eq!(stylesheet_url(), "/assets/site.css");
        assert_eq!(script_url(), "/assets/site.js");
        assert!(manifest_url().starts_with(ASSETS_PREFIX));
    }
}
