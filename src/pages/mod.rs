//! Full pages composed from the components.
//!
//! A [`Site`] carries the per-deployment settings (feature flags and footer
//! copy) and renders any [`Page`] in any language. It holds no per-request
//! state, so one instance is shared by every request.

pub mod check_in;
pub mod home;
pub mod info;
pub mod layout;
pub mod room;

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use maud::Markup;

use crate::components::{Footer, RenderContext};
use crate::config::{Config, SiteFeatures};
use crate::content::{Mood, Room};
use crate::i18n::Language;

/// Every page the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page
    Home,
    /// Daily check-in with the mood taken from `weather=`
    CheckIn(Option<Mood>),
    /// A themed room
    Room(Room),
    /// "Add to Home Screen" instructions
    Install,
    /// Plans and pricing
    Pricing,
    /// Signed-in user's page
    Profile,
    /// Unknown path
    NotFound,
}

impl Page {
    /// Path of the page without query string.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Home | Self::NotFound => "/".to_string(),
            Self::CheckIn(_) => "/check-in".to_string(),
            Self::Room(room) => format!("/{}", room.as_str()),
            Self::Install => "/install".to_string(),
            Self::Pricing => "/pricing".to_string(),
            Self::Profile => "/profile".to_string(),
        }
    }

    /// Names accepted by [`FromStr`], for help text.
    #[must_use]
    pub const fn names() -> &'static [&'static str] {
        &[
            "home", "check-in", "garden", "study", "tatami", "install", "pricing", "profile",
            "not-found",
        ]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::CheckIn(_) => f.write_str("check-in"),
            Self::Room(room) => f.write_str(room.as_str()),
            Self::Install => f.write_str("install"),
            Self::Pricing => f.write_str("pricing"),
            Self::Profile => f.write_str("profile"),
            Self::NotFound => f.write_str("not-found"),
        }
    }
}

impl FromStr for Page {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches('/');
        match name {
            "" | "home" => Ok(Self::Home),
            "check-in" => Ok(Self::CheckIn(None)),
            "install" => Ok(Self::Install),
            "pricing" => Ok(Self::Pricing),
            "profile" => Ok(Self::Profile),
            "not-found" => Ok(Self::NotFound),
            other => match other.parse::<Room>() {
                Ok(room) => Ok(Self::Room(room)),
                Err(_) => bail!(
                    "Unknown page '{other}' (expected one of: {})",
                    Self::names().join(", ")
                ),
            },
        }
    }
}

/// Renders pages for one deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    features: SiteFeatures,
    footer: Footer,
}

impl Site {
    /// Site with the given feature flags and footer.
    #[must_use]
    pub const fn new(features: SiteFeatures, footer: Footer) -> Self {
        Self { features, footer }
    }

    /// Site configured from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let footer = Footer::new(
            config.content.effective_year(),
            config.content.copyright_holder.clone(),
        )
        .with_tagline(config.content.tagline.clone());
        Self::new(config.features, footer)
    }

    /// Render context for `lang`.
    #[must_use]
    pub const fn context(&self, lang: Language) -> RenderContext {
        RenderContext::new(lang, self.features)
    }

    /// Renders `page` as a complete HTML document in `lang`.
    #[must_use]
    pub fn render(&self, page: Page, lang: Language) -> Markup {
        let ctx = self.context(lang);
        match page {
            Page::Home => home::render(&ctx, &self.footer),
            Page::CheckIn(selected) => check_in::render(&ctx, &self.footer, selected),
            Page::Room(room) => room::render(&ctx, &self.footer, room),
            Page::Install => info::render_install(&ctx, &self.footer),
            Page::Pricing => info::render_pricing(&ctx, &self.footer),
            Page::Profile => info::render_profile(&ctx, &self.footer),
            Page::NotFound => info::render_not_found(&ctx, &self.footer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_str() {
        assert_eq!("home".parse::<Page>().unwrap(), Page::Home);
        assert_eq!("/".parse::<Page>().unwrap(), Page::Home);
        assert_eq!("/check-in".parse::<Page>().unwrap(), Page::CheckIn(None));
        assert_eq!("tatami".parse::<Page>().unwrap(), Page::Room(Room::Tatami));
        assert_eq!("pricing".parse::<Page>().unwrap(), Page::Pricing);
        assert!("kitchen".parse::<Page>().is_err());
    }

    #[test]
    fn test_page_names_parse() {
        for name in Page::names() {
            let page = name.parse::<Page>().unwrap();
            assert_eq!(page.to_string(), *name);
        }
    }

    #[test]
    fn test_page_paths() {
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::CheckIn(Some(Mood::Sunny)).path(), "/check-in");
        assert_eq!(Page::Room(Room::Study).path(), "/study");
    }

    #[test]
    fn test_site_from_config_uses_content() {
        let mut config = Config::new();
        config.content.copyright_holder = "Forest Bath Ltd".to_string();
        config.content.copyright_year = Some(2023);

        let site = Site::from_config(&config);
        let html = site.render(Page::Install, Language::En).into_string();
        assert!(html.contains("© 2023 Forest Bath Ltd."));
        assert!(html.contains(config.content.tagline.text(Language::En)));
    }
}
