//! View components for the site.
//!
//! Each component is a plain value describing what to draw; rendering is a
//! pure function of that value and the [`RenderContext`]. Components never
//! hold page state: selection, menu and auth state belong to the caller or
//! to the client controller script, which finds elements via [`dom`] ids.

pub mod dom;
pub mod footer;
pub mod header;
pub mod illustration;
pub mod language_switcher;
pub mod room_card;
pub mod weather_icon;

use maud::Markup;

use crate::config::SiteFeatures;
use crate::i18n::Language;

pub use footer::Footer;
pub use header::{Header, HeaderVariant};
pub use illustration::Illustration;
pub use language_switcher::LanguageSwitcher;
pub use room_card::{RoomCard, RoomCardList};
pub use weather_icon::{IconSize, WeatherIcon, WeatherPicker};

/// Per-render inputs shared by every component of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Active display language
    pub lang: Language,
    /// Optional affordances enabled for this site
    pub features: SiteFeatures,
}

impl RenderContext {
    /// Creates a context for `lang` with the given feature flags.
    #[must_use]
    pub const fn new(lang: Language, features: SiteFeatures) -> Self {
        Self { lang, features }
    }

    /// Returns `classes` when dark mode styling is enabled, otherwise `""`.
    #[must_use]
    pub const fn dark(&self, classes: &'static str) -> &'static str {
        if self.features.dark_mode_enabled {
            classes
        } else {
            ""
        }
    }
}

/// A renderable piece of the page.
pub trait Component {
    /// Renders the component for the given context.
    fn render(&self, ctx: &RenderContext) -> Markup;
}

/// Joins non-empty class fragments with single spaces.
#[must_use]
pub fn class_list(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
