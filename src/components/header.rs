//! Site header.
//!
//! One parameterized header replaces the per-page copies. The variant picks
//! the layout; [`SiteFeatures`](crate::config::SiteFeatures) picks the
//! optional affordances.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use maud::{html, Markup};

use super::{class_list, dom, Component, LanguageSwitcher, RenderContext};
use crate::branding::{LOGO_MARK, SITE_NAME};
use crate::content::{Label, Room};
use crate::links::Route;

/// Rendering mode of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderVariant {
    /// Full navigation, switcher, and mobile menu
    #[default]
    Default,
    /// Like `Default`, sticky, with a "Begin" call-to-action
    Fixed,
    /// Logo and language switcher only, over hero imagery
    Transparent,
}

impl HeaderVariant {
    /// Returns all variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Fixed, Self::Transparent]
    }

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Fixed => "fixed",
            Self::Transparent => "transparent",
        }
    }

    /// Whether navigation links, menu button and panel are rendered.
    #[must_use]
    pub const fn shows_navigation(self) -> bool {
        !matches!(self, Self::Transparent)
    }

    /// Whether the "Begin" call-to-action is rendered.
    #[must_use]
    pub const fn shows_call_to_action(self) -> bool {
        matches!(self, Self::Fixed)
    }

    const fn layout_classes(self) -> &'static str {
        match self {
            Self::Default => "relative border-b border-stone-200 bg-white/90",
            Self::Fixed => "sticky top-0 z-40 border-b border-stone-200 bg-white/80 backdrop-blur",
            Self::Transparent => "absolute inset-x-0 top-0 z-40 bg-transparent",
        }
    }

    const fn dark_classes(self) -> &'static str {
        match self {
            Self::Default => "dark:border-stone-700 dark:bg-stone-900/90",
            Self::Fixed => "dark:border-stone-700 dark:bg-stone-900/80",
            Self::Transparent => "",
        }
    }
}

impl fmt::Display for HeaderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(Self::Default),
            "fixed" => Ok(Self::Fixed),
            "transparent" => Ok(Self::Transparent),
            other => bail!("Unknown header variant '{other}' (expected default, fixed, or transparent)"),
        }
    }
}

/// Room name and icon shown next to the logo.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RoomIndicator {
    Room(Room),
    Custom { name: String, icon: String },
}

/// The site banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    variant: HeaderVariant,
    room: Option<RoomIndicator>,
    switcher: LanguageSwitcher,
}

impl Header {
    /// Header in `variant` for the landing page path.
    #[must_use]
    pub fn new(variant: HeaderVariant) -> Self {
        Self {
            variant,
            room: None,
            switcher: LanguageSwitcher::default(),
        }
    }

    /// Uses `switcher` for the language links (current page path).
    #[must_use]
    pub fn with_switcher(mut self, switcher: LanguageSwitcher) -> Self {
        self.switcher = switcher;
        self
    }

    /// Shows the localized name and icon of `room`.
    #[must_use]
    pub fn with_room(mut self, room: Room) -> Self {
        self.room = Some(RoomIndicator::Room(room));
        self
    }

    /// Shows a custom room label. Both parts are required; when either is
    /// missing the indicator is omitted entirely.
    #[must_use]
    pub fn with_room_label(mut self, name: Option<&str>, icon: Option<&str>) -> Self {
        self.room = match (name, icon) {
            (Some(name), Some(icon)) => Some(RoomIndicator::Custom {
                name: name.to_string(),
                icon: icon.to_string(),
            }),
            _ => None,
        };
        self
    }

    fn nav_links(ctx: &RenderContext) -> Vec<(&'static str, String)> {
        let lang = ctx.lang;
        let mut links = vec![
            (Label::NavAbout.text(lang), Route::About.href(lang)),
            (Label::NavPhilosophy.text(lang), Route::Philosophy.href(lang)),
        ];
        if ctx.features.show_pricing_link {
            links.push((Label::NavPricing.text(lang), Route::Pricing.href(lang)));
        }
        links
    }

    fn render_room_indicator(&self, ctx: &RenderContext) -> Markup {
        let (icon, name) = match &self.room {
            Some(RoomIndicator::Room(room)) => {
                let content = room.content();
                (content.icon, content.title.pick(ctx.lang))
            }
            Some(RoomIndicator::Custom { name, icon }) => (icon.as_str(), name.as_str()),
            None => return html! {},
        };
        html! {
            span class=(class_list(&["room-indicator flex items-center gap-1 rounded-full bg-stone-100 px-3 py-1 text-sm", ctx.dark("dark:bg-stone-800")])) {
                span aria-hidden="true" { (icon) }
                span { (name) }
            }
        }
    }
}

impl Component for Header {
    fn render(&self, ctx: &RenderContext) -> Markup {
        let lang = ctx.lang;
        let features = ctx.features;
        let show_nav = self.variant.shows_navigation();
        let nav_links = if show_nav { Self::nav_links(ctx) } else { Vec::new() };
        let link_class = class_list(&[
            "text-stone-700 hover:text-lime-700",
            ctx.dark("dark:text-stone-200 dark:hover:text-lime-300"),
        ]);

        html! {
            header #site-header
                class=(class_list(&[self.variant.layout_classes(), ctx.dark(self.variant.dark_classes())]))
                data-variant=(self.variant.as_str()) {
                div class="mx-auto flex max-w-6xl items-center justify-between gap-4 px-4 py-3" {
                    div class="flex items-center gap-3" {
                        a href=(Route::Home.href(lang)) class="logo flex items-center gap-2 text-lg font-semibold" {
                            span aria-hidden="true" { (LOGO_MARK) }
                            span { (SITE_NAME.pick(lang)) }
                        }
                        (self.render_room_indicator(ctx))
                    }

                    @if show_nav {
                        nav class="hidden items-center gap-6 md:flex" aria-label=(Label::MainNavigation.text(lang)) {
                            @for (label, href) in &nav_links {
                                a href=(href) class=(link_class) { (label) }
                            }
                        }
                    }

                    div class="flex items-center gap-3" {
                        (self.switcher.render(ctx))

                        @if show_nav && features.dark_mode_enabled {
                            button id=(dom::DARK_MODE_TOGGLE) type="button"
                                class="rounded-full p-2 hover:bg-stone-100 dark:hover:bg-stone-800"
                                aria-label=(Label::DarkModeToggle.text(lang)) {
                                span aria-hidden="true" { "🌓" }
                            }
                        }

                        @if show_nav && features.show_auth_controls {
                            div id=(dom::AUTH_CONTAINER) class="hidden items-center gap-2 md:flex" {
                                a href=(Route::Profile.href(lang)) class=(link_class) { (Label::NavProfile.text(lang)) }
                                span id=(dom::USER_AVATAR) class="h-8 w-8 overflow-hidden rounded-full" hidden {}
                            }
                        }

                        @if self.variant.shows_call_to_action() {
                            a href=(Route::CheckIn(None).href(lang)) data-cta="begin"
                                class="rounded-full bg-lime-700 px-4 py-2 text-sm font-semibold text-white hover:bg-lime-800" {
                                (Label::Begin.text(lang))
                            }
                        }

                        @if show_nav {
                            button id=(dom::MENU_TOGGLE) type="button" class="rounded p-2 md:hidden"
                                aria-controls=(dom::MOBILE_MENU) aria-expanded="false"
                                aria-label=(Label::MenuToggle.text(lang)) {
                                span aria-hidden="true" { "☰" }
                            }
                        }
                    }
                }

                @if show_nav {
                    div id=(dom::MOBILE_MENU)
                        class=(class_list(&["border-t border-stone-200 bg-white px-4 py-3 md:hidden", ctx.dark("dark:border-stone-700 dark:bg-stone-900")]))
                        hidden {
                        nav class="flex flex-col gap-3" aria-label=(Label::MainNavigation.text(lang)) {
                            @for (label, href) in &nav_links {
                                a href=(href) class=(link_class) { (label) }
                            }
                            @if features.show_auth_controls {
                                a href=(Route::Profile.href(lang)) class=(link_class) { (Label::NavProfile.text(lang)) }
                            }
                        }
                    }
                }
            }
        }
    }
}
