//! Weather mood icons and the check-in picker.
//!
//! Selection is visual only. The page that receives `weather=<mood>` owns the
//! actual choice and passes it back in as `selected` on the next render.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use maud::{html, Markup};

use super::{class_list, Component, RenderContext};
use crate::content::{Label, Mood};
use crate::links::Route;

/// Size token of a weather icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    /// Compact, for inline use
    Sm,
    /// Regular picker size
    #[default]
    Md,
    /// Hero size
    Lg,
}

impl IconSize {
    /// Lowercase token (`sm`, `md`, `lg`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    const fn bubble_classes(self) -> &'static str {
        match self {
            Self::Sm => "h-10 w-10 text-xl",
            Self::Md => "h-14 w-14 text-2xl",
            Self::Lg => "h-20 w-20 text-4xl",
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            other => bail!("Unknown icon size '{other}' (expected sm, md, or lg)"),
        }
    }
}

const SELECTED_RING: &str = "ring-4 ring-lime-500 ring-offset-2 scale-110";
const UNSELECTED: &str = "opacity-80 hover:opacity-100";

/// A single mood link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherIcon {
    /// Mood this icon selects
    pub mood: Mood,
    /// Whether to draw the selection highlight
    pub selected: bool,
    /// Size token
    pub size: IconSize,
}

impl WeatherIcon {
    /// Unselected, medium-sized icon for `mood`.
    #[must_use]
    pub const fn new(mood: Mood) -> Self {
        Self {
            mood,
            selected: false,
            size: IconSize::Md,
        }
    }

    /// Sets the selection highlight.
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Sets the size token.
    #[must_use]
    pub const fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }
}

impl Component for WeatherIcon {
    fn render(&self, ctx: &RenderContext) -> Markup {
        let content = self.mood.content();
        let title = content.title.pick(ctx.lang);
        let bubble = class_list(&[
            "flex items-center justify-center rounded-full transition",
            self.size.bubble_classes(),
            content.tint,
            ctx.dark("dark:bg-stone-800"),
            if self.selected { SELECTED_RING } else { UNSELECTED },
        ]);

        html! {
            a href=(Route::CheckIn(Some(self.mood)).href(ctx.lang))
                class="weather-icon flex flex-col items-center gap-1"
                title=(title)
                aria-pressed=(if self.selected { "true" } else { "false" })
                data-weather=(self.mood.as_str())
                data-size=(self.size.as_str()) {
                span class=(bubble) aria-hidden="true" { (content.emoji) }
                span class=(class_list(&["text-xs text-stone-600", ctx.dark("dark:text-stone-300")])) { (title) }
            }
        }
    }
}

/// The four mood icons with a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeatherPicker {
    /// Mood currently chosen by the visitor, if any
    pub selected: Option<Mood>,
    /// Size token applied to every icon
    pub size: IconSize,
}

impl WeatherPicker {
    /// Picker highlighting `selected`.
    #[must_use]
    pub const fn new(selected: Option<Mood>) -> Self {
        Self {
            selected,
            size: IconSize::Md,
        }
    }

    /// Sets the size token of every icon.
    #[must_use]
    pub const fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }
}

impl Component for WeatherPicker {
    fn render(&self, ctx: &RenderContext) -> Markup {
        html! {
            section class="weather-picker flex flex-col items-center gap-4" {
                p class="text-lg font-medium" { (Label::WeatherPrompt.text(ctx.lang)) }
                ul class="flex flex-wrap justify-center gap-6" {
                    @for &mood in Mood::all() {
                        li {
                            (WeatherIcon::new(mood)
                                .selected(self.selected == Some(mood))
                                .size(self.size)
                                .render(ctx))
                        }
                    }
                }
                @if self.selected.is_some() {
                    p class="text-sm text-stone-500" role="status" { (Label::WeatherChosen.text(ctx.lang)) }
                }
            }
        }
    }
}
