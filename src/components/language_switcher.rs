//! EN / 日本語 switcher.

use maud::{html, Markup};

use super::{class_list, Component, RenderContext};
use crate::content::{Label, Mood};
use crate::i18n::Language;
use crate::links::{build_href, WEATHER_PARAM};

/// Links to the current page in each language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSwitcher {
    path: String,
    weather: Option<Mood>,
}

impl LanguageSwitcher {
    /// Switcher pointing at `path` (without query string).
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            weather: None,
        }
    }

    /// Keeps the selected mood when switching language.
    #[must_use]
    pub fn keep_weather(mut self, mood: Mood) -> Self {
        self.weather = Some(mood);
        self
    }

    /// Href of the current page in `lang`.
    #[must_use]
    pub fn href_for(&self, lang: Language) -> String {
        match self.weather {
            Some(mood) => build_href(&self.path, lang, &[(WEATHER_PARAM, mood.as_str())]),
            None => build_href(&self.path, lang, &[]),
        }
    }
}

impl Default for LanguageSwitcher {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Component for LanguageSwitcher {
    fn render(&self, ctx: &RenderContext) -> Markup {
        html! {
            nav class="language-switcher flex items-center gap-1 text-sm"
                aria-label=(Label::LanguageSwitcher.text(ctx.lang)) {
                @for &lang in Language::all() {
                    @if lang == ctx.lang {
                        a href=(self.href_for(lang)) hreflang=(lang.code()) lang=(lang.code())
                            aria-current="true"
                            class=(class_list(&["rounded px-2 py-1 font-semibold bg-stone-900 text-white", ctx.dark("dark:bg-stone-100 dark:text-stone-900")])) {
                            (lang.native_name())
                        }
                    } @else {
                        a href=(self.href_for(lang)) hreflang=(lang.code()) lang=(lang.code())
                            class=(class_list(&["rounded px-2 py-1 text-stone-600 hover:text-stone-900", ctx.dark("dark:text-stone-300 dark:hover:text-white")])) {
                            (lang.native_name())
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteFeatures;

    #[test]
    fn test_links_to_both_languages() {
        let ctx = RenderContext::new(Language::En, SiteFeatures::full());
        let html = LanguageSwitcher::new("/garden").render(&ctx).into_string();

        assert!(html.contains(r#"href="/garden?lang=en""#));
        assert!(html.contains(r#"href="/garden?lang=ja""#));
        assert!(html.contains("日本語"));
        assert_eq!(html.matches("aria-current").count(), 1);
    }

    #[test]
    fn test_keeps_weather() {
        let switcher = LanguageSwitcher::new("/check-in").keep_weather(Mood::Rainy);
        assert_eq!(
            switcher.href_for(Language::Ja),
            "/check-in?weather=rainy&lang=ja"
        );
    }

    #[test]
    fn test_every_href_has_one_lang() {
        for &mood in Mood::all() {
            let switcher = LanguageSwitcher::new("/check-in").keep_weather(mood);
            for &lang in Language::all() {
                let href = switcher.href_for(lang);
                assert_eq!(href.matches("lang=").count(), 1, "{href}");
                assert_eq!(href.matches('&').count(), 1, "{href}");
                assert!(href.ends_with(&format!("lang={}", lang.code())), "{href}");
            }
        }
    }

    #[test]
    fn test_marks_active_language() {
        let ctx = RenderContext::new(Language::Ja, SiteFeatures::baseline());
        let html = LanguageSwitcher::default().render(&ctx).into_string();
        let current = html.find("aria-current").unwrap();
        let ja_link = html.find(r#"href="/?lang=ja""#).unwrap();
        let en_link = html.find(r#"href="/?lang=en""#).unwrap();
        // the active marker belongs to the second (ja) anchor
        assert!(current > en_link && ja_link < current);
        assert!(!html.contains("dark:"));
    }
}
