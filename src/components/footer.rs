//! Site footer.

use maud::{html, Markup};

use super::{class_list, Component, RenderContext};
use crate::content::Label;
use crate::i18n::Localized;
use crate::links::Route;

/// Closing content: tagline, optional install and pricing links, copyright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    year: i32,
    holder: String,
    tagline: Option<Localized<String>>,
}

impl Footer {
    /// Footer with a copyright line for `year` and `holder`.
    pub fn new(year: i32, holder: impl Into<String>) -> Self {
        Self {
            year,
            holder: holder.into(),
            tagline: None,
        }
    }

    /// Adds a tagline above the links.
    #[must_use]
    pub fn with_tagline(mut self, tagline: Localized<String>) -> Self {
        self.tagline = Some(tagline);
        self
    }

    /// The localized copyright line.
    #[must_use]
    pub fn copyright_line(&self, ctx: &RenderContext) -> String {
        format!(
            "© {} {}. {}",
            self.year,
            self.holder,
            Label::AllRightsReserved.text(ctx.lang)
        )
    }
}

impl Component for Footer {
    fn render(&self, ctx: &RenderContext) -> Markup {
        let lang = ctx.lang;
        let features = ctx.features;
        let has_links = features.show_install_link || features.show_pricing_link;
        let link_class = class_list(&[
            "hover:text-lime-700",
            ctx.dark("dark:hover:text-lime-300"),
        ]);

        html! {
            footer #site-footer
                class=(class_list(&["mt-16 border-t border-stone-200 bg-stone-50 text-stone-600", ctx.dark("dark:border-stone-700 dark:bg-stone-950 dark:text-stone-400")])) {
                div class="mx-auto flex max-w-6xl flex-col gap-4 px-4 py-8 text-sm" {
                    @if let Some(tagline) = &self.tagline {
                        p class="tagline" { (tagline.text(lang)) }
                    }
                    @if has_links {
                        nav class="flex flex-wrap gap-4" {
                            @if features.show_install_link {
                                a href=(Route::Install.href(lang)) class=(link_class) data-install="true" {
                                    span aria-hidden="true" { "📲 " }
                                    (Label::AddToHomeScreen.text(lang))
                                }
                            }
                            @if features.show_pricing_link {
                                a href=(Route::Pricing.href(lang)) class=(link_class) {
                                    (Label::NavPricing.text(lang))
                                }
                            }
                        }
                    }
                    p class="copyright" { (self.copyright_line(ctx)) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteFeatures;
    use crate::i18n::Language;

    #[test]
    fn test_copyright_line_localized() {
        let footer = Footer::new(2025, "Komorebi");
        let en = RenderContext::new(Language::En, SiteFeatures::full());
        let ja = RenderContext::new(Language::Ja, SiteFeatures::full());

        assert_eq!(footer.copyright_line(&en), "© 2025 Komorebi. All rights reserved.");
        assert_eq!(footer.copyright_line(&ja), "© 2025 Komorebi. 無断転載を禁じます。");
    }

    #[test]
    fn test_full_footer_has_install_and_pricing() {
        let ctx = RenderContext::new(Language::Ja, SiteFeatures::full());
        let html = Footer::new(2025, "Komorebi").render(&ctx).into_string();

        assert!(html.contains(r#"href="/install?lang=ja""#));
        assert!(html.contains("ホーム画面に追加"));
        assert!(html.contains(r#"href="/pricing?lang=ja""#));
    }

    #[test]
    fn test_baseline_footer_is_minimal() {
        let ctx = RenderContext::new(Language::En, SiteFeatures::baseline());
        let html = Footer::new(2025, "Komorebi").render(&ctx).into_string();

        assert!(!html.contains("/install"));
        assert!(!html.contains("/pricing"));
        assert!(!html.contains("<nav"));
        assert!(!html.contains("dark:"));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn test_tagline_follows_language() {
        let tagline = Localized::new("Be here".to_string(), "いまここ".to_string());
        let footer = Footer::new(2025, "Komorebi").with_tagline(tagline);
        let ctx = RenderContext::new(Language::Ja, SiteFeatures::baseline());
        let html = footer.render(&ctx).into_string();

        assert!(html.contains("いまここ"));
        assert!(!html.contains("Be here"));
    }
}
