//! Decorative hero illustration: sunlight through leaves over a stone garden.

use maud::{html, Markup};

use super::{class_list, Component, RenderContext};
use crate::content::Label;

const TITLE_ID: &str = "hero-illustration-title";

/// Static inline SVG with a localized caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Illustration;

impl Component for Illustration {
    fn render(&self, ctx: &RenderContext) -> Markup {
        let lang = ctx.lang;
        html! {
            figure class="illustration mx-auto max-w-md" {
                svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 320 200" role="img"
                    aria-labelledby=(TITLE_ID) class="h-auto w-full" {
                    title id=(TITLE_ID) { (Label::IllustrationTitle.text(lang)) }
                    defs {
                        linearGradient id="sky" x1="0" y1="0" x2="0" y2="1" {
                            stop offset="0%" stop-color="#fef9c3" {}
                            stop offset="100%" stop-color="#ecfccb" {}
                        }
                    }
                    rect width="320" height="200" rx="16" fill="url(#sky)" {}
                    // light shafts
                    g fill="#fde68a" opacity="0.45" {
                        polygon points="40,0 70,0 150,200 110,200" {}
                        polygon points="120,0 140,0 210,200 180,200" {}
                        polygon points="200,0 215,0 270,200 250,200" {}
                    }
                    // canopy
                    g fill="#65a30d" {
                        circle cx="30" cy="10" r="38" {}
                        circle cx="95" cy="-5" r="32" {}
                        circle cx="250" cy="0" r="40" {}
                        circle cx="305" cy="25" r="30" {}
                    }
                    // raked gravel
                    g stroke="#a8a29e" stroke-width="1.5" fill="none" {
                        path d="M0 150 Q80 140 160 150 T320 150" {}
                        path d="M0 162 Q80 152 160 162 T320 162" {}
                        path d="M0 174 Q80 164 160 174 T320 174" {}
                        ellipse cx="200" cy="158" rx="36" ry="12" {}
                        ellipse cx="200" cy="158" rx="48" ry="18" {}
                    }
                    // stones
                    g fill="#57534e" {
                        ellipse cx="200" cy="154" rx="22" ry="10" {}
                        ellipse cx="90" cy="160" rx="14" ry="7" {}
                    }
                }
                figcaption class=(class_list(&["mt-2 text-center text-sm text-stone-500", ctx.dark("dark:text-stone-400")])) {
                    (Label::IllustrationCaption.text(lang))
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
    fn test_caption_and_title_follow_language() {
        let en = Illustration
            .render(&RenderContext::new(Language::En, SiteFeatures::full()))
            .into_string();
        let ja = Illustration
            .render(&RenderContext::new(Language::Ja, SiteFeatures::full()))
            .into_string();

        assert!(en.contains(Label::IllustrationCaption.text(Language::En)));
        assert!(ja.contains(Label::IllustrationCaption.text(Language::Ja)));
        assert!(ja.contains("石庭に差し込む木漏れ日"));
        assert!(en.contains(r#"aria-labelledby="hero-illustration-title""#));
    }

    #[test]
    fn test_illustration_has_no_links() {
        let html = Illustration
            .render(&RenderContext::new(Language::En, SiteFeatures::full()))
            .into_string();
        assert!(html.starts_with("<figure"));
        assert!(!html.contains("href"));
    }
}
