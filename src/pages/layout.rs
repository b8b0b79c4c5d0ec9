//! Document shell shared by every page.

use maud::{html, Markup, DOCTYPE};

use crate::branding::{manifest_url, script_url, stylesheet_url, SITE_NAME, THEME_COLOR};
use crate::components::{class_list, Component, Footer, Header, LanguageSwitcher, RenderContext};
use crate::i18n::Language;

/// Pieces of one page handed to [`document`].
pub struct PageShell<'a> {
    /// Page-specific part of `<title>`; `None` uses the site name alone
    pub title: Option<&'a str>,
    /// Header to render above `main`
    pub header: &'a Header,
    /// Links to this page in other languages (`<link rel="alternate">`)
    pub switcher: &'a LanguageSwitcher,
    /// Footer to render below `main`
    pub footer: &'a Footer,
}

/// Full `<title>` text for a page.
#[must_use]
pub fn page_title(title: Option<&str>, lang: Language) -> String {
    let site = SITE_NAME.pick(lang);
    match title {
        Some(title) if !title.is_empty() => format!("{title} | {site}"),
        _ => site.to_string(),
    }
}

/// Wraps `content` in the HTML document with head, header and footer.
#[must_use]
pub fn document(ctx: &RenderContext, shell: &PageShell<'_>, content: &Markup) -> Markup {
    let lang = ctx.lang;
    html! {
        (DOCTYPE)
        html lang=(lang.code()) data-dark-mode=(if ctx.features.dark_mode_enabled { "true" } else { "false" }) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title(shell.title, lang)) }
                meta name="theme-color" content=(THEME_COLOR);
                link rel="manifest" href=(manifest_url());
                link rel="stylesheet" href=(stylesheet_url());
                @for &alt in Language::all() {
                    @if alt != lang {
                        link rel="alternate" hreflang=(alt.code()) href=(shell.switcher.href_for(alt));
                    }
                }
                script src=(script_url()) defer {}
            }
            body class=(class_list(&["min-h-screen bg-stone-50 text-stone-900 antialiased", ctx.dark("dark:bg-stone-950 dark:text-stone-100")])) {
                (shell.header.render(ctx))
                main #main {
                    (content)
                }
                (shell.footer.render(ctx))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::HeaderVariant;
    use crate::config::SiteFeatures;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title(None, Language::En), "Komorebi");
        assert_eq!(page_title(Some("Pricing"), Language::En), "Pricing | Komorebi");
        assert_eq!(page_title(Some("料金"), Language::Ja), "料金 | こもれび");
        assert_eq!(page_title(Some(""), Language::Ja), "こもれび");
    }

    #[test]
    fn test_document_shell() {
        let ctx = RenderContext::new(Language::Ja, SiteFeatures::baseline());
        let switcher = LanguageSwitcher::new("/pricing");
        let header = Header::new(HeaderVariant::Default).with_switcher(switcher.clone());
        let footer = Footer::new(2025, "Komorebi");
        let shell = PageShell {
            title: Some("料金"),
            header: &header,
            switcher: &switcher,
            footer: &footer,
        };

        let html = document(&ctx, &shell, &html! { p { "本文" } }).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="ja" data-dark-mode="false">"#));
        assert!(html.contains("<title>料金 | こもれび</title>"));
        assert!(html.contains(r#"href="/assets/site.css""#));
        assert!(html.contains(r#"src="/assets/site.js""#));
        assert!(html.contains(r#"<link rel="alternate" hreflang="en" href="/pricing?lang=en">"#));
        assert!(!html.contains(r#"<link rel="alternate" hreflang="ja""#));
        assert!(html.contains(r#"<main id="main"><p>本文</p></main>"#));
        let header_at = html.find("site-header").unwrap();
        let main_at = html.find("<main").unwrap();
        let footer_at = html.find("site-footer").unwrap();
        assert!(header_at < main_at && main_at < footer_at);
    }
}
