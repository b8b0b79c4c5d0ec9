//! Single-message pages: install, pricing, profile, not found.

use maud::{html, Markup};

use super::layout::{document, PageShell};
use crate::components::{
    class_list, Footer, Header, HeaderVariant, LanguageSwitcher, RenderContext,
};
use crate::content::Label;
use crate::links::Route;

fn render_simple(
    ctx: &RenderContext,
    footer: &Footer,
    path: &str,
    heading: Label,
    body: Label,
) -> Markup {
    let lang = ctx.lang;
    let switcher = LanguageSwitcher::new(path);
    let header = Header::new(HeaderVariant::Default).with_switcher(switcher.clone());
    let content = html! {
        section class="mx-auto max-w-3xl px-4 py-16" {
            h1 class="mb-4 text-3xl font-bold" { (heading.text(lang)) }
            p class=(class_list(&["text-lg text-stone-700", ctx.dark("dark:text-stone-300")])) { (body.text(lang)) }
            p class="mt-8" {
                a href=(Route::Home.href(lang)) class="text-lime-700 underline" { (Label::BackHome.text(lang)) }
            }
        }
    };
    let shell = PageShell {
        title: Some(heading.text(lang)),
        header: &header,
        switcher: &switcher,
        footer,
    };
    document(ctx, &shell, &content)
}

/// "Add to Home Screen" instructions.
#[must_use]
pub fn render_install(ctx: &RenderContext, footer: &Footer) -> Markup {
    render_simple(ctx, footer, "/install", Label::InstallHeading, Label::InstallBody)
}

/// Plans and pricing.
#[must_use]
pub fn render_pricing(ctx: &RenderContext, footer: &Footer) -> Markup {
    render_simple(ctx, footer, "/pricing", Label::PricingHeading, Label::PricingBody)
}

/// Profile placeholder; account data is filled in client-side.
#[must_use]
pub fn render_profile(ctx: &RenderContext, footer: &Footer) -> Markup {
    render_simple(ctx, footer, "/profile", Label::ProfileHeading, Label::ProfileBody)
}

/// Page for unknown paths.
#[must_use]
pub fn render_not_found(ctx: &RenderContext, footer: &Footer) -> Markup {
    render_simple(ctx, footer, "/", Label::NotFoundHeading, Label::NotFoundBody)
}
