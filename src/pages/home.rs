//! Landing page.

use maud::{html, Markup};

use super::layout::{document, PageShell};
use crate::components::{
    class_list, Component, Footer, Header, HeaderVariant, IconSize, Illustration,
    LanguageSwitcher, RenderContext, RoomCardList, WeatherPicker,
};
use crate::content::Label;

/// Renders the landing page: hero with illustration and picker, the about
/// and philosophy sections, then the rooms.
#[must_use]
pub fn render(ctx: &RenderContext, footer: &Footer) -> Markup {
    let lang = ctx.lang;
    let switcher = LanguageSwitcher::new("/");
    let header = Header::new(HeaderVariant::Transparent).with_switcher(switcher.clone());
    let section_class = class_list(&[
        "mx-auto max-w-3xl px-4 py-12",
        ctx.dark("dark:text-stone-200"),
    ]);

    let content = html! {
        section #hero class="bg-gradient-to-b from-lime-50 to-stone-50 pt-24 pb-12" {
            div class="mx-auto flex max-w-4xl flex-col items-center gap-8 px-4 text-center" {
                h1 class="text-3xl font-bold md:text-5xl" { (Label::HeroTitle.text(lang)) }
                p class="max-w-2xl text-lg text-stone-600" { (Label::HeroLead.text(lang)) }
                (Illustration.render(ctx))
                (WeatherPicker::new(None).size(IconSize::Lg).render(ctx))
            }
        }
        section #about class=(section_class) {
            h2 class="mb-4 text-2xl font-semibold" { (Label::AboutHeading.text(lang)) }
            p { (Label::AboutBody.text(lang)) }
        }
        section #philosophy class=(section_class) {
            h2 class="mb-4 text-2xl font-semibold" { (Label::PhilosophyHeading.text(lang)) }
            p { (Label::PhilosophyBody.text(lang)) }
        }
        (RoomCardList.render(ctx))
    };

    let shell = PageShell {
        title: None,
        header: &header,
        switcher: &switcher,
        footer,
    };
    document(ctx, &shell, &content)
}
