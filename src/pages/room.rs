//! Room pages.

use maud::{html, Markup};

use super::layout::{document, PageShell};
use crate::components::{
    class_list, Component, Footer, Header, HeaderVariant, IconSize, LanguageSwitcher,
    RenderContext, WeatherPicker,
};
use crate::content::{Label, Room};

/// Renders the page of `room`.
#[must_use]
pub fn render(ctx: &RenderContext, footer: &Footer, room: Room) -> Markup {
    let lang = ctx.lang;
    let content = room.content();
    let switcher = LanguageSwitcher::new(format!("/{}", room.as_str()));
    let header = Header::new(HeaderVariant::Default)
        .with_room(room)
        .with_switcher(switcher.clone());

    let body = html! {
        article class=(class_list(&["room mx-auto max-w-3xl rounded-3xl bg-gradient-to-br p-8 my-12", content.gradient, ctx.dark("dark:from-stone-800 dark:to-stone-900")]))
            data-room=(room.as_str()) {
            div class="text-6xl" aria-hidden="true" { (content.icon) }
            h1 class="mt-4 text-3xl font-bold" { (content.title.pick(lang)) }
            p class="room-subtitle text-stone-500" { (content.subtitle.pick(lang)) }
            p class="mt-6 text-lg" { (content.description.pick(lang)) }
            h2 class="mt-8 text-sm font-semibold uppercase tracking-wide" { (Label::RoomTagsHeading.text(lang)) }
            ul class="mt-2 flex flex-wrap gap-2" {
                @for tag in content.tags.pick(lang) {
                    li class=(class_list(&["room-tag rounded-full px-3 py-1 text-sm", content.accent])) { (tag) }
                }
            }
        }
        div class="mx-auto max-w-3xl px-4" {
            (WeatherPicker::new(None).size(IconSize::Sm).render(ctx))
        }
    };

    let shell = PageShell {
        title: Some(content.title.pick(lang)),
        header: &header,
        switcher: &switcher,
        footer,
    };
    document(ctx, &shell, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteFeatures;
    use crate::i18n::Language;

    #[test]
    fn test_room_page_in_japanese() {
        let ctx = RenderContext::new(Language::Ja, SiteFeatures::full());
        let html = render(&ctx, &Footer::new(2025, "Komorebi"), Room::Garden).into_string();

        assert!(html.contains(r#"<html lang="ja""#));
        assert!(html.contains("room-indicator"));
        assert!(html.contains("庭 ― 森田療法"));
        assert!(html.contains(">あるがまま</li>"));
        assert!(html.contains(r#"href="/garden?lang=en""#));
        assert!(html.contains(r#"data-variant="default""#));
    }

    #[test]
    fn test_each_room_has_own_title() {
        let ctx = RenderContext::new(Language::En, SiteFeatures::baseline());
        for &room in Room::all() {
            let html = render(&ctx, &Footer::new(2025, "Komorebi"), room).into_string();
            let title = format!("<title>{} | Komorebi</title>", room.content().title.pick(Language::En));
            assert!(html.contains(&title), "{room}");
        }
    }
}
