//! Daily check-in page.

use maud::{html, Markup};

use super::layout::{document, PageShell};
use crate::components::{
    Component, Footer, Header, HeaderVariant, LanguageSwitcher, RenderContext, RoomCardList,
    WeatherPicker,
};
use crate::content::{Label, Mood};

/// Renders the check-in page with `selected` highlighted.
///
/// Once a mood is chosen the room cards follow the picker, and the language
/// switcher keeps the choice.
#[must_use]
pub fn render(ctx: &RenderContext, footer: &Footer, selected: Option<Mood>) -> Markup {
    let lang = ctx.lang;
    let mut switcher = LanguageSwitcher::new("/check-in");
    if let Some(mood) = selected {
        switcher = switcher.keep_weather(mood);
    }
    let header = Header::new(HeaderVariant::Fixed).with_switcher(switcher.clone());

    let content = html! {
        section id="check-in" class="mx-auto flex max-w-3xl flex-col items-center gap-8 px-4 py-12 text-center" {
            h1 class="text-3xl font-bold" { (Label::CheckInHeading.text(lang)) }
            (WeatherPicker::new(selected).render(ctx))
        }
        @if selected.is_some() {
            (RoomCardList.render(ctx))
        }
    };

    let shell = PageShell {
        title: Some(Label::CheckInHeading.text(lang)),
        header: &header,
        switcher: &switcher,
        footer,
    };
    document(ctx, &shell, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteFeatures;
    use crate::i18n::Language;

    fn render_page(lang: Language, selected: Option<Mood>) -> String {
        let ctx = RenderContext::new(lang, SiteFeatures::full());
        render(&ctx, &Footer::new(2025, "Komorebi"), selected).into_string()
    }

    #[test]
    fn test_check_in_without_selection() {
        let html = render_page(Language::En, None);

        assert!(html.contains(r#"data-variant="fixed""#));
        assert!(html.contains(r#"data-cta="begin""#));
        assert!(!html.contains(r#"aria-pressed="true""#));
        assert!(!html.contains(r#"id="rooms""#));
        assert!(html.contains("<title>Daily check-in | Komorebi</title>"));
    }

    #[test]
    fn test_check_in_with_selection_keeps_weather_on_switch() {
        let html = render_page(Language::En, Some(Mood::Cloudy));

        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
        assert!(html.contains(r#"data-weather="cloudy""#));
        assert!(html.contains(r#"href="/check-in?weather=cloudy&amp;lang=ja""#));
        assert!(html.contains(r#"id="rooms""#));
    }
}
