//! Room navigation cards.

use maud::{html, Markup};

use super::{class_list, Component, RenderContext};
use crate::content::{Label, Room};
use crate::links::Route;

/// A navigation tile for one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomCard {
    /// Room the card links to
    pub room: Room,
}

impl RoomCard {
    /// Card for `room`.
    #[must_use]
    pub const fn new(room: Room) -> Self {
        Self { room }
    }
}

impl Component for RoomCard {
    fn render(&self, ctx: &RenderContext) -> Markup {
        let lang = ctx.lang;
        let content = self.room.content();

        html! {
            a href=(Route::Room(self.room).href(lang))
                class=(class_list(&[
                    "room-card block rounded-2xl bg-gradient-to-br p-6 shadow-sm transition hover:-translate-y-1 hover:shadow-md",
                    content.gradient,
                    ctx.dark("dark:from-stone-800 dark:to-stone-900"),
                ]))
                data-room=(self.room.as_str()) {
                div class="text-4xl" aria-hidden="true" { (content.icon) }
                h3 class="mt-3 text-xl font-semibold" { (content.title.pick(lang)) }
                p class="room-subtitle text-sm text-stone-500" { (content.subtitle.pick(lang)) }
                p class=(class_list(&["mt-3 text-stone-700", ctx.dark("dark:text-stone-300")])) {
                    (content.description.pick(lang))
                }
                ul class="mt-4 flex flex-wrap gap-2" {
                    @for tag in content.tags.pick(lang) {
                        li class=(class_list(&["room-tag rounded-full px-3 py-1 text-xs", content.accent])) { (tag) }
                    }
                }
            }
        }
    }
}

/// All room cards in display order under a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomCardList;

impl Component for RoomCardList {
    fn render(&self, ctx: &RenderContext) -> Markup {
        html! {
            section #rooms class="mx-auto max-w-6xl px-4" {
                h2 class="mb-6 text-2xl font-semibold" { (Label::RoomsHeading.text(ctx.lang)) }
                div class="grid gap-6 md:grid-cols-3" {
                    @for &room in Room::all() {
                        (RoomCard::new(room).render(ctx))
                    }
                }
            }
        }
    }
}
