//! The three themed rooms and their card content.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::{LocalizedList, LocalizedText};

/// A themed room of the site. The set is fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Room {
    /// Morita therapy: acting alongside feelings as they are
    Garden,
    /// Naikan: quiet reflection on what others have given
    Study,
    /// Zen practice: sitting and breathing
    Tatami,
}

/// Card content for one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomContent {
    /// Emoji shown on the card and in the header room label
    pub icon: &'static str,
    /// Background gradient classes for the card
    pub gradient: &'static str,
    /// Accent classes for the tag chips
    pub accent: &'static str,
    /// Room name
    pub title: LocalizedText,
    /// Short line under the name
    pub subtitle: LocalizedText,
    /// One or two sentences describing the room
    pub description: LocalizedText,
    /// Keyword chips, in display order
    pub tags: LocalizedList,
}

const GARDEN: RoomContent = RoomContent {
    icon: "🌿",
    gradient: "from-emerald-50 to-lime-100",
    accent: "bg-emerald-100 text-emerald-800",
    title: LocalizedText::new("The Garden", "庭"),
    subtitle: LocalizedText::new("Garden ― Morita Therapy", "庭 ― 森田療法"),
    description: LocalizedText::new(
        "Let feelings come and go like weather, and tend to what is in front of you.",
        "気分は天気のように移ろうもの。感じたままに、目の前のことに手を動かしましょう。",
    ),
    tags: LocalizedList::new(&["Arugamama", "Action"], &["あるがまま", "行動"]),
};

const STUDY: RoomContent = RoomContent {
    icon: "📖",
    gradient: "from-amber-50 to-orange-100",
    accent: "bg-amber-100 text-amber-800",
    title: LocalizedText::new("The Study", "書斎"),
    subtitle: LocalizedText::new("Study ― Naikan Reflection", "書斎 ― 内観療法"),
    description: LocalizedText::new(
        "Look back on what you have received, what you have returned, and what troubles you caused.",
        "してもらったこと、して返したこと、迷惑をかけたことを静かに振り返ります。",
    ),
    tags: LocalizedList::new(&["Reflection", "Gratitude"], &["内観", "感謝"]),
};

const TATAMI: RoomContent = RoomContent {
    icon: "🍵",
    gradient: "from-stone-50 to-stone-200",
    accent: "bg-stone-200 text-stone-800",
    title: LocalizedText::new("The Tatami Room", "畳の間"),
    subtitle: LocalizedText::new("Tatami ― Zen Practice", "畳 ― 禅の実践"),
    description: LocalizedText::new(
        "Sit down, follow your breath, and let the mind settle on its own.",
        "座って呼吸を見つめ、心が自然に落ち着くのを待ちます。",
    ),
    tags: LocalizedList::new(&["Zazen", "Breath"], &["坐禅", "呼吸"]),
};

impl Room {
    /// Returns all rooms in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Garden, Self::Study, Self::Tatami]
    }

    /// Identifier used in paths (`/garden`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Garden => "garden",
            Self::Study => "study",
            Self::Tatami => "tatami",
        }
    }

    /// Static card content for this room.
    #[must_use]
    pub const fn content(self) -> &'static RoomContent {
        match self {
            Self::Garden => &GARDEN,
            Self::Study => &STUDY,
            Self::Tatami => &TATAMI,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Room {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "garden" => Ok(Self::Garden),
            "study" => Ok(Self::Study),
            "tatami" => Ok(Self::Tatami),
            other => bail!("Unknown room '{other}' (expected garden, study, or tatami)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_room_ids_round_trip() {
        for &room in Room::all() {
            assert_eq!(room.as_str().parse::<Room>().unwrap(), room);
        }
    }

    #[test]
    fn test_unknown_room_rejected() {
        assert!("kitchen".parse::<Room>().is_err());
        assert!("Garden".parse::<Room>().is_err());
        assert!("".parse::<Room>().is_err());
    }

    #[test]
    fn test_garden_japanese_content() {
        let garden = Room::Garden.content();
        assert_eq!(garden.subtitle.pick(Language::Ja), "庭 ― 森田療法");
        assert_eq!(garden.tags.pick(Language::Ja), &["あるがまま", "行動"]);
        assert_eq!(garden.tags.pick(Language::En), &["Arugamama", "Action"]);
    }

    #[test]
    fn test_every_room_fully_localized() {
        for &room in Room::all() {
            let c = room.content();
            assert!(!c.icon.is_empty());
            for &lang in Language::all() {
                assert!(!c.title.pick(lang).is_empty(), "{room} title {lang}");
                assert!(!c.subtitle.pick(lang).is_empty(), "{room} subtitle {lang}");
                assert!(!c.description.pick(lang).is_empty(), "{room} description {lang}");
                let tags = c.tags.pick(lang);
                assert!(!tags.is_empty(), "{room} tags {lang}");
                assert!(tags.iter().all(|t| !t.is_empty()));
            }
            assert_eq!(c.tags.en.len(), c.tags.ja.len());
        }
    }
}
