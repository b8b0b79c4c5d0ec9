//! Weather moods offered on the check-in picker.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::LocalizedText;

/// How the visitor feels today, expressed as weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Clear and calm
    Sunny,
    /// Hazy, low energy
    Cloudy,
    /// Heavy, sad
    Rainy,
    /// Overwhelmed
    Stormy,
}

/// Display content for one mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodContent {
    /// Weather emoji
    pub emoji: &'static str,
    /// Background classes of the icon bubble
    pub tint: &'static str,
    /// Tooltip and caption
    pub title: LocalizedText,
}

const SUNNY: MoodContent = MoodContent {
    emoji: "☀️",
    tint: "bg-amber-100",
    title: LocalizedText::new("Calm", "晴れ"),
};

const CLOUDY: MoodContent = MoodContent {
    emoji: "☁️",
    tint: "bg-slate-100",
    title: LocalizedText::new("Foggy", "曇り"),
};

const RAINY: MoodContent = MoodContent {
    emoji: "🌧️",
    tint: "bg-sky-100",
    title: LocalizedText::new("Heavy", "雨"),
};

const STORMY: MoodContent = MoodContent {
    emoji: "⛈️",
    tint: "bg-indigo-100",
    title: LocalizedText::new("Overwhelmed", "嵐"),
};

impl Mood {
    /// Returns all moods in picker order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Sunny, Self::Cloudy, Self::Rainy, Self::Stormy]
    }

    /// Value used in the `weather=` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Stormy => "stormy",
        }
    }

    /// Static display content for this mood.
    #[must_use]
    pub const fn content(self) -> &'static MoodContent {
        match self {
            Self::Sunny => &SUNNY,
            Self::Cloudy => &CLOUDY,
            Self::Rainy => &RAINY,
            Self::Stormy => &STORMY,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sunny" => Ok(Self::Sunny),
            "cloudy" => Ok(Self::Cloudy),
            "rainy" => Ok(Self::Rainy),
            "stormy" => Ok(Self::Stormy),
            other => {
                bail!("Unknown weather mood '{other}' (expected sunny, cloudy, rainy, or stormy)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_mood_round_trip() {
        for &mood in Mood::all() {
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn test_unknown_mood_rejected() {
        let err = "snowy".parse::<Mood>().unwrap_err();
        assert!(err.to_string().contains("snowy"));
    }

    #[test]
    fn test_stormy_titles() {
        let stormy = Mood::Stormy.content();
        assert_eq!(stormy.emoji, "⛈️");
        assert_eq!(stormy.title.pick(Language::En), "Overwhelmed");
        assert_eq!(stormy.title.pick(Language::Ja), "嵐");
    }

    #[test]
    fn test_every_mood_fully_localized() {
        for &mood in Mood::all() {
            for &lang in Language::all() {
                assert!(!mood.content().title.pick(lang).is_empty());
            }
        }
    }
}
