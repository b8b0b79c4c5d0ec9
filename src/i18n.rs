//! Bilingual content resolution.
//!
//! Every piece of display text on the site exists in exactly two languages.
//! [`Language`] is the selector threaded through every render call and every
//! outgoing link, and [`Localized`] holds one value per language so a lookup
//! can never come back empty.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Display language of a page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (the default when nothing else is requested)
    #[default]
    En,
    /// Japanese
    Ja,
}

impl Language {
    /// Returns every supported language in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::En, Self::Ja]
    }

    /// Two-letter code used in `lang=` query parameters and `<html lang>`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Label shown in the language switcher, written in the language itself.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Ja => "日本語",
        }
    }

    /// Resolves the page language from an optional `lang` query value.
    ///
    /// Missing or unrecognised values resolve to the default language so the
    /// view layer never has to deal with an invalid language.
    #[must_use]
    pub fn resolve(requested: Option<&str>) -> Self {
        requested
            .and_then(|code| code.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ja" => Ok(Self::Ja),
            other => bail!("Unknown language '{other}' (expected 'en' or 'ja')"),
        }
    }
}

/// A value available in every [`Language`].
///
/// Static content tables build these with [`Localized::new`], so a missing
/// translation is a compile error. Content loaded at runtime goes through
/// serde (a missing field fails the load) or [`Localized::from_entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    /// English value
    pub en: T,
    /// Japanese value
    pub ja: T,
}

/// Localized single display string.
pub type LocalizedText = Localized<&'static str>;

/// Localized ordered list of strings (e.g. tag lists).
pub type LocalizedList = Localized<&'static [&'static str]>;

impl<T> Localized<T> {
    /// Creates a localized value from its English and Japanese forms.
    pub const fn new(en: T, ja: T) -> Self {
        Self { en, ja }
    }

    /// Returns the value for `lang`.
    pub const fn get(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::Ja => &self.ja,
        }
    }

    /// Builds a localized value from `(language, value)` pairs.
    ///
    /// Later pairs overwrite earlier ones for the same language.
    ///
    /// # Errors
    ///
    /// Fails naming the first language without an entry. There is no fallback
    /// to another language.
    pub fn from_entries(entries: impl IntoIterator<Item = (Language, T)>) -> Result<Self> {
        let mut en = None;
        let mut ja = None;
        for (lang, value) in entries {
            match lang {
                Language::En => en = Some(value),
                Language::Ja => ja = Some(value),
            }
        }
        match (en, ja) {
            (Some(en), Some(ja)) => Ok(Self { en, ja }),
            (None, _) => bail!("Missing localization entry for language 'en'"),
            (_, None) => bail!("Missing localization entry for language 'ja'"),
        }
    }
}

impl<T: Copy> Localized<T> {
    /// Returns a copy of the value for `lang`.
    pub const fn pick(&self, lang: Language) -> T {
        match lang {
            Language::En => self.en,
            Language::Ja => self.ja,
        }
    }
}

impl Localized<String> {
    /// Returns the value for `lang` as a string slice.
    #[must_use]
    pub fn text(&self, lang: Language) -> &str {
        self.get(lang).as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Ja.code(), "ja");
        assert_eq!(Language::Ja.to_string(), "ja");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("JA".parse::<Language>().unwrap(), Language::Ja);
        assert_eq!(" ja ".parse::<Language>().unwrap(), Language::Ja);
        assert!("fr".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_resolve_defaults_to_english() {
        assert_eq!(Language::resolve(None), Language::En);
        assert_eq!(Language::resolve(Some("de")), Language::En);
        assert_eq!(Language::resolve(Some("")), Language::En);
        assert_eq!(Language::resolve(Some("ja")), Language::Ja);
    }

    #[test]
    fn test_localized_get() {
        let text = LocalizedText::new("Garden", "庭");
        assert_eq!(*text.get(Language::En), "Garden");
        assert_eq!(text.pick(Language::Ja), "庭");
    }

    #[test]
    fn test_from_entries_complete() {
        let text =
            Localized::from_entries([(Language::Ja, "嵐"), (Language::En, "Overwhelmed")]).unwrap();
        assert_eq!(text.en, "Overwhelmed");
        assert_eq!(text.ja, "嵐");
    }

    #[test]
    fn test_from_entries_missing_language_fails() {
        let err = Localized::from_entries([(Language::En, "Calm")]).unwrap_err();
        assert!(err.to_string().contains("'ja'"));

        let err = Localized::<&str>::from_entries([]).unwrap_err();
        assert!(err.to_string().contains("'en'"));
    }

    #[test]
    fn test_localized_deserialize_requires_every_language() {
        let ok: Localized<String> = toml::from_str("en = \"Hello\"\nja = \"こんにちは\"").unwrap();
        assert_eq!(ok.text(Language::Ja), "こんにちは");

        let missing: Result<Localized<String>, _> = toml::from_str("en = \"Hello\"");
        assert!(missing.is_err());
    }
}
