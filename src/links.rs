//! Language-preserving link construction.
//!
//! The active language survives navigation only through the `lang` query
//! parameter, so every href the site emits goes through [`build_href`].
//! Canonical form: caller parameters first in the order given, `lang` last,
//! fragment after the query (`/?lang=ja#about`).

use crate::content::{Mood, Room};
use crate::i18n::Language;

/// Name of the query parameter carrying the active language.
pub const LANG_PARAM: &str = "lang";

/// Name of the query parameter carrying the chosen weather mood.
pub const WEATHER_PARAM: &str = "weather";

/// Builds `base` with `extra` query parameters followed by `lang=<lang>`.
///
/// An existing query string in `base` is kept and extended, and an existing
/// fragment is moved behind the query. Keys and values are emitted verbatim;
/// callers pass closed-set tokens.
///
/// # Example
///
/// ```
/// use komorebi::i18n::Language;
/// use komorebi::links::build_href;
///
/// assert_eq!(
///     build_href("/check-in", Language::En, &[("weather", "sunny")]),
///     "/check-in?weather=sunny&lang=en"
/// );
/// assert_eq!(build_href("/#about", Language::Ja, &[]), "/?lang=ja#about");
/// ```
#[must_use]
pub fn build_href(base: &str, lang: Language, extra: &[(&str, &str)]) -> String {
    let (before_fragment, fragment) = match base.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (base, None),
    };
    let (path, existing_query) = match before_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query).filter(|q| !q.is_empty())),
        None => (before_fragment, None),
    };

    let mut href = String::with_capacity(base.len() + 16);
    href.push_str(if path.is_empty() { "/" } else { path });
    href.push('?');

    if let Some(query) = existing_query {
        href.push_str(query);
        href.push('&');
    }
    for (key, value) in extra {
        href.push_str(key);
        href.push('=');
        href.push_str(value);
        href.push('&');
    }
    href.push_str(LANG_PARAM);
    href.push('=');
    href.push_str(lang.code());

    if let Some(fragment) = fragment {
        href.push('#');
        href.push_str(fragment);
    }
    href
}

/// Returns the value of query parameter `key` in `href`, if present.
#[must_use]
pub fn query_param<'a>(href: &'a str, key: &str) -> Option<&'a str> {
    let without_fragment = href.split('#').next().unwrap_or(href);
    let (_, query) = without_fragment.split_once('?')?;
    query_value(query, key)
}

/// Returns the first value of `key` in a raw query string (no leading `?`).
///
/// Repeated keys are not an error; later occurrences are ignored. A key
/// without `=` has the empty value.
#[must_use]
pub fn query_value<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

/// Recovers the language an href was built for.
///
/// Mirrors the page-side resolution: a missing or unknown `lang` value
/// resolves to the default language.
#[must_use]
pub fn language_of(href: &str) -> Language {
    Language::resolve(query_param(href, LANG_PARAM))
}

/// Every in-site destination the components link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page
    Home,
    /// "About" section of the landing page
    About,
    /// "Philosophy" section of the landing page
    Philosophy,
    /// Signed-in user's profile
    Profile,
    /// "Add to Home Screen" instructions
    Install,
    /// Plans and pricing
    Pricing,
    /// Daily check-in, optionally with a preselected mood
    CheckIn(Option<Mood>),
    /// One of the themed rooms
    Room(Room),
}

impl Route {
    /// Path (and fragment) of the route without any query parameters.
    #[must_use]
    pub fn base_path(self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::About => "/#about".to_string(),
            Self::Philosophy => "/#philosophy".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::Install => "/install".to_string(),
            Self::Pricing => "/pricing".to_string(),
            Self::CheckIn(_) => "/check-in".to_string(),
            Self::Room(room) => format!("/{}", room.as_str()),
        }
    }

    /// Full href for this route in `lang`.
    #[must_use]
    pub fn href(self, lang: Language) -> String {
        let base = self.base_path();
        match self {
            Self::CheckIn(Some(mood)) => build_href(&base, lang, &[(WEATHER_PARAM, mood.as_str())]),
            _ => build_href(&base, lang, &[]),
        }
    }
}
