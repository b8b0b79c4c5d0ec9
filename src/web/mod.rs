//! HTTP server for the Komorebi site.
//!
//! Every page is rendered on request from the immutable [`Site`]; nothing is
//! cached or stored between requests.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /` - Landing page
//! - `GET /check-in` - Daily check-in (optional `?weather=`)
//! - `GET /install`, `/pricing`, `/profile` - Informational pages
//! - `GET /{room}` - Room page (`garden`, `study`, `tatami`)
//! - `GET /assets/{*path}` - Embedded stylesheet, script and manifest
//!
//! All pages accept `?lang=en|ja`; anything else falls back to English.

pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::content::{Mood, Room};
use crate::i18n::Language;
use crate::links::{query_value, LANG_PARAM, WEATHER_PARAM};
use crate::pages::{Page, Site};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Page renderer built from the configuration
    site: Arc<Site>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let site = Site::from_config(&config);
        Self {
            config: Arc::new(config),
            site: Arc::new(site),
        }
    }

    /// Returns the configuration the server was started with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn page(&self, page: Page, lang: Language) -> Response {
        let status = if page == Page::NotFound {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::OK
        };
        (status, Html(self.site.render(page, lang).into_string())).into_response()
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters understood by every page.
///
/// Read from the raw query string. Repeated keys keep their first value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Requested language code
    pub lang: Option<String>,
    /// Mood chosen on the check-in page
    pub weather: Option<String>,
}

impl PageQuery {
    /// Extracts the page parameters from a raw query string.
    #[must_use]
    pub fn from_raw(query: Option<&str>) -> Self {
        let query = query.unwrap_or_default();
        Self {
            lang: query_value(query, LANG_PARAM).map(str::to_string),
            weather: query_value(query, WEATHER_PARAM).map(str::to_string),
        }
    }

    /// Language to render in; unknown or missing codes fall back to English.
    #[must_use]
    pub fn language(&self) -> Language {
        Language::resolve(self.lang.as_deref())
    }

    /// Selected mood; unknown values mean no selection.
    #[must_use]
    pub fn mood(&self) -> Option<Mood> {
        let value = self.weather.as_deref()?;
        match value.parse::<Mood>() {
            Ok(mood) => Some(mood),
            Err(_) => {
                debug!("Ignoring unknown weather value '{}'", value);
                None
            }
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET / - Landing page.
async fn home_page(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Response {
    let query = PageQuery::from_raw(raw.as_deref());
    state.page(Page::Home, query.language())
}

/// GET /check-in - Check-in page with the picked mood highlighted.
async fn check_in_page(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Response {
    let query = PageQuery::from_raw(raw.as_deref());
    state.page(Page::CheckIn(query.mood()), query.language())
}

/// GET /install
async fn install_page(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Response {
    let query = PageQuery::from_raw(raw.as_deref());
    state.page(Page::Install, query.language())
}

/// GET /pricing
async fn pricing_page(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Response {
    let query = PageQuery::from_raw(raw.as_deref());
    state.page(Page::Pricing, query.language())
}

/// GET /profile
async fn profile_page(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Response {
    let query = PageQuery::from_raw(raw.as_deref());
    state.page(Page::Profile, query.language())
}

/// GET /{room} - Room page, or the 404 page for unknown rooms.
async fn room_page(
    State(state): State<AppState>,
    Path(room): Path<String>,
    RawQuery(raw): RawQuery,
) -> Response {
    let lang = PageQuery::from_raw(raw.as_deref()).language();
    match room.parse::<Room>() {
        Ok(room) => state.page(Page::Room(room), lang),
        Err(e) => {
            debug!("{e}");
            state.page(Page::NotFound, lang)
        }
    }
}

/// Fallback for every unmatched path.
async fn not_found(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Response {
    let query = PageQuery::from_raw(raw.as_deref());
    state.page(Page::NotFound, query.language())
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with all pages, health check and assets.
pub fn create_router(state: AppState) -> Router {
    // Pages and assets are public and read-only.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        // Pages
        .route("/", get(home_page))
        .route("/check-in", get(check_in_page))
        .route("/install", get(install_page))
        .route("/pricing", get(pricing_page))
        .route("/profile", get(profile_page))
        .route("/{room}", get(room_page))
        // Embedded assets
        .route("/assets/{*path}", get(static_files::serve_asset))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let preset = config
        .preset()
        .map_or_else(|| "custom".to_string(), |p| p.to_string());
    let state = AppState::new(config);
    let app = create_router(state);

    if !static_files::has_embedded_assets() {
        warn!("Stylesheet or controller script missing from embedded assets");
    }
    info!("Starting Komorebi web server on {} (features: {})", addr, preset);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lang: Option<&str>, weather: Option<&str>) -> PageQuery {
        PageQuery {
            lang: lang.map(str::to_string),
            weather: weather.map(str::to_string),
        }
    }

    #[test]
    fn test_from_raw_keeps_first_value() {
        let q = PageQuery::from_raw(Some("lang=ja&lang=en&weather=stormy&weather=sunny"));
        assert_eq!(q, query(Some("ja"), Some("stormy")));
        assert_eq!(PageQuery::from_raw(None), PageQuery::default());
        assert_eq!(PageQuery::from_raw(Some("&&=x&lang")).language(), Language::En);
    }

    #[test]
    fn test_query_language_falls_back() {
        assert_eq!(query(Some("ja"), None).language(), Language::Ja);
        assert_eq!(query(Some("fr"), None).language(), Language::En);
        assert_eq!(query(None, None).language(), Language::En);
    }

    #[test]
    fn test_query_mood() {
        assert_eq!(query(None, Some("rainy")).mood(), Some(Mood::Rainy));
        assert_eq!(query(None, Some("foggy")).mood(), None);
        assert_eq!(query(None, None).mood(), None);
    }

    #[test]
    fn test_state_keeps_config() {
        let mut config = Config::new();
        config.server.port = 8080;
        let state = AppState::new(config);
        assert_eq!(state.config().server.port, 8080);
    }
}
