//! Static file serving for the Komorebi site.
//!
//! The stylesheet, client controller script and web manifest are embedded in
//! the binary at compile time and served under [`ASSETS_PREFIX`].
//!
//! [`ASSETS_PREFIX`]: crate::branding::ASSETS_PREFIX

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use tracing::debug;

/// Embedded files from the `assets` directory.
#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
#[include = "*.js"]
#[include = "*.webmanifest"]
#[include = "*.svg"]
#[include = "*.png"]
pub struct StaticAssets;

/// Serves one embedded asset.
///
/// Paths with traversal segments or hidden files are rejected before lookup.
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    if let Err(reason) = validate_asset_path(&path) {
        debug!("Rejected asset path '{}': {}", path, reason);
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }

    match StaticAssets::get(&path) {
        Some(content) => file_response(&path, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Checks an asset path requested by a client.
fn validate_asset_path(path: &str) -> Result<(), &'static str> {
    if path.is_empty() {
        return Err("empty path");
    }
    if path.starts_with('/') || path.starts_with('\\') {
        return Err("absolute paths not allowed");
    }
    if path.split(['/', '\\']).any(|segment| segment == ".." || segment.starts_with('.')) {
        return Err("path traversal and hidden files not allowed");
    }
    Ok(())
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Returns appropriate Cache-Control header based on file path.
///
/// - Manifest: always revalidate, so install metadata changes show up
/// - Images: long cache (1 day)
/// - Stylesheet and script: short cache (1 hour)
fn cache_control_for_path(path: &str) -> &'static str {
    let ext = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "webmanifest" => "no-cache, must-revalidate",
        "svg" | "png" => "public, max-age=86400",
        _ => "public, max-age=3600",
    }
}

/// Returns true if the stylesheet and controller script are embedded.
#[must_use]
pub fn has_embedded_assets() -> bool {
    StaticAssets::get("site.css").is_some() && StaticAssets::get("site.js").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_for_path() {
        assert_eq!(
            cache_control_for_path("manifest.webmanifest"),
            "no-cache, must-revalidate"
        );
        assert_eq!(cache_control_for_path("icon.svg"), "public, max-age=86400");
        assert_eq!(cache_control_for_path("site.css"), "public, max-age=3600");
        assert_eq!(cache_control_for_path("site.js"), "public, max-age=3600");
    }

    #[test]
    fn test_validate_asset_path() {
        assert!(validate_asset_path("site.css").is_ok());
        assert!(validate_asset_path("icons/leaf.svg").is_ok());
        assert!(validate_asset_path("").is_err());
        assert!(validate_asset_path("../Cargo.toml").is_err());
        assert!(validate_asset_path("icons/../../secret").is_err());
        assert!(validate_asset_path(".env").is_err());
        assert!(validate_asset_path("/etc/passwd").is_err());
    }

    #[test]
    fn test_has_embedded_assets() {
        assert!(has_embedded_assets());
    }

    #[test]
    fn test_embedded_assets_listed() {
        let files: Vec<String> = StaticAssets::iter().map(|s| s.to_string()).collect();
        assert!(files.iter().any(|f| f == "manifest.webmanifest"));
    }
}
