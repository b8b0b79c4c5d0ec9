//! Komorebi Site Library
//!
//! Server-rendered, bilingual (English/Japanese) pages for a mental-wellness
//! site: localized content tables, link building, view components, page
//! composition, configuration and the optional HTTP server.

// Module declarations
pub mod branding;
pub mod cli;
pub mod components;
pub mod config;
pub mod content;
pub mod i18n;
pub mod links;
pub mod pages;
#[cfg(feature = "web")]
pub mod web;
