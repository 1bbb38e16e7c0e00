//! # impact-landing
//!
//! Leptos SSR renderer for the Impact Makers Utrecht landing page.
//!
//! The page is a pure function of three inputs: the [`Content`] registry,
//! the mobile [`MenuState`], and the date used for the footer year. Given the
//! same inputs [`render_page`] returns the same HTML.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use impact_landing::{render_page, Content, MenuState};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
//! let html = render_page(&Content::default(), MenuState::Closed, today);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("2025"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - the registry: nav entries, update cards, theme, copy
//! - [`normalize`] - turns untyped collections into well-formed sequences
//! - [`menu`] - the two-state mobile menu controller
//! - [`actions`] - user actions and injected host capabilities
//! - [`session`] - a mounted page that handles activations and re-renders
//! - [`config`] - override files applied at the configuration boundary
//! - [`components`] - Leptos components
//! - [`styles`] - inline CSS and page script
//!
//! No reactive runtime or hydration is involved; components receive plain
//! values and render once.

pub mod actions;
pub mod components;
pub mod config;
pub mod content;
pub mod menu;
pub mod normalize;
pub mod session;
pub mod styles;

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use components::PageDocument;

pub use actions::{Action, Activation, Clock, FixedClock, LogNavigator, Navigator, SystemClock};
pub use config::ConfigError;
pub use content::{Content, NavEntry, SiteInfo, ThemeTokens, UpdateEntry};
pub use menu::{MenuController, MenuState};
pub use normalize::{Entries, normalize};
pub use session::PageSession;

/// Render the complete landing page.
///
/// The live mobile panel is included only when `menu` is [`MenuState::Open`];
/// an inert `<template>` copy is always present for the page script. The
/// footer year is taken from `today`.
pub fn render_page(content: &Content, menu: MenuState, today: NaiveDate) -> String {
    let doc = view! {
        <PageDocument content=content.clone() menu=menu year=today.year() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
