// SPDX-License-Identifier: MPL-2.0
//! `locale_switcher` is a storefront locale switcher widget built with the Iced GUI framework.
//!
//! It renders the session's current language, fetches the locales supported by
//! the active store binding, and lets a shopper pick an alternate locale,
//! notifying the host runtime through a `localesChanged` event.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
