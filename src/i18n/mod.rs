// SPDX-License-Identifier: MPL-2.0
//! Internationalization of the application chrome.
//!
//! Chrome strings (window title, loading indicators) are localized with the
//! Fluent system from embedded `.ftl` bundles. The *candidate labels* shown
//! inside the switcher are a separate concern and come from the static table
//! in [`crate::domain::locale`].

pub mod fluent;
