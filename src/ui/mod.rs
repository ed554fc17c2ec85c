// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages up"
//! pattern.
//!
//! - [`switcher`] - the locale switcher: trigger button, dropdown list,
//!   auto-correction of the active locale
//! - [`widgets`] - custom Iced widgets (canvas spinner)
//! - [`styles`] - centralized style functions; `styles::switcher` is the
//!   widget's stable theming surface
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)
//! - [`icons`] - embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod switcher;
pub mod widgets;
