// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached with `OnceLock` so repeated views reuse the same handle.

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Globe glyph shown on the switcher trigger.
pub fn globe() -> Svg<'static> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    static DATA: &[u8] = include_bytes!("../../assets/icons/globe.svg");
    let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
    Svg::new(handle.clone())
}

/// Constrains an icon to a square of the given logical size.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
