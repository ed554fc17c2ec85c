// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the switcher and the demo chrome.
//!
//! A trimmed-down token set: base palette, spacing on an 8px grid, component
//! sizing, and border radii. Keep ratios intact when adjusting (MD = XS * 2).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Icon sizes in logical pixels.
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 22.0;

    /// Fixed width of the switcher column (trigger and dropdown share it).
    pub const SWITCHER_WIDTH: f32 = 220.0;

    /// Spinner diameter inside the trigger and the loading row.
    pub const SPINNER: f32 = 20.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const SMALL: f32 = 12.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_ratios() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }

    #[test]
    fn icon_sizes_are_ordered() {
        assert!(sizing::ICON_SM < sizing::ICON_MD);
    }
}
