// SPDX-License-Identifier: MPL-2.0
//! Styling hooks of the locale switcher.
//!
//! These functions are the widget's presentation contract: stable, named
//! handles a theme integrates against. Renaming one is a breaking change for
//! theming code even though none of them carry behavior.
//!
//! | Hook                | Applied to                                |
//! |---------------------|-------------------------------------------|
//! | [`container`]       | outer switcher container                  |
//! | [`trigger`]         | the always-visible trigger button         |
//! | [`list`]            | the dropdown panel                        |
//! | [`list_element`]    | one clickable row inside the dropdown     |
//! | [`loading_container`] | the loading row replacing the list      |

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::widget::container as container_widget;
use iced::{Background, Border, Theme};

/// Outer container around trigger and dropdown. Transparent; exists so a
/// theme can decorate the whole widget.
pub fn container(_theme: &Theme) -> container_widget::Style {
    container_widget::Style::default()
}

/// Trigger button: link-like, transparent, no border.
pub fn trigger(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: None,
            text_color: palette.primary.strong.color,
            border: Border::default(),
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

/// Dropdown panel behind the candidate rows.
pub fn list(theme: &Theme) -> container_widget::Style {
    let extended = theme.extended_palette();

    container_widget::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: extended.background.strong.color,
        },
        ..Default::default()
    }
}

/// One selectable row: flat when idle, highlighted on hover, brand color on
/// press.
pub fn list_element(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(extended.background.strong.color)),
            text_color: extended.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: extended.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

/// Container of the loading row shown while the query is in flight.
pub fn loading_container(theme: &Theme) -> container_widget::Style {
    // Same surface as the list so the swap does not flash.
    list(theme)
}
