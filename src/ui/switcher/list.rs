// SPDX-License-Identifier: MPL-2.0
//! Dropdown list rendering and row reconciliation.
//!
//! Pure function of its context: no state lives here. The list renders a
//! loading row, nothing, or the clickable candidate rows; activation is
//! reported upward through [`Message::ItemClicked`].

use super::Message;
use crate::domain::{display_label, LocaleDescriptor};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::Spinner;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Props of the dropdown list.
pub struct ListContext<'a> {
    pub open: bool,
    pub loading: bool,
    pub failed: bool,
    pub langs: &'a [LocaleDescriptor],
    pub selected: &'a LocaleDescriptor,
    pub spinner_rotation: f32,
    pub i18n: &'a I18n,
}

/// Resolves a clicked locale id back to a candidate descriptor.
///
/// Matching is by *label equivalence*: the resolved display label of the
/// clicked id is compared against each candidate's resolved label, so ids
/// differing in case or region suffix still reconcile when their labels
/// coincide. Falls back to the first candidate, and finally to a descriptor
/// synthesized from the raw id.
pub fn resolve_clicked(langs: &[LocaleDescriptor], clicked_id: &str) -> LocaleDescriptor {
    let clicked_label = display_label(clicked_id);

    if let Some(found) = langs
        .iter()
        .find(|lang| display_label(&lang.locale_id) == clicked_label)
    {
        return found.clone();
    }

    match langs.first() {
        Some(first) => first.clone(),
        None => LocaleDescriptor {
            text: clicked_label,
            locale_id: clicked_id.to_string(),
        },
    }
}

/// Renders the dropdown.
///
/// While the query is loading and the dropdown is open, only the loading row
/// is shown. A failed query or an empty candidate list renders nothing. The
/// rendered panel is kept in the tree when closed, collapsed to zero height,
/// mirroring a hidden attribute rather than an unmount.
pub fn view<'a>(ctx: ListContext<'a>) -> Element<'a, Message> {
    if ctx.loading && ctx.open {
        return loading_row(ctx.i18n, ctx.spinner_rotation);
    }

    if ctx.failed || ctx.langs.is_empty() {
        return Space::new().into();
    }

    let mut rows = Column::new().spacing(spacing::XXS);
    for lang in ctx
        .langs
        .iter()
        .filter(|lang| lang.locale_id != ctx.selected.locale_id)
    {
        rows = rows.push(
            button(
                Text::new(lang.text.as_str())
                    .size(typography::SMALL)
                    .width(Length::Fill)
                    .center(),
            )
            .on_press(Message::ItemClicked(lang.locale_id.clone()))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::switcher::list_element),
        );
    }

    let panel = Container::new(rows)
        .padding(spacing::XXS)
        .width(Length::Fill)
        .style(styles::switcher::list);

    if ctx.open {
        panel.into()
    } else {
        Container::new(panel)
            .width(Length::Fill)
            .height(Length::Fixed(0.0))
            .clip(true)
            .into()
    }
}

fn loading_row<'a>(i18n: &'a I18n, rotation: f32) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Spinner::new(palette::PRIMARY_500, rotation, sizing::SPINNER).into_element())
        .push(Text::new(i18n.tr("switcher-loading")).size(typography::SMALL));

    Container::new(row)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::switcher::loading_container)
        .into()
}
