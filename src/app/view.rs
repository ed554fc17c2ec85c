// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo storefront header.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::switcher;
use iced::alignment::Vertical;
use iced::widget::{mouse_area, Column, Container, Row, Space, Text};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let switcher_view = switcher::view(switcher::ViewContext {
            i18n: &self.i18n,
            state: &self.switcher,
        })
        .map(Message::Switcher);

        let header = Row::new()
            .padding(spacing::MD)
            .align_y(Vertical::Center)
            .push(Text::new(self.i18n.tr("header-title")).size(typography::BODY * 1.3))
            .push(Space::new().width(Length::Fill))
            .push(switcher_view);

        let body = Column::new()
            .padding(spacing::LG)
            .spacing(spacing::XS)
            .push(Text::new(self.i18n.tr("body-heading")).size(typography::BODY))
            .push(Text::new(self.culture.locale.as_str()).size(typography::SMALL));

        // Clicking anywhere in the body while the dropdown is open is the
        // blur that closes it.
        let body: Element<'_, Message> = if self.switcher.visibility().is_open() {
            mouse_area(
                Container::new(body)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .on_press(Message::Switcher(switcher::Message::TriggerBlurred))
            .into()
        } else {
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        };

        Column::new()
            .push(header)
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
