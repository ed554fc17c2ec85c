// SPDX-License-Identifier: MPL-2.0
//! Message processing for the application.

use super::{fetch_locales, App, Message};
use crate::application::port::events::LOCALES_CHANGED;
use crate::domain::Culture;
use crate::ui::switcher;
use iced::Task;
use unic_langid::LanguageIdentifier;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Switcher(switcher_message) => {
                let event = switcher::update(&mut self.switcher, switcher_message);
                self.handle_switcher_event(event)
            }
        }
    }

    fn handle_switcher_event(&mut self, event: switcher::Event) -> Task<Message> {
        match event {
            switcher::Event::None => Task::none(),
            switcher::Event::LocaleChangeRequested(locale_id) => {
                self.emitter.emit(LOCALES_CHANGED, &locale_id);
                self.apply_locale(&locale_id)
            }
        }
    }

    /// Host-side reaction to `localesChanged`: the storefront would reload
    /// the page under the new locale. The demo equivalent is applying the
    /// culture, switching the chrome bundle when one exists, remounting the
    /// switcher (which ends its changing state), and re-issuing the query.
    fn apply_locale(&mut self, locale_id: &str) -> Task<Message> {
        self.culture = Culture::from_locale_id(locale_id);

        if let Ok(locale) = locale_id.parse::<LanguageIdentifier>() {
            self.i18n.set_locale(locale);
        }

        self.switcher = switcher::State::new(&self.culture);
        fetch_locales(self.source.clone())
    }
}
