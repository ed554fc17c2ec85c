// SPDX-License-Identifier: MPL-2.0
//! Application root: the demo storefront header hosting the locale switcher.
//!
//! The `App` plays the part of the host runtime the widget integrates with in
//! production: it owns the culture context, the event emitter, and the data
//! source for the locales query, and it performs the host-side reaction to a
//! `localesChanged` event (apply the culture and remount the widget).

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::events::{EventEmitter, StderrEmitter};
use crate::application::port::locales::LocaleSource;
use crate::config;
use crate::domain::Culture;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{HttpLocaleSource, StaticLocaleSource};
use crate::ui::switcher;
use iced::{window, Subscription, Task};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

/// Milliseconds between spinner animation ticks.
const SPINNER_TICK_MS: u64 = 80;

/// Root Iced application state bridging the switcher, localization, and the
/// host-runtime ports.
pub struct App {
    pub i18n: I18n,
    culture: Culture,
    switcher: switcher::State,
    source: Arc<dyn LocaleSource>,
    emitter: Box<dyn EventEmitter>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("culture", &self.culture)
            .field("selected", &self.switcher.selected_locale().locale_id)
            .finish()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Iced 0.14 wants a Fn boot closure; the RefCell lets it consume the
    // flags exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the task that drives the locales query and delivers the result to
/// the switcher.
pub(crate) fn fetch_locales(source: Arc<dyn LocaleSource>) -> Task<Message> {
    Task::perform(source.fetch(), |result| {
        Message::Switcher(switcher::Message::LocalesLoaded(result))
    })
}

impl App {
    /// Initializes state from config and flags and kicks off the locales
    /// query.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load settings: {err}");
            config::Config::default()
        });

        let i18n = I18n::new(flags.lang.clone(), &config);
        let culture = Culture::from_locale_id(&i18n.current_locale().to_string());

        let endpoint = flags.endpoint.or_else(|| config.endpoint.clone());
        let source: Arc<dyn LocaleSource> = match endpoint {
            Some(url) => Arc::new(HttpLocaleSource::new(url, config.binding.clone())),
            None => Arc::new(StaticLocaleSource::demo_catalog()),
        };

        let switcher = switcher::State::new(&culture);
        let task = fetch_locales(source.clone());

        let app = App {
            i18n,
            culture,
            switcher,
            source,
            emitter: Box::new(StderrEmitter),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    /// Spinner animation tick, active only while a spinner is on screen.
    fn subscription(&self) -> Subscription<Message> {
        if self.switcher.is_busy() {
            iced::time::every(Duration::from_millis(SPINNER_TICK_MS))
                .map(|instant| Message::Switcher(switcher::Message::Tick(instant)))
        } else {
            Subscription::none()
        }
    }
}
