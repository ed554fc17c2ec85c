// SPDX-License-Identifier: MPL-2.0
//! Locale switcher control.
//!
//! Owns the interaction state (dropdown visibility, pending locale change,
//! selected locale), derives the candidate list from the locales query, and
//! auto-corrects the active locale when the derived list disagrees with the
//! session culture. Rendering of the dropdown rows lives in [`list`].
//!
//! Locale-change requests leave this module as [`Event`] values; the host
//! application forwards them to its event emitter. The control itself never
//! touches the emitter, which keeps every path here synchronously testable.

pub mod list;

use crate::application::port::locales::LocalesError;
use crate::domain::{filter_supported, Culture, LocaleDescriptor, LocalesQuery};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::widgets::Spinner;
use crate::ui::{icons, styles};
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};
use std::f32::consts::TAU;
use std::time::Instant;

/// Locale id that auto-correction never overrides, compared
/// case-insensitively. Keeps the store's baseline default sticky even when a
/// binding lists another locale first.
const PROTECTED_DEFAULT: &str = "en-US";

/// Rotation advance per tick, radians.
const SPINNER_STEP: f32 = 0.35;

/// Dropdown visibility as an explicit state machine.
///
/// The dropdown is mounted lazily on first open and never unmounted again;
/// afterwards open/close only moves between `Visible` and `Hidden`, so the
/// dropdown keeps its widget identity (and measurements) across closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListVisibility {
    /// Never opened; no dropdown markup exists.
    Unmounted,
    /// Mounted but not shown.
    Hidden,
    /// Mounted and shown.
    Visible,
}

impl ListVisibility {
    pub fn is_open(self) -> bool {
        matches!(self, ListVisibility::Visible)
    }

    pub fn is_mounted(self) -> bool {
        !matches!(self, ListVisibility::Unmounted)
    }

    fn toggled(self) -> Self {
        match self {
            ListVisibility::Visible => ListVisibility::Hidden,
            ListVisibility::Unmounted | ListVisibility::Hidden => ListVisibility::Visible,
        }
    }

    fn closed(self) -> Self {
        match self {
            ListVisibility::Unmounted => ListVisibility::Unmounted,
            _ => ListVisibility::Hidden,
        }
    }
}

/// Interaction state of the switcher. Created at mount, discarded at unmount;
/// nothing here is persisted.
pub struct State {
    visibility: ListVisibility,
    changing_locale: bool,
    selected_locale: LocaleDescriptor,
    culture: Culture,
    langs: Vec<LocaleDescriptor>,
    loading: bool,
    failed: bool,
    spinner_rotation: f32,
}

impl State {
    /// Initializes from the host culture. `selected_locale` is valid from the
    /// start, before the locales query resolves.
    pub fn new(culture: &Culture) -> Self {
        Self {
            visibility: ListVisibility::Unmounted,
            changing_locale: false,
            selected_locale: LocaleDescriptor::from_culture(culture),
            culture: culture.clone(),
            langs: Vec::new(),
            loading: true,
            failed: false,
            spinner_rotation: 0.0,
        }
    }

    pub fn visibility(&self) -> ListVisibility {
        self.visibility
    }

    pub fn is_changing(&self) -> bool {
        self.changing_locale
    }

    pub fn selected_locale(&self) -> &LocaleDescriptor {
        &self.selected_locale
    }

    /// Candidate descriptors derived from the last query result.
    pub fn supported_locales(&self) -> &[LocaleDescriptor] {
        &self.langs
    }

    /// Whether a spinner is on screen and the tick subscription should run.
    pub fn is_busy(&self) -> bool {
        self.changing_locale || (self.loading && self.visibility.is_open())
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The trigger button was pressed.
    TriggerPressed,
    /// Focus left the switcher (click elsewhere).
    TriggerBlurred,
    /// A dropdown row carrying this locale id was activated.
    ItemClicked(String),
    /// The locales query resolved.
    LocalesLoaded(Result<LocalesQuery, LocalesError>),
    /// The host culture changed without a remount.
    CultureChanged(Culture),
    /// Spinner animation tick.
    Tick(Instant),
}

/// Events propagated to the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Ask the host to switch the session to this locale id.
    LocaleChangeRequested(String),
}

/// Processes a switcher message and returns the event for the host.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TriggerPressed => {
            state.visibility = state.visibility.toggled();
            Event::None
        }
        Message::TriggerBlurred => {
            // Unconditional close. Item activation is not gated on the
            // dropdown being open, so a blur racing a row click cannot
            // swallow the selection.
            state.visibility = state.visibility.closed();
            Event::None
        }
        Message::ItemClicked(locale_id) => {
            let picked = list::resolve_clicked(&state.langs, &locale_id);
            state.selected_locale = picked.clone();
            state.changing_locale = true;
            state.visibility = state.visibility.closed();
            Event::LocaleChangeRequested(picked.locale_id)
        }
        Message::LocalesLoaded(Ok(query)) => {
            state.loading = false;
            state.failed = false;
            state.langs = filter_supported(query.effective_candidates());
            correction_event(state)
        }
        Message::LocalesLoaded(Err(err)) => {
            eprintln!("Failed to load supported locales: {err}");
            state.loading = false;
            state.failed = true;
            Event::None
        }
        Message::CultureChanged(culture) => {
            if culture == state.culture {
                // Unchanged dependency; re-running must not re-emit.
                return Event::None;
            }
            state.culture = culture;
            correction_event(state)
        }
        Message::Tick(_) => {
            state.spinner_rotation = (state.spinner_rotation + SPINNER_STEP) % TAU;
            Event::None
        }
    }
}

fn correction_event(state: &State) -> Event {
    match auto_correct(&state.langs, &state.culture) {
        Some(locale_id) => Event::LocaleChangeRequested(locale_id.to_string()),
        None => Event::None,
    }
}

/// Decides whether the active locale must be corrected to the first
/// candidate.
///
/// Fires only when candidates exist, the session has a locale, the first
/// candidate is not the protected default, and the session locale differs
/// from it case-insensitively.
pub fn auto_correct<'a>(langs: &'a [LocaleDescriptor], culture: &Culture) -> Option<&'a str> {
    if culture.locale.is_empty() {
        return None;
    }

    let first_id = langs.first()?.locale_id.as_str();
    if first_id.is_empty() || first_id.eq_ignore_ascii_case(PROTECTED_DEFAULT) {
        return None;
    }
    if culture.locale.eq_ignore_ascii_case(first_id) {
        return None;
    }

    Some(first_id)
}

/// Contextual data needed to render the switcher.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Renders the trigger button and, once mounted, the dropdown.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    let trigger_content: Element<'a, Message> = if state.changing_locale {
        Spinner::new(palette::PRIMARY_500, state.spinner_rotation, sizing::SPINNER)
            .into_element()
    } else {
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::globe(), sizing::ICON_SM))
            .push(
                Text::new(state.selected_locale.text.as_str()).size(typography::BODY),
            )
            .into()
    };

    let trigger = button(trigger_content)
        .on_press(Message::TriggerPressed)
        .padding(spacing::XS)
        .style(styles::switcher::trigger);

    let mut content = Column::new()
        .width(Length::Fixed(sizing::SWITCHER_WIDTH))
        .push(trigger);

    if state.visibility.is_mounted() {
        content = content.push(list::view(list::ListContext {
            open: state.visibility.is_open(),
            loading: state.loading,
            failed: state.failed,
            langs: &state.langs,
            selected: &state.selected_locale,
            spinner_rotation: state.spinner_rotation,
            i18n: ctx.i18n,
        }));
    }

    Container::new(content)
        .style(styles::switcher::container)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Binding, Languages};

    fn culture(language: &str, locale: &str) -> Culture {
        Culture::new(language, locale)
    }

    fn query(supported: &[&str], binding: Option<&[&str]>) -> LocalesQuery {
        LocalesQuery {
            languages: Languages {
                default: "en-US".to_string(),
                supported: supported.iter().map(|c| c.to_string()).collect(),
            },
            current_binding: binding.map(|locales| Binding {
                supported_locales: locales.iter().map(|c| c.to_string()).collect(),
            }),
        }
    }

    fn loaded(state: &mut State, q: LocalesQuery) -> Event {
        update(state, Message::LocalesLoaded(Ok(q)))
    }

    #[test]
    fn starts_unmounted_with_culture_descriptor() {
        let state = State::new(&culture("fr", "fr-FR"));
        assert_eq!(state.visibility(), ListVisibility::Unmounted);
        assert!(!state.is_changing());
        assert_eq!(state.selected_locale().text, "French (France)");
        assert_eq!(state.selected_locale().locale_id, "fr-FR");
    }

    #[test]
    fn first_open_mounts_and_never_unmounts() {
        let mut state = State::new(&culture("en", "en-US"));

        update(&mut state, Message::TriggerPressed);
        assert_eq!(state.visibility(), ListVisibility::Visible);

        update(&mut state, Message::TriggerPressed);
        assert_eq!(state.visibility(), ListVisibility::Hidden);
        assert!(state.visibility().is_mounted());

        update(&mut state, Message::TriggerPressed);
        assert_eq!(state.visibility(), ListVisibility::Visible);
    }

    #[test]
    fn blur_before_first_open_does_not_mount() {
        let mut state = State::new(&culture("en", "en-US"));
        update(&mut state, Message::TriggerBlurred);
        assert_eq!(state.visibility(), ListVisibility::Unmounted);
    }

    #[test]
    fn loaded_query_derives_filtered_candidates() {
        let mut state = State::new(&culture("en", "en-US"));
        let event = loaded(
            &mut state,
            query(&["en-US", "xx-XX", "fr-FR"], None),
        );

        assert_eq!(event, Event::None);
        let ids: Vec<&str> = state
            .supported_locales()
            .iter()
            .map(|l| l.locale_id.as_str())
            .collect();
        assert_eq!(ids, ["en-US", "fr-FR"]);
    }

    #[test]
    fn binding_list_overrides_store_list() {
        let mut state = State::new(&culture("pt", "pt-BR"));
        loaded(
            &mut state,
            query(&["en-US"], Some(&["pt-BR", "es-AR"])),
        );

        let ids: Vec<&str> = state
            .supported_locales()
            .iter()
            .map(|l| l.locale_id.as_str())
            .collect();
        assert_eq!(ids, ["pt-BR", "es-AR"]);
    }

    #[test]
    fn protected_default_is_never_auto_corrected() {
        let mut state = State::new(&culture("fr", "fr-FR"));
        let event = loaded(&mut state, query(&["en-US", "fr-FR"], None));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn mismatched_first_candidate_forces_a_switch() {
        let mut state = State::new(&culture("fr", "fr-FR"));
        let event = loaded(&mut state, query(&["pt-BR", "fr-FR"], None));
        assert_eq!(
            event,
            Event::LocaleChangeRequested("pt-BR".to_string())
        );
    }

    #[test]
    fn matching_first_candidate_is_left_alone() {
        let mut state = State::new(&culture("pt", "pt-br"));
        // Case-insensitive match against the session locale.
        let event = loaded(&mut state, query(&["pt-BR", "en-US"], None));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn repeated_culture_change_with_same_value_does_not_re_emit() {
        let mut state = State::new(&culture("fr", "fr-FR"));
        loaded(&mut state, query(&["pt-BR", "fr-FR"], None));

        let event = update(
            &mut state,
            Message::CultureChanged(culture("es", "es-AR")),
        );
        assert_eq!(
            event,
            Event::LocaleChangeRequested("pt-BR".to_string())
        );

        let event = update(
            &mut state,
            Message::CultureChanged(culture("es", "es-AR")),
        );
        assert_eq!(event, Event::None);
    }

    #[test]
    fn empty_candidate_list_never_corrects() {
        let mut state = State::new(&culture("fr", "fr-FR"));
        let event = loaded(&mut state, query(&["en-US"], Some(&[])));
        assert_eq!(event, Event::None);
        assert!(state.supported_locales().is_empty());
    }

    #[test]
    fn item_click_selects_emits_and_closes() {
        let mut state = State::new(&culture("en", "en-US"));
        loaded(&mut state, query(&["en-US", "es-AR"], None));
        update(&mut state, Message::TriggerPressed);

        let event = update(&mut state, Message::ItemClicked("es-AR".to_string()));

        assert_eq!(
            event,
            Event::LocaleChangeRequested("es-AR".to_string())
        );
        assert_eq!(state.selected_locale().locale_id, "es-AR");
        assert_eq!(state.selected_locale().text, "Spanish (Argentina)");
        assert!(state.is_changing());
        assert_eq!(state.visibility(), ListVisibility::Hidden);
    }

    #[test]
    fn blur_then_click_still_selects() {
        let mut state = State::new(&culture("en", "en-US"));
        loaded(&mut state, query(&["en-US", "fr-FR"], None));
        update(&mut state, Message::TriggerPressed);

        // Blur lands first, then the row click arrives. The click must win.
        update(&mut state, Message::TriggerBlurred);
        let event = update(&mut state, Message::ItemClicked("fr-FR".to_string()));

        assert_eq!(
            event,
            Event::LocaleChangeRequested("fr-FR".to_string())
        );
        assert_eq!(state.selected_locale().locale_id, "fr-FR");
    }

    #[test]
    fn failed_query_keeps_trigger_functional() {
        let mut state = State::new(&culture("en", "en-US"));
        let event = update(
            &mut state,
            Message::LocalesLoaded(Err(LocalesError::Network("boom".to_string()))),
        );

        assert_eq!(event, Event::None);
        assert!(state.supported_locales().is_empty());
        assert_eq!(state.selected_locale().locale_id, "en-US");

        update(&mut state, Message::TriggerPressed);
        assert!(state.visibility().is_open());
    }

    #[test]
    fn busy_only_while_spinner_is_on_screen() {
        let mut state = State::new(&culture("en", "en-US"));
        // Loading but closed: no spinner visible.
        assert!(!state.is_busy());

        update(&mut state, Message::TriggerPressed);
        assert!(state.is_busy());

        loaded(&mut state, query(&["en-US", "fr-FR"], None));
        assert!(!state.is_busy());

        update(&mut state, Message::ItemClicked("fr-FR".to_string()));
        assert!(state.is_busy());
    }

    #[test]
    fn view_renders_in_every_visibility_state() {
        let i18n = I18n::default();
        let mut state = State::new(&culture("en", "en-US"));
        loaded(&mut state, query(&["en-US", "fr-FR"], None));

        let _unmounted = view(ViewContext { i18n: &i18n, state: &state });
        drop(_unmounted);

        update(&mut state, Message::TriggerPressed);
        let _visible = view(ViewContext { i18n: &i18n, state: &state });
        drop(_visible);

        update(&mut state, Message::TriggerBlurred);
        let _hidden = view(ViewContext { i18n: &i18n, state: &state });
    }

    #[test]
    fn view_renders_changing_state() {
        let i18n = I18n::default();
        let mut state = State::new(&culture("en", "en-US"));
        loaded(&mut state, query(&["en-US", "fr-FR"], None));
        update(&mut state, Message::ItemClicked("fr-FR".to_string()));

        let _element = view(ViewContext { i18n: &i18n, state: &state });
    }
}
