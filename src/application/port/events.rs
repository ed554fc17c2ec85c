// SPDX-License-Identifier: MPL-2.0
//! Outbound runtime event port.
//!
//! The host storefront owns a process-wide event emitter. The widget is given
//! an implementation of [`EventEmitter`] instead of reaching for a global, so
//! locale changes can be observed in tests without a host runtime.

/// Event name carried to the host when a locale change is requested.
pub const LOCALES_CHANGED: &str = "localesChanged";

/// Fire-and-forget notification channel to the host runtime.
///
/// No acknowledgment or return value is expected; the host typically reacts
/// by reloading the storefront with the new locale.
pub trait EventEmitter {
    fn emit(&self, event: &str, payload: &str);
}

/// Default emitter used by the demo host: prints the event to stderr.
pub struct StderrEmitter;

impl EventEmitter for StderrEmitter {
    fn emit(&self, event: &str, payload: &str) {
        eprintln!("[runtime event] {event}: {payload}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recording(RefCell<Vec<(String, String)>>);

    impl EventEmitter for Recording {
        fn emit(&self, event: &str, payload: &str) {
            self.0
                .borrow_mut()
                .push((event.to_string(), payload.to_string()));
        }
    }

    #[test]
    fn emitter_receives_event_name_and_payload() {
        let emitter = Recording(RefCell::new(Vec::new()));
        emitter.emit(LOCALES_CHANGED, "pt-BR");

        let events = emitter.0.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], (LOCALES_CHANGED.to_string(), "pt-BR".to_string()));
    }
}
