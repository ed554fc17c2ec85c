// SPDX-License-Identifier: MPL-2.0
//! Application layer - port definitions between the widget and its host.
//!
//! The widget touches the outside world in exactly two places: it reads the
//! supported-locales query and it emits `localesChanged`. Both are modeled as
//! ports so the core logic stays testable without a real host runtime.

pub mod port;
