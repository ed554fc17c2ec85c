// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::switcher;

/// Top-level messages consumed by `App::update`. The switcher's messages are
/// forwarded through a single variant to keep one update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Switcher(switcher::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional chrome locale override in BCP-47 form (e.g. `fr-FR`).
    pub lang: Option<String>,
    /// Optional locales endpoint URL; overrides the configured one. Without
    /// either, the built-in demo catalog is served.
    pub endpoint: Option<String>,
}
