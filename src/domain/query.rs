// SPDX-License-Identifier: MPL-2.0
//! Shape of the supported-locales query and candidate-list precedence.

use serde::Deserialize;

/// Result of the locales query issued against the host data layer.
///
/// Consumed read-only; the widget never issues a mutation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalesQuery {
    pub languages: Languages,
    #[serde(default)]
    pub current_binding: Option<Binding>,
}

/// Store-wide language configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Languages {
    pub default: String,
    pub supported: Vec<String>,
}

/// A store binding scope that may narrow the supported locale list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub supported_locales: Vec<String>,
}

impl LocalesQuery {
    /// The raw candidate list the dropdown derives from.
    ///
    /// The binding-specific list wins whenever the binding object is present,
    /// even when its list is empty; only a missing binding falls back to the
    /// store-wide supported list.
    pub fn effective_candidates(&self) -> &[String] {
        match &self.current_binding {
            Some(binding) => &binding.supported_locales,
            None => &self.languages.supported,
        }
    }
}
