// SPDX-License-Identifier: MPL-2.0
//! Current culture context of the storefront session.

/// Language+region pair provided by the host runtime.
///
/// `language` is the bare language subtag (`"en"`, `"pt"`), `locale` the full
/// tag (`"en-US"`, `"pt-BR"`). Read at widget construction and on every
/// change; never mutated by the widget itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    pub language: String,
    pub locale: String,
}

impl Culture {
    pub fn new(language: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            locale: locale.into(),
        }
    }

    /// Derives a culture from a full locale id, splitting off the language
    /// subtag (`"pt-BR"` becomes language `"pt"`, locale `"pt-BR"`).
    pub fn from_locale_id(locale_id: &str) -> Self {
        let language = locale_id
            .split('-')
            .next()
            .unwrap_or(locale_id)
            .to_string();

        Self {
            language,
            locale: locale_id.to_string(),
        }
    }
}
