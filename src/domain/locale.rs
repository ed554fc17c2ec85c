// SPDX-License-Identifier: MPL-2.0
//! Locale descriptors and the display-label lookup table.
//!
//! The label table is a static finite mapping from locale codes to the
//! human-readable strings this widget knows how to display. Codes without an
//! entry are treated as unknown and silently dropped from candidate lists.

use crate::domain::Culture;

/// One selectable language/region option.
///
/// `locale_id` is the canonical identifier, `text` the display label resolved
/// through the lookup table. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDescriptor {
    pub text: String,
    pub locale_id: String,
}

impl LocaleDescriptor {
    /// Builds the descriptor shown in the trigger before any query resolves.
    ///
    /// The label is looked up from the bare language subtag, the id is the
    /// full culture locale. Always yields a valid descriptor: unknown
    /// languages fall back to the raw code as label.
    pub fn from_culture(culture: &Culture) -> Self {
        Self {
            text: display_label(&culture.language),
            locale_id: culture.locale.clone(),
        }
    }
}

/// Known locale codes and their display labels.
///
/// Keys are stored lowercase and matched case-insensitively. Bare language
/// subtags alias the storefront's primary region for that language.
const LABELS: &[(&str, &str)] = &[
    ("en", "English (United States)"),
    ("en-us", "English (United States)"),
    ("en-gb", "English (United Kingdom)"),
    ("pt", "Portuguese (Brazil)"),
    ("pt-br", "Portuguese (Brazil)"),
    ("pt-pt", "Portuguese (Portugal)"),
    ("es", "Spanish (Spain)"),
    ("es-es", "Spanish (Spain)"),
    ("es-ar", "Spanish (Argentina)"),
    ("es-mx", "Spanish (Mexico)"),
    ("fr", "French (France)"),
    ("fr-fr", "French (France)"),
    ("fr-ca", "French (Canada)"),
    ("de", "German (Germany)"),
    ("de-de", "German (Germany)"),
    ("it", "Italian (Italy)"),
    ("it-it", "Italian (Italy)"),
    ("nl", "Dutch (Netherlands)"),
    ("nl-nl", "Dutch (Netherlands)"),
    ("da", "Danish (Denmark)"),
    ("da-dk", "Danish (Denmark)"),
    ("sv", "Swedish (Sweden)"),
    ("sv-se", "Swedish (Sweden)"),
    ("nb", "Norwegian (Bokmål)"),
    ("nb-no", "Norwegian (Bokmål)"),
    ("fi", "Finnish (Finland)"),
    ("fi-fi", "Finnish (Finland)"),
    ("pl", "Polish (Poland)"),
    ("pl-pl", "Polish (Poland)"),
    ("cs", "Czech (Czechia)"),
    ("cs-cz", "Czech (Czechia)"),
    ("el", "Greek (Greece)"),
    ("el-gr", "Greek (Greece)"),
    ("ro", "Romanian (Romania)"),
    ("ro-ro", "Romanian (Romania)"),
    ("bg", "Bulgarian (Bulgaria)"),
    ("bg-bg", "Bulgarian (Bulgaria)"),
    ("ru", "Russian (Russia)"),
    ("ru-ru", "Russian (Russia)"),
    ("uk", "Ukrainian (Ukraine)"),
    ("uk-ua", "Ukrainian (Ukraine)"),
    ("tr", "Turkish (Turkey)"),
    ("tr-tr", "Turkish (Turkey)"),
    ("ar", "Arabic (Saudi Arabia)"),
    ("ar-sa", "Arabic (Saudi Arabia)"),
    ("ja", "Japanese (Japan)"),
    ("ja-jp", "Japanese (Japan)"),
    ("ko", "Korean (South Korea)"),
    ("ko-kr", "Korean (South Korea)"),
    ("zh", "Chinese (Simplified)"),
    ("zh-cn", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
    ("th", "Thai (Thailand)"),
    ("th-th", "Thai (Thailand)"),
    ("id", "Indonesian (Indonesia)"),
    ("id-id", "Indonesian (Indonesia)"),
    ("vi", "Vietnamese (Vietnam)"),
    ("vi-vn", "Vietnamese (Vietnam)"),
];

/// Looks up the display label for a locale code.
///
/// Returns `None` for codes outside the table; `None` is the explicit
/// unknown sentinel used by [`filter_supported`].
pub fn resolve_label(locale_code: &str) -> Option<&'static str> {
    LABELS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(locale_code))
        .map(|(_, label)| *label)
}

/// Display label for a code, falling back to the raw code when unknown.
pub fn display_label(locale_code: &str) -> String {
    resolve_label(locale_code)
        .map(str::to_string)
        .unwrap_or_else(|| locale_code.to_string())
}

/// Intersects raw locale codes against the label table.
///
/// Codes without a known label are dropped. Input order is preserved and
/// duplicates are kept.
pub fn filter_supported(raw_codes: &[String]) -> Vec<LocaleDescriptor> {
    raw_codes
        .iter()
        .filter_map(|code| {
            resolve_label(code).map(|label| LocaleDescriptor {
                text: label.to_string(),
                locale_id: code.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn resolve_label_is_case_insensitive() {
        assert_eq!(resolve_label("es-AR"), Some("Spanish (Argentina)"));
        assert_eq!(resolve_label("ES-ar"), Some("Spanish (Argentina)"));
    }

    #[test]
    fn resolve_label_returns_none_for_unknown_code() {
        assert_eq!(resolve_label("xx-XX"), None);
    }

    #[test]
    fn display_label_falls_back_to_raw_code() {
        assert_eq!(display_label("xx-XX"), "xx-XX");
        assert_eq!(display_label("fr-FR"), "French (France)");
    }

    #[test]
    fn bare_language_aliases_primary_region() {
        assert_eq!(display_label("pt"), display_label("pt-BR"));
        assert_eq!(display_label("en"), display_label("en-US"));
    }

    #[test]
    fn filter_supported_drops_unknown_and_preserves_order() {
        let descriptors =
            filter_supported(&codes(&["pt-BR", "xx-XX", "es-AR", "en-US"]));

        let ids: Vec<&str> = descriptors
            .iter()
            .map(|d| d.locale_id.as_str())
            .collect();
        assert_eq!(ids, ["pt-BR", "es-AR", "en-US"]);
        assert_eq!(descriptors[1].text, "Spanish (Argentina)");
    }

    #[test]
    fn filter_supported_never_exceeds_input_length() {
        let input = codes(&["en-US", "en-US", "nope", "fr-FR"]);
        let descriptors = filter_supported(&input);
        assert!(descriptors.len() <= input.len());
        // Duplicates are kept, not collapsed.
        assert_eq!(descriptors.len(), 3);
    }

    #[test]
    fn descriptor_from_culture_uses_language_for_label() {
        let culture = Culture::new("pt", "pt-BR");
        let descriptor = LocaleDescriptor::from_culture(&culture);
        assert_eq!(descriptor.text, "Portuguese (Brazil)");
        assert_eq!(descriptor.locale_id, "pt-BR");
    }
}
