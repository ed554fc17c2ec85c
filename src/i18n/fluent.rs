// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle loading and chrome string lookup.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Translations;

const DEFAULT_LOCALE: &str = "en-US";

/// Chrome localization state: one Fluent bundle per embedded locale.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads all embedded bundles and resolves the startup locale from the
    /// CLI override, then the config file, then the OS locale, falling back
    /// to `en-US`.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Translations::iter() {
            let Some(locale) = parse_bundle_locale(file.as_ref()) else {
                continue;
            };
            let Some(content) = Translations::get(file.as_ref()) else {
                continue;
            };

            match build_bundle(&locale, content.data.as_ref()) {
                Some(bundle) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                None => eprintln!("Skipping unparsable translation bundle: {}", file.as_ref()),
            }
        }

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| default_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
        }
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches the chrome locale when a bundle for it exists; otherwise the
    /// current locale is kept.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Resolves a chrome string, falling back to the default bundle and
    /// finally to the key itself.
    pub fn tr(&self, key: &str) -> String {
        self.format(&self.current_locale, key)
            .or_else(|| self.format(&self.default_locale, key))
            .unwrap_or_else(|| key.to_string())
    }

    fn format(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }
}

fn parse_bundle_locale(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn build_bundle(
    locale: &LanguageIdentifier,
    content: &[u8],
) -> Option<FluentBundle<FluentResource>> {
    let source = String::from_utf8_lossy(content).to_string();
    let resource = FluentResource::try_new(source).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.add_resource(resource).ok()?;
    Some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = cli_lang
        .into_iter()
        .chain(config.language.clone())
        .chain(sys_locale::get_locale());

    for candidate in candidates {
        if let Ok(locale) = candidate.parse::<LanguageIdentifier>() {
            if available.contains(&locale) {
                return Some(locale);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_override_wins_over_config() {
        let config = Config {
            language: Some("fr-FR".to_string()),
            ..Config::default()
        };
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr-FR".parse().unwrap(), "pt-BR".parse().unwrap()];

        let locale = resolve_locale(Some("pt-BR".to_string()), &config, &available);
        assert_eq!(locale, Some("pt-BR".parse().unwrap()));
    }

    #[test]
    fn config_language_used_without_cli_override() {
        let config = Config {
            language: Some("fr-FR".to_string()),
            ..Config::default()
        };
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr-FR".parse().unwrap()];

        let locale = resolve_locale(None, &config, &available);
        assert_eq!(locale, Some("fr-FR".parse().unwrap()));
    }

    #[test]
    fn unavailable_candidates_are_skipped() {
        let config = Config {
            language: Some("xx-XX".to_string()),
            ..Config::default()
        };
        let available: Vec<LanguageIdentifier> = vec!["en-US".parse().unwrap()];

        // "xx-XX" parses but has no bundle; the resolver moves past it.
        let locale = resolve_locale(None, &config, &available);
        assert_ne!(locale, Some("xx-XX".parse().unwrap()));
    }

    #[test]
    fn embedded_bundles_load_and_translate() {
        let i18n = I18n::default();
        assert!(i18n
            .available_locales()
            .contains(&"en-US".parse().unwrap()));
        assert_ne!(i18n.tr("window-title"), "window-title");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "no-such-key");
    }

    #[test]
    fn set_locale_ignores_locales_without_bundle() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();
        i18n.set_locale("xx-XX".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }
}
