// SPDX-License-Identifier: MPL-2.0
//! Static locale source for demo mode and tests.

use crate::application::port::locales::{LocaleSource, LocalesError};
use crate::domain::{Binding, Languages, LocalesQuery};
use futures_util::future::BoxFuture;

/// Serves a fixed locales query without touching the network.
///
/// Used as the app's source when no endpoint is configured, and by tests
/// that need deterministic query results.
pub struct StaticLocaleSource {
    query: LocalesQuery,
}

impl StaticLocaleSource {
    pub fn new(query: LocalesQuery) -> Self {
        Self { query }
    }

    /// Demo storefront catalog: four locales, no binding scope.
    ///
    /// The first supported entry is the protected `en-US` default so the demo
    /// does not auto-correct away from a fresh session.
    pub fn demo_catalog() -> Self {
        Self::new(LocalesQuery {
            languages: Languages {
                default: "en-US".to_string(),
                supported: vec![
                    "en-US".to_string(),
                    "fr-FR".to_string(),
                    "pt-BR".to_string(),
                    "es-AR".to_string(),
                ],
            },
            current_binding: None,
        })
    }

    /// Same catalog narrowed by a binding scope.
    pub fn demo_catalog_with_binding(supported_locales: Vec<String>) -> Self {
        let mut source = Self::demo_catalog();
        source.query.current_binding = Some(Binding { supported_locales });
        source
    }
}

impl LocaleSource for StaticLocaleSource {
    fn fetch(&self) -> BoxFuture<'static, Result<LocalesQuery, LocalesError>> {
        let query = self.query.clone();
        Box::pin(async move { Ok(query) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_catalog_resolves_without_binding() {
        let source = StaticLocaleSource::demo_catalog();
        let query = source.fetch().await.expect("static source cannot fail");

        assert!(query.current_binding.is_none());
        assert_eq!(query.effective_candidates().len(), 4);
        assert_eq!(query.effective_candidates()[0], "en-US");
    }

    #[tokio::test]
    async fn binding_catalog_narrows_candidates() {
        let source = StaticLocaleSource::demo_catalog_with_binding(vec![
            "pt-BR".to_string(),
            "es-AR".to_string(),
        ]);
        let query = source.fetch().await.expect("static source cannot fail");

        assert_eq!(query.effective_candidates(), ["pt-BR", "es-AR"]);
    }
}
