// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the supported-locales query.

use crate::application::port::locales::{LocaleSource, LocalesError};
use crate::domain::LocalesQuery;
use futures_util::future::BoxFuture;

/// Fetches the locales query from a JSON endpoint.
///
/// The optional binding id is passed as a `binding` query parameter so the
/// endpoint can scope the `currentBinding` object it returns.
pub struct HttpLocaleSource {
    endpoint: String,
    binding: Option<String>,
    client: reqwest::Client,
}

impl HttpLocaleSource {
    pub fn new(endpoint: impl Into<String>, binding: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            binding,
            client: reqwest::Client::new(),
        }
    }
}

impl LocaleSource for HttpLocaleSource {
    fn fetch(&self) -> BoxFuture<'static, Result<LocalesQuery, LocalesError>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let binding = self.binding.clone();

        Box::pin(async move {
            let mut request = client.get(&endpoint);
            if let Some(binding) = &binding {
                request = request.query(&[("binding", binding.as_str())]);
            }

            let response = request
                .send()
                .await
                .and_then(|response| response.error_for_status())
                .map_err(|err| LocalesError::Network(err.to_string()))?;

            let body = response
                .text()
                .await
                .map_err(|err| LocalesError::Network(err.to_string()))?;

            serde_json::from_str::<LocalesQuery>(&body)
                .map_err(|err| LocalesError::Decode(err.to_string()))
        })
    }
}
