// SPDX-License-Identifier: MPL-2.0
//! Supported-locales query port.

use crate::domain::LocalesQuery;
use futures_util::future::BoxFuture;
use std::fmt;

/// Errors surfaced by a locale source.
///
/// The widget does not retry or show these to the shopper; a failed query
/// only suppresses the dropdown list.
#[derive(Debug, Clone)]
pub enum LocalesError {
    /// The request could not be completed (connection, status, timeout).
    Network(String),

    /// The response body was not a valid locales query document.
    Decode(String),
}

impl fmt::Display for LocalesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalesError::Network(msg) => write!(f, "Locales request failed: {msg}"),
            LocalesError::Decode(msg) => write!(f, "Invalid locales response: {msg}"),
        }
    }
}

impl std::error::Error for LocalesError {}

/// Asynchronous source of the supported-locales query.
///
/// `fetch` returns an owned future so the caller can hand it to
/// `Task::perform`; implementations clone whatever they need into it.
pub trait LocaleSource: Send + Sync {
    fn fetch(&self) -> BoxFuture<'static, Result<LocalesQuery, LocalesError>>;
}
