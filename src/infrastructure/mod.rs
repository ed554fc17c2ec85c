// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing the application ports.
//!
//! - [`http`]: locales query against a JSON endpoint (used when an endpoint
//!   is configured)
//! - [`fixture`]: static in-process catalog (demo mode and tests)

pub mod fixture;
pub mod http;

pub use fixture::StaticLocaleSource;
pub use http::HttpLocaleSource;
