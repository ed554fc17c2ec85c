// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the application layer and
//! the widget only see the trait surface.
//!
//! - [`locales`]: asynchronous supported-locales query
//! - [`events`]: outbound runtime event emission
//!
//! Traits use domain types only. The locale source returns a boxed future so
//! callers can drive it through an Iced `Task` without the port committing to
//! a specific runtime.

pub mod events;
pub mod locales;

pub use events::{EventEmitter, LOCALES_CHANGED};
pub use locales::{LocaleSource, LocalesError};
