// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure data model, no Iced or network types.
//!
//! - [`culture`]: the host session's current language+region pair
//! - [`locale`]: selectable locale descriptors and the display-label table
//! - [`query`]: the supported-locales query shape and candidate precedence

pub mod culture;
pub mod locale;
pub mod query;

pub use culture::Culture;
pub use locale::{display_label, filter_supported, resolve_label, LocaleDescriptor};
pub use query::{Binding, Languages, LocalesQuery};
