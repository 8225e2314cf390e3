//! Internationalization (i18n) for the experience section.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` type and the closed `LanguageCode` set
//! - `strings`: Localized UI strings and the `t(key)` lookup
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_content::i18n::{Language, LanguageRegistry};
//!
//! let spanish = Language::from_code("es")?;
//! let heading = spanish.strings().t("experience");
//!
//! let languages = LanguageRegistry::get().list();
//! ```

mod language;
mod registry;
mod strings;

pub use language::{Language, LanguageCode};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
