//! Language type: validated language representation.
//!
//! A `Language` can only be built from a code present in the registry, and it
//! wraps a closed [`LanguageCode`], so content lookups match exhaustively
//! instead of by string.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// Languages the content tables carry columns for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    En,
    Es,
    Fr,
    De,
}

impl LanguageCode {
    /// ISO 639-1 code, also the column suffix in `content_sections`.
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
            LanguageCode::De => "de",
        }
    }
}

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: LanguageCode,
}

impl Language {
    pub const ENGLISH: Language = Language {
        code: LanguageCode::En,
    };
    pub const SPANISH: Language = Language {
        code: LanguageCode::Es,
    };
    pub const FRENCH: Language = Language {
        code: LanguageCode::Fr,
    };
    pub const GERMAN: Language = Language {
        code: LanguageCode::De,
    };

    /// Create a Language from a language code string.
    ///
    /// Leading/trailing whitespace and ASCII case are ignored, so `" ES "`
    /// resolves to Spanish.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err` naming the supported codes otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        let normalized = code.trim().to_ascii_lowercase();
        let registry = LanguageRegistry::get();

        match registry.get_by_code(&normalized) {
            Some(config) => Ok(Language {
                code: config.language,
            }),
            None => {
                let supported: Vec<_> = registry.list().iter().map(|lang| lang.code()).collect();
                bail!(
                    "Unknown language code: '{}' (supported: {})",
                    code,
                    supported.join(", ")
                )
            }
        }
    }

    /// Get the canonical language (the universal content fallback).
    pub fn canonical() -> Language {
        Language {
            code: LanguageRegistry::get().canonical().language,
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code.as_str()
    }

    /// The closed code, for exhaustive matches over language slots.
    pub fn language_code(&self) -> LanguageCode {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code())
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// UI strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        LanguageStrings::for_language(*self)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
