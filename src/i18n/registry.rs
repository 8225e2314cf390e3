//! Language registry: Single source of truth for all supported languages.
//!
//! Every entry names a [`LanguageCode`], and every `LanguageCode` has a slot in
//! [`LocalizedText`](crate::content::LocalizedText) and a string table in
//! [`strings`](super::strings); adding a language without them does not
//! compile. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use crate::i18n::LanguageCode;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Which content slot and string table this language uses
    pub language: LanguageCode,

    /// English name of the language (e.g., "English", "Spanish", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español", "Français")
    pub native_name: &'static str,

    /// Whether this is the canonical language, the one every content row is
    /// expected to carry (only one should be true)
    pub is_canonical: bool,
}

impl LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "es")
    pub fn code(&self) -> &'static str {
        self.language.as_str()
    }
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Codes are matched exactly; callers normalize case beforehand.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code() == code)
    }

    /// All languages, in registry order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// Languages the content tables carry columns for.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: LanguageCode::En,
            name: "English",
            native_name: "English",
            is_canonical: true,
        },
        LanguageConfig {
            language: LanguageCode::Es,
            name: "Spanish",
            native_name: "Español",
            is_canonical: false,
        },
        LanguageConfig {
            language: LanguageCode::Fr,
            name: "French",
            native_name: "Français",
            is_canonical: false,
        },
        LanguageConfig {
            language: LanguageCode::De,
            name: "German",
            native_name: "Deutsch",
            is_canonical: false,
        },
    ]
}
