use crate::fixture::FixtureRepository;
use crate::i18n::Language;
use crate::repository::ContentRepository;
use crate::supabase::SupabaseRepository;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Config {
    // Supabase
    pub supabase_url: String,
    pub supabase_anon_key: String,

    // Display
    pub language: Language,

    // Offline content (takes precedence over Supabase when set)
    pub content_fixture: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Missing Supabase credentials are not an error here: the loader reports
    /// them as "not configured" so the section still renders.
    pub fn from_env() -> Result<Self> {
        let language = match std::env::var("PORTFOLIO_LANGUAGE") {
            Ok(code) => Language::from_code(&code)
                .with_context(|| format!("Invalid PORTFOLIO_LANGUAGE '{}'", code))?,
            Err(_) => Language::canonical(),
        };

        Ok(Self {
            supabase_url: std::env::var("SUPABASE_URL").unwrap_or_default(),
            supabase_anon_key: std::env::var("SUPABASE_ANON_KEY").unwrap_or_default(),

            language,

            content_fixture: std::env::var("CONTENT_FIXTURE")
                .ok()
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Build the repository this configuration points at.
    pub fn repository(&self) -> Result<Arc<dyn ContentRepository>> {
        match &self.content_fixture {
            Some(path) => Ok(Arc::new(FixtureRepository::new(path.clone())?)),
            None => Ok(Arc::new(SupabaseRepository::new(
                self.supabase_url.clone(),
                self.supabase_anon_key.clone(),
            ))),
        }
    }
}
