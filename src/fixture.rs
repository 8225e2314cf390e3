//! Offline content repository reading PostgREST-shaped rows from a JSON file.
//!
//! The file holds an array of `content_sections` rows with their embedded
//! relations and their `status` column. Filtering and ordering mirror what the
//! remote query does (`status = 'active'`, key `ILIKE 'experience_%'`,
//! ascending `sort_order`), so a dump of the table can be dropped in as is.
//! A row without a status is not published.

use crate::content::{ContentSectionRecord, RawContentRow};
use crate::repository::{
    ContentRepository, RepositoryError, ACTIVE_STATUS, EXPERIENCE_KEY_PATTERN,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct FixtureRepository {
    path: PathBuf,
    key_matcher: Regex,
}

impl FixtureRepository {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let key_matcher = ilike_regex(EXPERIENCE_KEY_PATTERN)
            .context("Failed to compile experience key pattern")?;

        Ok(Self {
            path: path.into(),
            key_matcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply the status/key filter and the `sort_order` ordering.
    fn select(&self, records: Vec<ContentSectionRecord>) -> Vec<ContentSectionRecord> {
        let mut selected: Vec<_> = records
            .into_iter()
            .filter(|record| record.status.as_deref() == Some(ACTIVE_STATUS))
            .filter(|record| self.key_matcher.is_match(&record.key))
            .collect();

        // PostgREST puts NULLs last on ascending order
        selected.sort_by_key(|record| (record.sort_order.is_none(), record.sort_order));
        selected
    }
}

#[async_trait]
impl ContentRepository for FixtureRepository {
    fn is_configured(&self) -> bool {
        true
    }

    async fn fetch_experience_rows(&self) -> Result<Vec<RawContentRow>, RepositoryError> {
        debug!("Reading content fixture {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| RepositoryError::Fixture {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        let records: Vec<ContentSectionRecord> = serde_json::from_str(&raw)?;
        let total = records.len();
        let selected = self.select(records);

        info!(
            "Loaded {} of {} fixture rows from {}",
            selected.len(),
            total,
            self.path.display()
        );

        Ok(selected.into_iter().map(RawContentRow::from).collect())
    }
}

/// Translate a SQL `ILIKE` pattern into an anchored, case-insensitive regex.
///
/// `%` matches any run of characters, `_` exactly one; a backslash makes the
/// next character literal.
pub fn ilike_regex(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    let mut translated = String::from("(?is)^");
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '%' => translated.push_str(".*"),
            '_' => translated.push('.'),
            '\\' => {
                if let Some(escaped) = chars.next() {
                    translated.push_str(&regex::escape(&escaped.to_string()));
                }
            }
            other => translated.push_str(&regex::escape(&other.to_string())),
        }
    }

    translated.push('$');
    Regex::new(&translated)
}
