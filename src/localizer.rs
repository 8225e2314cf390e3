//! Turns normalized content rows into render-ready experience view models.
//!
//! Everything here is pure and synchronous; fetching and state handling live in
//! [`loader`](crate::loader).

use crate::content::{FieldFamily, RawContentRow};
use crate::i18n::Language;
use serde::{Deserialize, Serialize};

/// One experience card, fully resolved for a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceViewModel {
    pub period: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    pub description: String,
    pub skills: Vec<String>,
}

/// Resolve one localized field.
///
/// Order: the requested language, then the canonical language, then the base
/// column, then `""`.
pub fn resolve_localized_field(row: &RawContentRow, field: FieldFamily, language: Language) -> String {
    let text = row.field(field);
    text.variant(language)
        .or_else(|| text.variant(Language::canonical()))
        .or_else(|| text.base())
        .unwrap_or_default()
        .to_string()
}

/// Skill chips for a row: highlights by their own sort order, else tags.
pub fn derive_skills(row: &RawContentRow) -> Vec<String> {
    if !row.highlights.is_empty() {
        let mut highlights: Vec<_> = row.highlights.iter().collect();
        // sort_by_key is stable, equal keys keep input order
        highlights.sort_by_key(|h| h.sort_order);
        return highlights.into_iter().map(|h| h.text.clone()).collect();
    }

    row.tags.clone()
}

pub fn map_row_to_view_model(row: &RawContentRow, language: Language) -> ExperienceViewModel {
    let focus = resolve_localized_field(row, FieldFamily::Subtitle, language);

    ExperienceViewModel {
        period: row.time_range.clone().unwrap_or_default(),
        role: resolve_localized_field(row, FieldFamily::Title, language),
        focus: (!focus.is_empty()).then_some(focus),
        description: resolve_localized_field(row, FieldFamily::Body, language),
        skills: derive_skills(row),
    }
}

/// Map every row, preserving repository order.
pub fn localize_rows(rows: &[RawContentRow], language: Language) -> Vec<ExperienceViewModel> {
    rows.iter()
        .map(|row| map_row_to_view_model(row, language))
        .collect()
}
