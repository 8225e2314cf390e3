//! Content rows as delivered by the content store.
//!
//! [`ContentSectionRecord`] mirrors the PostgREST JSON shape of a
//! `content_sections` row with its embedded relations. It is converted into a
//! [`RawContentRow`] exactly once, at the repository boundary; that conversion
//! is the only place where empty strings and nulls are folded into `None`.

use crate::i18n::{Language, LanguageCode};
use serde::{Deserialize, Serialize};

/// Opaque row identifier. Supabase serializes bigint ids as numbers, uuid ids
/// as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl Default for RowId {
    fn default() -> Self {
        RowId::Int(0)
    }
}

/// The localized column families of a content row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldFamily {
    Title,
    Subtitle,
    Body,
}

/// One localized field: an untagged base value plus one slot per supported
/// language. `None` means "no usable content".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    pub base: Option<String>,
    pub en: Option<String>,
    pub es: Option<String>,
    pub fr: Option<String>,
    pub de: Option<String>,
}

impl LocalizedText {
    /// Text with only a base value.
    pub fn base_only(text: impl Into<String>) -> Self {
        Self {
            base: present(Some(text.into())),
            ..Self::default()
        }
    }

    /// Builder-style setter for one language slot. Empty text clears the slot.
    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        *self.slot_mut(language.language_code()) = present(Some(text.into()));
        self
    }

    /// Value stored for `language`, if any.
    pub fn variant(&self, language: Language) -> Option<&str> {
        let slot = match language.language_code() {
            LanguageCode::En => &self.en,
            LanguageCode::Es => &self.es,
            LanguageCode::Fr => &self.fr,
            LanguageCode::De => &self.de,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, code: LanguageCode) -> &mut Option<String> {
        match code {
            LanguageCode::En => &mut self.en,
            LanguageCode::Es => &mut self.es,
            LanguageCode::Fr => &mut self.fr,
            LanguageCode::De => &mut self.de,
        }
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }
}

/// A bespoke, manually ordered bullet point attached to a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub text: String,
    pub sort_order: i64,
}

impl Highlight {
    pub fn new(text: impl Into<String>, sort_order: i64) -> Self {
        Self {
            text: text.into(),
            sort_order,
        }
    }
}

/// A normalized experience row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContentRow {
    pub id: RowId,
    pub key: String,
    pub time_range: Option<String>,
    pub title: LocalizedText,
    pub subtitle: LocalizedText,
    pub body: LocalizedText,
    pub sort_order: i64,
    /// Empty when the row has no bespoke highlight list.
    pub highlights: Vec<Highlight>,
    /// Tag names in repository order, never empty strings.
    pub tags: Vec<String>,
}

impl RawContentRow {
    pub fn field(&self, family: FieldFamily) -> &LocalizedText {
        match family {
            FieldFamily::Title => &self.title,
            FieldFamily::Subtitle => &self.subtitle,
            FieldFamily::Body => &self.body,
        }
    }
}

// ==================== Wire Format ====================

/// `section_highlights ( text, sort_order )`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighlightRecord {
    pub text: Option<String>,
    pub sort_order: Option<i64>,
}

/// `section_tags ( name )`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagRecord {
    pub name: Option<String>,
}

/// One entry of the `content_section_tags` join table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagLinkRecord {
    pub section_tags: Option<TagRecord>,
}

/// A `content_sections` row as returned by PostgREST.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSectionRecord {
    #[serde(default)]
    pub id: RowId,
    pub key: String,
    /// Only present in fixture files; the remote query filters on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub time_range: Option<String>,
    pub sort_order: Option<i64>,

    pub title: Option<String>,
    pub title_en: Option<String>,
    pub title_es: Option<String>,
    pub title_fr: Option<String>,
    pub title_de: Option<String>,

    pub subtitle: Option<String>,
    pub subtitle_en: Option<String>,
    pub subtitle_es: Option<String>,
    pub subtitle_fr: Option<String>,
    pub subtitle_de: Option<String>,

    pub body: Option<String>,
    pub body_en: Option<String>,
    pub body_es: Option<String>,
    pub body_fr: Option<String>,
    pub body_de: Option<String>,

    pub section_highlights: Option<Vec<HighlightRecord>>,
    pub content_section_tags: Option<Vec<TagLinkRecord>>,
}

/// Treat the empty string as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<ContentSectionRecord> for RawContentRow {
    fn from(record: ContentSectionRecord) -> Self {
        let highlights = record
            .section_highlights
            .unwrap_or_default()
            .into_iter()
            .map(|h| Highlight {
                text: h.text.unwrap_or_default(),
                // Unordered highlights go after the ordered ones
                sort_order: h.sort_order.unwrap_or(i64::MAX),
            })
            .collect();

        let tags = record
            .content_section_tags
            .unwrap_or_default()
            .into_iter()
            .filter_map(|link| present(link.section_tags.and_then(|tag| tag.name)))
            .collect();

        RawContentRow {
            id: record.id,
            key: record.key,
            time_range: present(record.time_range),
            title: LocalizedText {
                base: present(record.title),
                en: present(record.title_en),
                es: present(record.title_es),
                fr: present(record.title_fr),
                de: present(record.title_de),
            },
            subtitle: LocalizedText {
                base: present(record.subtitle),
                en: present(record.subtitle_en),
                es: present(record.subtitle_es),
                fr: present(record.subtitle_fr),
                de: present(record.subtitle_de),
            },
            body: LocalizedText {
                base: present(record.body),
                en: present(record.body_en),
                es: present(record.body_es),
                fr: present(record.body_fr),
                de: present(record.body_de),
            },
            sort_order: record.sort_order.unwrap_or_default(),
            highlights,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_postgrest_row() {
        let json = r#"{
            "id": 7,
            "key": "experience_1",
            "title": "Engineer",
            "title_es": "Ingeniero",
            "subtitle": null,
            "time_range": "2020-2022",
            "body": "Built things",
            "sort_order": 1,
            "section_highlights": [{"text": "Go", "sort_order": 2}],
            "content_section_tags": [{"section_tags": {"name": "rust"}}]
        }"#;

        let record: ContentSectionRecord = serde_json::from_str(json).expect("deserialize");
        let row = RawContentRow::from(record);

        assert_eq!(row.id, RowId::Int(7));
        assert_eq!(row.title.base(), Some("Engineer"));
        assert_eq!(row.title.variant(Language::SPANISH), Some("Ingeniero"));
        assert_eq!(row.subtitle, LocalizedText::default());
        assert_eq!(row.highlights, vec![Highlight::new("Go", 2)]);
        assert_eq!(row.tags, vec!["rust".to_string()]);
    }

    #[test]
    fn test_text_ids_are_accepted() {
        let record: ContentSectionRecord =
            serde_json::from_str(r#"{"id": "a1b2", "key": "experience_x"}"#).expect("deserialize");
        assert_eq!(record.id, RowId::Text("a1b2".to_string()));
    }

    #[test]
    fn test_empty_strings_normalize_to_none() {
        let record = ContentSectionRecord {
            key: "experience_1".to_string(),
            time_range: Some(String::new()),
            title: Some(String::new()),
            title_en: Some("Engineer".to_string()),
            body_de: Some(String::new()),
            ..Default::default()
        };

        let row = RawContentRow::from(record);

        assert_eq!(row.time_range, None);
        assert_eq!(row.title.base(), None);
        assert_eq!(row.title.variant(Language::ENGLISH), Some("Engineer"));
        assert_eq!(row.body.variant(Language::GERMAN), None);
    }

    #[test]
    fn test_tags_drop_missing_and_empty_names() {
        let record = ContentSectionRecord {
            key: "experience_1".to_string(),
            content_section_tags: Some(vec![
                TagLinkRecord {
                    section_tags: Some(TagRecord {
                        name: Some("react".to_string()),
                    }),
                },
                TagLinkRecord { section_tags: None },
                TagLinkRecord {
                    section_tags: Some(TagRecord {
                        name: Some(String::new()),
                    }),
                },
                TagLinkRecord {
                    section_tags: Some(TagRecord { name: None }),
                },
                TagLinkRecord {
                    section_tags: Some(TagRecord {
                        name: Some("node".to_string()),
                    }),
                },
            ]),
            ..Default::default()
        };

        let row = RawContentRow::from(record);
        assert_eq!(row.tags, vec!["react".to_string(), "node".to_string()]);
    }

    #[test]
    fn test_highlight_without_sort_order_sorts_last() {
        let record = ContentSectionRecord {
            key: "experience_1".to_string(),
            section_highlights: Some(vec![HighlightRecord {
                text: Some("Unordered".to_string()),
                sort_order: None,
            }]),
            ..Default::default()
        };

        let row = RawContentRow::from(record);
        assert_eq!(row.highlights[0].sort_order, i64::MAX);
    }

    #[test]
    fn test_localized_text_builder() {
        let text = LocalizedText::base_only("Engineer")
            .with(Language::FRENCH, "Ingénieur")
            .with(Language::GERMAN, "");

        assert_eq!(text.base(), Some("Engineer"));
        assert_eq!(text.variant(Language::FRENCH), Some("Ingénieur"));
        assert_eq!(text.variant(Language::GERMAN), None);
    }

    #[test]
    fn test_every_language_has_its_own_slot() {
        let languages = [
            Language::ENGLISH,
            Language::SPANISH,
            Language::FRENCH,
            Language::GERMAN,
        ];
        let text = languages
            .iter()
            .fold(LocalizedText::default(), |text, lang| text.with(*lang, lang.code()));

        for lang in languages {
            assert_eq!(text.variant(lang), Some(lang.code()));
        }
        assert_eq!(text.base(), None);
    }
}
