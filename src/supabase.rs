//! Supabase adapter: reads experience rows through the PostgREST API.
//!
//! One `GET {url}/rest/v1/content_sections` request per load, authenticated
//! with the anon key as both `apikey` and bearer token. Filtering (`status`,
//! `key ILIKE`) and ordering happen server side; errors carry the store's own
//! `message` when it sends one.

use crate::content::{ContentSectionRecord, RawContentRow};
use crate::repository::{
    ContentRepository, RepositoryError, ACTIVE_STATUS, EXPERIENCE_KEY_PATTERN,
};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

/// Columns requested from `content_sections`, including embedded relations.
pub const SELECT_COLUMNS: &str = "id,key,title,subtitle,time_range,body,\
title_en,title_es,title_fr,title_de,\
subtitle_en,subtitle_es,subtitle_fr,subtitle_de,\
body_en,body_es,body_fr,body_de,\
sort_order,\
section_highlights(text,sort_order),\
content_section_tags(section_tags(name))";

/// Message used when the store fails without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to load experiences";

/// PostgREST error payload
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    message: Option<String>,
}

/// Content repository backed by a Supabase project's REST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseRepository {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseRepository {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, anon_key)
    }

    /// Reuse an existing HTTP client (shares its connection pool).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/content_sections", self.base_url)
    }
}

#[async_trait]
impl ContentRepository for SupabaseRepository {
    fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.anon_key.is_empty()
    }

    async fn fetch_experience_rows(&self) -> Result<Vec<RawContentRow>, RepositoryError> {
        debug!("Querying {} for experience rows", self.table_url());

        let response = self
            .client
            .get(self.table_url())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
            .query(&[
                ("select", SELECT_COLUMNS.to_string()),
                ("status", format!("eq.{}", ACTIVE_STATUS)),
                ("key", format!("ilike.{}", EXPERIENCE_KEY_PATTERN)),
                ("order", "sort_order.asc".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RepositoryError::Store {
                message: store_error_message(status, &body),
            });
        }

        let records: Vec<ContentSectionRecord> = serde_json::from_str(&body)?;
        info!("Fetched {} experience rows from Supabase", records.len());

        Ok(records.into_iter().map(RawContentRow::from).collect())
    }
}

/// Pick the message to show for a failed store response.
fn store_error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(StoreErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<StoreErrorBody>(body)
    {
        if !message.is_empty() {
            return message;
        }
    }

    let body = body.trim();
    if body.is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        format!("Content store error ({}): {}", status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RowId;
    use reqwest::StatusCode;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Helper Functions ====================

    fn sample_rows() -> serde_json::Value {
        serde_json::json!([
            {
                "id": 1,
                "key": "experience_1",
                "title": "Engineer",
                "title_es": "Ingeniero",
                "subtitle": null,
                "time_range": "2020-2022",
                "body": "Built APIs",
                "sort_order": 1,
                "section_highlights": [
                    {"text": "Go", "sort_order": 2},
                    {"text": "Rust", "sort_order": 1}
                ],
                "content_section_tags": []
            },
            {
                "id": 2,
                "key": "experience_2",
                "title": "Lead",
                "time_range": null,
                "body": "",
                "sort_order": 2,
                "section_highlights": [],
                "content_section_tags": [{"section_tags": {"name": "Leadership"}}]
            }
        ])
    }

    // ==================== store_error_message Tests ====================

    #[test]
    fn test_store_error_message_uses_postgrest_message() {
        let body = r#"{"code":"42P01","details":null,"hint":null,"message":"relation does not exist"}"#;
        assert_eq!(
            store_error_message(StatusCode::NOT_FOUND, body),
            "relation does not exist"
        );
    }

    #[test]
    fn test_store_error_message_plain_body() {
        let message = store_error_message(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(message.contains("502"));
        assert!(message.contains("upstream down"));
    }

    #[test]
    fn test_store_error_message_empty_body_uses_fallback() {
        assert_eq!(
            store_error_message(StatusCode::INTERNAL_SERVER_ERROR, "  "),
            FALLBACK_ERROR_MESSAGE
        );
    }

    // ==================== is_configured Tests ====================

    #[test]
    fn test_is_configured_requires_url_and_key() {
        assert!(SupabaseRepository::new("https://x.supabase.co", "anon").is_configured());
        assert!(!SupabaseRepository::new("", "anon").is_configured());
        assert!(!SupabaseRepository::new("https://x.supabase.co", "").is_configured());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let repo = SupabaseRepository::new("https://x.supabase.co/", "anon");
        assert_eq!(repo.table_url(), "https://x.supabase.co/rest/v1/content_sections");
    }

    // ==================== fetch_experience_rows Tests ====================

    #[tokio::test]
    async fn test_fetch_sends_documented_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/content_sections"))
            .and(header("apikey", "test-anon-key"))
            .and(header("Authorization", "Bearer test-anon-key"))
            .and(query_param("select", SELECT_COLUMNS))
            .and(query_param("status", "eq.active"))
            .and(query_param("key", "ilike.experience_%"))
            .and(query_param("order", "sort_order.asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_rows()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let repo = SupabaseRepository::new(mock_server.uri(), "test-anon-key");
        let rows = repo.fetch_experience_rows().await.expect("Should fetch");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, RowId::Int(1));
        assert_eq!(rows[0].highlights.len(), 2);
        assert_eq!(rows[1].time_range, None);
        assert_eq!(rows[1].body.base(), None);
        assert_eq!(rows[1].tags, vec!["Leadership".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_empty_array_is_ok() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/content_sections"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let repo = SupabaseRepository::new(mock_server.uri(), "test-anon-key");
        let rows = repo.fetch_experience_rows().await.expect("Should fetch");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_maps_store_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/content_sections"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Invalid API key",
                "hint": "Double check your Supabase `anon` or `service_role` API key."
            })))
            .mount(&mock_server)
            .await;

        let repo = SupabaseRepository::new(mock_server.uri(), "bad-key");
        let err = repo.fetch_experience_rows().await.unwrap_err();

        assert!(matches!(err, RepositoryError::Store { .. }));
        assert_eq!(err.to_string(), "Invalid API key");
    }

    #[tokio::test]
    async fn test_fetch_maps_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/content_sections"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"rows\"}"))
            .mount(&mock_server)
            .await;

        let repo = SupabaseRepository::new(mock_server.uri(), "test-anon-key");
        let err = repo.fetch_experience_rows().await.unwrap_err();

        assert!(matches!(err, RepositoryError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_maps_transport_error() {
        // Nothing listens on port 9 (discard) in the test environment
        let repo = SupabaseRepository::new("http://127.0.0.1:9", "test-anon-key");
        let err = repo.fetch_experience_rows().await.unwrap_err();

        assert!(matches!(err, RepositoryError::Transport(_)));
    }
}
