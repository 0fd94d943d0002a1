use std::time::Duration;

use async_trait::async_trait;

use super::{VocabEntry, VocabularyStore};
use crate::error::AppError;

const SELECT_COLUMNS: &str = "id,word,translation,audio_link,image_link";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Vocabulary table behind a PostgREST endpoint (e.g. a Supabase project).
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl RestStore {
    pub fn new(base_url: &str, api_key: &str, table: &str) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::UpstreamUnavailable(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl VocabularyStore for RestStore {
    async fn list_all(&self) -> Result<Vec<VocabEntry>, AppError> {
        let url = self.table_url();

        let response = self
            .client
            .get(&url)
            .query(&[("select", SELECT_COLUMNS)])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamUnavailable(format!(
                "{} returned {}",
                url, status
            )));
        }

        let entries: Vec<VocabEntry> = response.json().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!("Invalid response from {}: {}", url, e))
        })?;

        tracing::debug!("Fetched {} entries from table {}", entries.len(), self.table);

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::EntryId;
    use axum::{
        extract::Query,
        http::{HeaderMap, StatusCode},
        routing::get,
        Json, Router,
    };
    use std::collections::HashMap;
    use std::net::SocketAddr;

    async fn spawn_upstream(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    async fn flashcards(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> Result<Json<serde_json::Value>, StatusCode> {
        if headers.get("apikey").map(|v| v.as_bytes()) != Some(b"secret".as_slice()) {
            return Err(StatusCode::UNAUTHORIZED);
        }
        if headers.get("authorization").map(|v| v.as_bytes()) != Some(b"Bearer secret".as_slice())
        {
            return Err(StatusCode::UNAUTHORIZED);
        }
        if params.get("select").map(String::as_str) != Some(SELECT_COLUMNS) {
            return Err(StatusCode::BAD_REQUEST);
        }
        Ok(Json(serde_json::json!([
            {
                "id": "0b6c",
                "word": "juice",
                "translation": "果汁",
                "audio_link": "https://cdn.example/audio/0b6c.mp3",
                "image_link": "https://cdn.example/images/0b6c.gif"
            }
        ])))
    }

    #[tokio::test]
    async fn test_fetches_table_rows() {
        let addr = spawn_upstream(Router::new().route("/rest/v1/flashcards", get(flashcards))).await;

        let store = RestStore::new(&format!("http://{}/", addr), "secret", "flashcards").unwrap();
        let entries = store.list_all().await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, EntryId::from("0b6c"));
        assert_eq!(entries[0].translation, "果汁");
    }

    #[tokio::test]
    async fn test_rejected_key_is_upstream_error() {
        let addr = spawn_upstream(Router::new().route("/rest/v1/flashcards", get(flashcards))).await;

        let store = RestStore::new(&format!("http://{}", addr), "wrong", "flashcards").unwrap();
        let err = store.list_all().await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_unreachable_is_upstream_error() {
        // Bind then drop so the port is very likely closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = RestStore::new(&format!("http://{}", addr), "secret", "flashcards").unwrap();
        let err = store.list_all().await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
    }

    #[test]
    fn test_table_url_trims_slash() {
        let store = RestStore::new("https://proj.supabase.co/", "k", "flashcards").unwrap();
        assert_eq!(store.table_url(), "https://proj.supabase.co/rest/v1/flashcards");
    }
}
