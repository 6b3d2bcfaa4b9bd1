use anyhow::Result;
use async_trait::async_trait;
use reading_sync_core::{Filter, TableClient};
use serde_json::Value;

use crate::error::ClientError;

/// Default timeout for one backend call.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the hosted Supabase (PostgREST) table API.
///
/// Authenticates with the project service key. There is no retry layer:
/// imports are offline/manual and every failure is surfaced to the caller.
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url)
            .field("service_key", &"***")
            .finish()
    }
}

impl SupabaseClient {
    /// Creates a new client for the given project URL and service key.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: String, service_key: String) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url, service_key })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    /// PostgREST encodes filters as query parameters, `column=eq.value` and
    /// `column=is.null`.
    fn query_pairs(filters: &[Filter]) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("select", "*".to_owned())];
        for filter in filters {
            match filter {
                Filter::Eq(column, value) => pairs.push((column, format!("eq.{value}"))),
                Filter::IsNull(column) => pairs.push((column, "is.null".to_owned())),
            }
        }
        pairs
    }

    async fn read_rows(response: reqwest::Response, table: &str) -> Result<Vec<Value>, ClientError> {
        let status = response.status();
        let body = response.text().await.map_err(ClientError::HttpRequest)?;
        if !status.is_success() {
            return Err(ClientError::HttpStatus { code: status.as_u16(), body });
        }
        serde_json::from_str(&body).map_err(|e| ClientError::JsonParse {
            context: format!("rows from '{table}' (body: {})", truncate(&body, 200)),
            source: e,
        })
    }
}

#[async_trait]
impl TableClient for SupabaseClient {
    async fn select(&self, table: &str, filters: &[Filter]) -> Result<Vec<Value>> {
        tracing::debug!(table, ?filters, "select");
        let response = self
            .client
            .get(self.table_url(table))
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .query(&Self::query_pairs(filters))
            .send()
            .await
            .map_err(ClientError::HttpRequest)?;
        Ok(Self::read_rows(response, table).await?)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>> {
        tracing::debug!(table, "insert");
        let response = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(ClientError::HttpRequest)?;
        Ok(Self::read_rows(response, table).await?)
    }
}

/// Truncates a string to the given maximum length at a char boundary.
fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
