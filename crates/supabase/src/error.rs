//! Typed error enum for the Supabase client.

use thiserror::Error;

/// Errors from PostgREST table operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}
