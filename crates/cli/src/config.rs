//! Environment configuration for the CLI.

use thiserror::Error;

/// A required environment variable is absent or empty.
#[derive(Debug, Error)]
#[error("Missing {0} environment variable")]
pub struct ConfigError(pub &'static str);

/// Backend endpoint and credentials, read once at startup.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub supabase_url: String,
    pub service_key: String,
}

impl SyncConfig {
    /// Load from `SUPABASE_URL` and `SUPABASE_SERVICE_KEY`, failing fast
    /// when either is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            supabase_url: require("SUPABASE_URL")?,
            service_key: require("SUPABASE_SERVICE_KEY")?,
        })
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError(var)),
    }
}
