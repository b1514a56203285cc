use crate::{ConfigError, ConfigErrorResult, DEFAULT_BACKEND_URL, DEFAULT_PROFILE_TABLE};

use serde::Deserialize;

/// Hosted backend-as-a-service endpoint.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub url: String,
    /// Public (anon) API key sent with every request
    pub api_key: Option<String>,
    /// Directory table holding one row per identity
    pub profile_table: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_BACKEND_URL),
            api_key: None,
            profile_table: String::from(DEFAULT_PROFILE_TABLE),
        }
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("profile_table", &self.profile_table)
            .finish()
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::backend(format!(
                "backend.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        match self.api_key {
            Some(ref key) if !key.trim().is_empty() => {}
            _ => {
                return Err(ConfigError::backend(
                    "Missing backend API key (set backend.api_key or MECH_BACKEND_API_KEY)",
                ));
            }
        }

        if self.profile_table.trim().is_empty() {
            return Err(ConfigError::backend("backend.profile_table cannot be empty"));
        }

        Ok(())
    }
}
