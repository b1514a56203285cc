use crate::{ConfigError, ConfigErrorResult, DEFAULT_JWT_AUDIENCE, MIN_JWT_SECRET_LENGTH};

use serde::Deserialize;

/// Local verification of session tokens issued by the credential service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 secret shared with the credential service; verification is skipped when unset
    pub jwt_secret: Option<String>,
    pub jwt_audience: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_audience: String::from(DEFAULT_JWT_AUDIENCE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref secret) = self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} bytes",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.jwt_audience.trim().is_empty() {
            return Err(ConfigError::auth("auth.jwt_audience cannot be empty"));
        }

        Ok(())
    }
}
