use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONTENT_TYPE, DEFAULT_FILE_EXTENSION,
    DEFAULT_STORAGE_BUCKET,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub bucket: String,
    /// Without the leading dot
    pub file_extension: String,
    pub content_type: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: String::from(DEFAULT_STORAGE_BUCKET),
            file_extension: String::from(DEFAULT_FILE_EXTENSION),
            content_type: String::from(DEFAULT_CONTENT_TYPE),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.bucket.trim().is_empty() {
            return Err(ConfigError::storage("storage.bucket cannot be empty"));
        }

        if self.file_extension.is_empty() || self.file_extension.starts_with('.') {
            return Err(ConfigError::storage(
                "storage.file_extension must be non-empty and given without the leading '.'",
            ));
        }

        if !self.content_type.contains('/') {
            return Err(ConfigError::storage(format!(
                "storage.content_type must be a MIME type, got '{}'",
                self.content_type
            )));
        }

        Ok(())
    }
}
