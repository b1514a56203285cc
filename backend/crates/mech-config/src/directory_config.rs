use crate::{ConfigError, ConfigErrorResult, DEFAULT_DIRECTORY_FILENAME};

use std::str::FromStr;

use serde::Deserialize;

/// Where profile rows are looked up and written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryBackend {
    /// The hosted backend's relational rows
    #[default]
    Remote,
    /// A local SQLite file under the config directory
    Sqlite,
}

impl FromStr for DirectoryBackend {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(ConfigError::directory(format!(
                "unknown directory backend '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub backend: DirectoryBackend,
    /// SQLite file, relative to the config directory
    pub path: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            backend: DirectoryBackend::default(),
            path: String::from(DEFAULT_DIRECTORY_FILENAME),
        }
    }
}

impl DirectoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.path);
        if path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::directory(
                "directory.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
