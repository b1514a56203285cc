use crate::{
    AuthConfig, BackendConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILENAME, ConfigError,
    ConfigErrorResult, DirectoryBackend, DirectoryConfig, LoggingConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub directory: DirectoryConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for MECH_CONFIG_DIR env var, else use ./.mech/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply MECH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: MECH_CONFIG_DIR env var > ./.mech/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backend.validate()?;
        self.directory.validate()?;
        self.storage.validate()?;
        self.auth.validate()?;

        Ok(())
    }

    /// Absolute path of the SQLite directory file.
    pub fn directory_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.directory.path))
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  backend: {} (api key {}, table '{}')",
            self.backend.url,
            if self.backend.api_key.is_some() {
                "set"
            } else {
                "missing"
            },
            self.backend.profile_table
        );

        match self.directory.backend {
            DirectoryBackend::Remote => info!("  directory: remote"),
            DirectoryBackend::Sqlite => info!("  directory: sqlite ({})", self.directory.path),
        }

        info!(
            "  storage: bucket={}, ext={}, type={}",
            self.storage.bucket, self.storage.file_extension, self.storage.content_type
        );

        info!(
            "  auth: session verification {}",
            if self.auth.jwt_secret.is_some() {
                "HS256"
            } else {
                "off"
            }
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Backend
        Self::apply_env_string("MECH_BACKEND_URL", &mut self.backend.url);
        Self::apply_env_option_string("MECH_BACKEND_API_KEY", &mut self.backend.api_key);
        Self::apply_env_string("MECH_PROFILE_TABLE", &mut self.backend.profile_table);

        // Directory
        Self::apply_env_parse("MECH_DIRECTORY_BACKEND", &mut self.directory.backend)?;
        Self::apply_env_string("MECH_DIRECTORY_PATH", &mut self.directory.path);

        // Storage
        Self::apply_env_string("MECH_STORAGE_BUCKET", &mut self.storage.bucket);
        Self::apply_env_string(
            "MECH_STORAGE_FILE_EXTENSION",
            &mut self.storage.file_extension,
        );
        Self::apply_env_string("MECH_STORAGE_CONTENT_TYPE", &mut self.storage.content_type);

        // Auth
        Self::apply_env_option_string("MECH_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("MECH_AUTH_JWT_AUDIENCE", &mut self.auth.jwt_audience);

        // Logging
        Self::apply_env_parse("MECH_LOG_LEVEL", &mut self.logging.level)?;
        Self::apply_env_bool("MECH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MECH_LOG_FILE", &mut self.logging.file);

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// A value that does not parse fails the load instead of keeping the file setting.
    #[track_caller]
    fn apply_env_parse<T>(var_name: &str, target: &mut T) -> ConfigErrorResult<()>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .parse()
                .map_err(|e| ConfigError::config(format!("{var_name}: {e}")))?;
        }
        Ok(())
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
