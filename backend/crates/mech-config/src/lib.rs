mod auth_config;
mod backend_config;
mod config;
mod directory_config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use backend_config::BackendConfig;
pub use config::Config;
pub use directory_config::{DirectoryBackend, DirectoryConfig};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_PROFILE_TABLE: &str = "User";
const DEFAULT_DIRECTORY_FILENAME: &str = "directory.db";
const DEFAULT_STORAGE_BUCKET: &str = "mechanics-uploads-bucket";
const DEFAULT_FILE_EXTENSION: &str = "mp4";
const DEFAULT_CONTENT_TYPE: &str = "video/mp4";
const DEFAULT_JWT_AUDIENCE: &str = "authenticated";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const CONFIG_DIR_ENV: &str = "MECH_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".mech";
const CONFIG_FILENAME: &str = "config.toml";

/// HS256 secrets shorter than this are rejected at startup
const MIN_JWT_SECRET_LENGTH: usize = 32;
