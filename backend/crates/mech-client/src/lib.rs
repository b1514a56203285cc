//! HTTP client for the hosted backend-as-a-service.
//!
//! One [`BackendClient`] carries the base URL and API key; the three service
//! wrappers built on it implement the collaborator traits from `mech-core`.

pub(crate) mod auth_api;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod rest_directory;
pub(crate) mod storage_api;
pub(crate) mod wire;

#[cfg(test)]
mod tests;

pub use auth_api::AuthApi;
pub use client::BackendClient;
pub use error::{ClientError, Result as ClientResult};
pub use rest_directory::RestProfileDirectory;
pub use storage_api::StorageApi;
