//! Contracts for the external collaborators the flows depend on.

pub mod blob_storage;
pub mod credential_service;
pub mod media_source;
pub mod profile_directory;
