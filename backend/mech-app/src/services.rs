use crate::error::Result as AppErrorResult;

use mech_auth::{AuthFlow, SessionValidator};
use mech_client::{AuthApi, BackendClient, RestProfileDirectory, StorageApi};
use mech_config::{Config, DirectoryBackend};
use mech_core::{BlobStorage, CredentialService, ProfileDirectory};
use mech_db::{DirectoryConnection, ProfileRepository};

use std::sync::Arc;

use log::info;

/// The external collaborators, wired from configuration.
pub struct Services {
    pub directory: Arc<dyn ProfileDirectory>,
    pub credentials: Arc<dyn CredentialService>,
    pub storage: Arc<dyn BlobStorage>,
}

impl Services {
    pub async fn connect(config: &Config) -> AppErrorResult<Self> {
        let api_key = config.backend.api_key.as_deref().unwrap_or_default();
        let client = BackendClient::new(&config.backend.url, api_key);

        let directory: Arc<dyn ProfileDirectory> = match config.directory.backend {
            DirectoryBackend::Remote => Arc::new(RestProfileDirectory::new(
                client.clone(),
                &config.backend.profile_table,
            )),
            DirectoryBackend::Sqlite => {
                let path = config.directory_path()?;
                info!("Using local profile directory at {}", path.display());
                let pool = DirectoryConnection::open(&path).await?;
                Arc::new(ProfileRepository::new(pool))
            }
        };

        Ok(Self {
            directory,
            credentials: Arc::new(AuthApi::new(client.clone())),
            storage: Arc::new(StorageApi::new(client, &config.storage.bucket)),
        })
    }

    pub fn auth_flow(&self, config: &Config) -> AuthFlow {
        let flow = AuthFlow::new(self.directory.clone(), self.credentials.clone());

        match config.auth.jwt_secret {
            Some(ref secret) => flow.with_validator(SessionValidator::with_hs256(
                secret.as_bytes(),
                &config.auth.jwt_audience,
            )),
            None => flow,
        }
    }
}
