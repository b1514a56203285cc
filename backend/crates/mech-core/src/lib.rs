pub mod error;
pub mod in_flight;
pub mod models;
pub mod services;

#[cfg(test)]
mod tests;

pub use error::service_error::{ServiceError, ServiceResult, UniqueField};
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use in_flight::{InFlight, InFlightGuard};
pub use models::account::{Account, AccountMetadata, SignUpOutcome, SignUpRequest};
pub use models::analysis::{AnalysisReport, MechanicScore, verdict};
pub use models::captured_media::CapturedMedia;
pub use models::media_source_kind::MediaSourceKind;
pub use models::new_profile::NewProfile;
pub use models::permission_status::PermissionStatus;
pub use models::player_card::{
    Achievement, MonthlyScore, PlayerCard, PlayerStats, ProgressSummary,
};
pub use models::profile::Profile;
pub use models::session::Session;
pub use models::upload_kind::UploadKind;
pub use models::upload_record::UploadRecord;
pub use services::blob_storage::BlobStorage;
pub use services::credential_service::CredentialService;
pub use services::media_source::MediaSource;
pub use services::profile_directory::ProfileDirectory;
