use crate::{NewProfile, Profile, ServiceResult};

use async_trait::async_trait;

/// Directory mapping usernames and emails to identity rows.
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Exact match on username. At most one row.
    async fn find_by_username(&self, username: &str) -> ServiceResult<Option<Profile>>;

    /// Case-insensitive match on email. At most one row.
    async fn find_by_email(&self, email: &str) -> ServiceResult<Option<Profile>>;

    /// Insert a row. A tripped uniqueness constraint is reported as
    /// `ServiceError::UniqueViolation`.
    async fn insert(&self, profile: &NewProfile) -> ServiceResult<()>;
}
