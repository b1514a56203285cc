use crate::{ServiceResult, Session, SignUpOutcome, SignUpRequest};

use async_trait::async_trait;

/// Authentication provider: account creation, login, logout.
#[async_trait]
pub trait CredentialService: Send + Sync {
    async fn sign_up(&self, request: &SignUpRequest) -> ServiceResult<SignUpOutcome>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> ServiceResult<Session>;

    /// Invalidate the session on the provider side, as far as the provider supports it.
    async fn sign_out(&self, session: &Session) -> ServiceResult<()>;
}
