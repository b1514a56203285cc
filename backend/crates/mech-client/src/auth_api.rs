use crate::wire::{TokenBody, UserBody};
use crate::{BackendClient, ClientResult};

use mech_core::{
    Account, AccountMetadata, CredentialService, ServiceError, ServiceResult, Session,
    SignUpOutcome, SignUpRequest,
};

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Credential service backed by the hosted auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: BackendClient,
}

impl AuthApi {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<String> {
        let req = self.client.request(Method::POST, path).json(body);
        self.client.execute(req).await
    }
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a AccountMetadata,
}

#[derive(Serialize)]
struct PasswordGrantBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[async_trait]
impl CredentialService for AuthApi {
    async fn sign_up(&self, request: &SignUpRequest) -> ServiceResult<SignUpOutcome> {
        debug!("Creating account for {}", request.email);

        let body = SignUpBody {
            email: &request.email,
            password: &request.password,
            data: &request.metadata,
        };
        let response = self.post_json("/auth/v1/signup", &body).await?;

        parse_sign_up(&response)
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> ServiceResult<Session> {
        let body = PasswordGrantBody { email, password };
        let response = self
            .post_json("/auth/v1/token?grant_type=password", &body)
            .await?;

        let token: TokenBody = serde_json::from_str(&response)
            .map_err(|e| ServiceError::unavailable(format!("Unreadable token response: {}", e)))?;

        Ok(token.into_session())
    }

    async fn sign_out(&self, session: &Session) -> ServiceResult<()> {
        let req = self
            .client
            .request_as(Method::POST, "/auth/v1/logout", &session.access_token);
        self.client.execute(req).await?;

        Ok(())
    }
}

/// Sign-up either grants tokens straight away or returns the bare user
/// when the address still needs confirming.
pub(crate) fn parse_sign_up(body: &str) -> ServiceResult<SignUpOutcome> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ServiceError::unavailable(format!("Unreadable sign-up response: {}", e)))?;

    if value.get("access_token").is_some() {
        let token: TokenBody = serde_json::from_value(value)
            .map_err(|e| ServiceError::unavailable(format!("Unreadable sign-up session: {}", e)))?;
        let session = token.into_session();
        let account = Account {
            id: session.user_id,
            email: session.email.clone(),
        };
        return Ok(SignUpOutcome {
            account: Some(account),
            session: Some(session),
        });
    }

    let user = match value.get("user") {
        Some(user) => user.clone(),
        None => value,
    };

    if user.get("id").is_none() {
        return Ok(SignUpOutcome::default());
    }

    let user: UserBody = serde_json::from_value(user)
        .map_err(|e| ServiceError::unavailable(format!("Unreadable sign-up user: {}", e)))?;

    Ok(SignUpOutcome {
        account: Some(user.into_account()),
        session: None,
    })
}
