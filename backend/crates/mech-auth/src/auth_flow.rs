//! Registration and sign-in against the profile directory and credential service.
//!
//! Every operation takes the current [`AuthState`] by value and hands back a
//! [`Transition`]. Remote calls run strictly in sequence and the first failure
//! ends the operation; nothing is retried.

use crate::{AuthError, AuthState, FormFields, Result as AuthErrorResult, SessionValidator, Transition};

use mech_core::{
    AccountMetadata, CredentialService, ErrorLocation, InFlight, NewProfile, ProfileDirectory,
    ServiceError, Session, SignUpRequest, UniqueField,
};

use std::panic::Location;
use std::sync::Arc;

use log::{debug, info, warn};

const USERNAME_LOOKUP_FAILED: &str = "Error checking username. Please try again.";
const EMAIL_LOOKUP_FAILED: &str = "Error checking email. Please try again.";
const USER_LOOKUP_FAILED: &str = "Error checking user. Please try again.";

pub struct AuthFlow {
    directory: Arc<dyn ProfileDirectory>,
    credentials: Arc<dyn CredentialService>,
    validator: Option<SessionValidator>,
    in_flight: InFlight,
}

impl AuthFlow {
    pub fn new(
        directory: Arc<dyn ProfileDirectory>,
        credentials: Arc<dyn CredentialService>,
    ) -> Self {
        Self {
            directory,
            credentials,
            validator: None,
            in_flight: InFlight::new(),
        }
    }

    /// Verify every session's access token before accepting it.
    pub fn with_validator(mut self, validator: SessionValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Loading indicator: true while a register or sign-in is running.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Create a credential-service account plus its directory row, then sign in.
    pub async fn register(&self, state: AuthState, fields: FormFields) -> Transition {
        let Some(_guard) = self.in_flight.try_begin() else {
            return Transition::refused(state, busy());
        };
        if let Err(e) = require_unauthenticated(&state, "register") {
            return Transition::refused(state, e);
        }

        let working = AuthState::Authenticating {
            fields: fields.clone(),
        };
        debug!("Auth state {} -> {}", state.name(), working.name());

        match self.provision(&fields).await {
            Ok(session) => {
                info!("Registered '{}' ({})", fields.username, session.user_id);
                Transition::ok(AuthState::Authenticated { session })
            }
            Err(e) => {
                warn!("Registration of '{}' failed: {}", fields.username, e);
                Transition::failed(fields, e)
            }
        }
    }

    /// Resolve the username to its email, then authenticate with the password.
    pub async fn sign_in(&self, state: AuthState, fields: FormFields) -> Transition {
        let Some(_guard) = self.in_flight.try_begin() else {
            return Transition::refused(state, busy());
        };
        if let Err(e) = require_unauthenticated(&state, "sign in") {
            return Transition::refused(state, e);
        }

        let working = AuthState::Authenticating {
            fields: fields.clone(),
        };
        debug!("Auth state {} -> {}", state.name(), working.name());

        match self.authenticate(&fields).await {
            Ok(session) => {
                info!("Signed in '{}' ({})", fields.username, session.user_id);
                Transition::ok(AuthState::Authenticated { session })
            }
            Err(e) => {
                warn!("Sign-in of '{}' failed: {}", fields.username, e);
                Transition::failed(fields, e)
            }
        }
    }

    /// Drop the session and clear the form. A failed remote sign-out is only logged.
    pub async fn sign_out(&self, state: AuthState) -> Transition {
        if let AuthState::Authenticated { session } = &state {
            match self.credentials.sign_out(session).await {
                Ok(()) => info!("Signed out {}", session.user_id),
                Err(e) => warn!("Remote sign-out for {} failed: {}", session.user_id, e),
            }
        }

        Transition::ok(AuthState::new())
    }

    async fn provision(&self, fields: &FormFields) -> AuthErrorResult<Session> {
        require_present(&[
            ("full name", fields.full_name.as_str()),
            ("email", fields.email.as_str()),
            ("username", fields.username.as_str()),
            ("password", fields.password.as_str()),
        ])?;

        match self.directory.find_by_username(&fields.username).await {
            Ok(Some(_)) => {
                return Err(AuthError::DuplicateIdentifier {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Ok(None) => {}
            Err(e) => return Err(lookup_error(USERNAME_LOOKUP_FAILED, e)),
        }

        match self.directory.find_by_email(&fields.email).await {
            Ok(Some(_)) => {
                return Err(AuthError::DuplicateEmail {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Ok(None) => {}
            Err(e) => return Err(lookup_error(EMAIL_LOOKUP_FAILED, e)),
        }

        let request = SignUpRequest {
            email: fields.email.clone(),
            password: fields.password.clone(),
            metadata: AccountMetadata {
                full_name: fields.full_name.clone(),
                username: fields.username.clone(),
            },
        };
        let outcome = self
            .credentials
            .sign_up(&request)
            .await
            .map_err(provisioning_error)?;

        if let Some(account) = &outcome.account {
            let row = NewProfile::new(
                fields.username.clone(),
                fields.email.clone(),
                fields.full_name.clone(),
            );

            if let Err(e) = self.directory.insert(&row).await {
                warn!(
                    "Account {} was created but its directory row was not; account left orphaned",
                    account.id
                );
                return Err(match e {
                    ServiceError::UniqueViolation {
                        field: UniqueField::Username,
                        ..
                    } => AuthError::DuplicateIdentifier {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    ServiceError::UniqueViolation {
                        field: UniqueField::Email,
                        ..
                    } => AuthError::DuplicateEmail {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    other => AuthError::DirectoryWriteError {
                        message: other.message().to_string(),
                        orphaned_account: Some(account.id),
                        location: ErrorLocation::from(Location::caller()),
                    },
                });
            }
        }

        let session = match outcome.session {
            Some(session) => session,
            None => {
                debug!("Sign-up returned no session, signing in");
                self.credentials
                    .sign_in_with_password(&fields.email, &fields.password)
                    .await
                    .map_err(provisioning_error)?
            }
        };

        self.verify(&session)?;

        Ok(session)
    }

    async fn authenticate(&self, fields: &FormFields) -> AuthErrorResult<Session> {
        require_present(&[
            ("username", fields.username.as_str()),
            ("password", fields.password.as_str()),
        ])?;

        let profile = match self.directory.find_by_username(&fields.username).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                return Err(AuthError::UserNotFound {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(lookup_error(USER_LOOKUP_FAILED, e)),
        };

        let session = self
            .credentials
            .sign_in_with_password(&profile.email, &fields.password)
            .await
            .map_err(|e| AuthError::InvalidCredentials {
                cause: e.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.verify(&session)?;

        Ok(session)
    }

    fn verify(&self, session: &Session) -> AuthErrorResult<()> {
        let Some(validator) = &self.validator else {
            return Ok(());
        };

        validator
            .validate_session(session)
            .map(|claims| debug!("Session token verified for {}", claims.sub))
            .map_err(|e| AuthError::InvalidSession {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Debug for AuthFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthFlow")
            .field("validator", &self.validator)
            .field("loading", &self.is_loading())
            .finish_non_exhaustive()
    }
}

#[track_caller]
fn busy() -> AuthError {
    AuthError::Busy {
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn require_unauthenticated(state: &AuthState, operation: &'static str) -> AuthErrorResult<()> {
    match state {
        AuthState::Unauthenticated { .. } => Ok(()),
        other => Err(AuthError::InvalidTransition {
            operation,
            state: other.name(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Whitespace-only counts as missing. Reports the first gap in form order.
#[track_caller]
fn require_present(fields: &[(&'static str, &str)]) -> AuthErrorResult<()> {
    match fields
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
    {
        Some(field) => Err(AuthError::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }),
        None => Ok(()),
    }
}

#[track_caller]
fn lookup_error(message: &'static str, cause: ServiceError) -> AuthError {
    AuthError::LookupError {
        message,
        cause: cause.message().to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn provisioning_error(cause: ServiceError) -> AuthError {
    AuthError::ProvisioningError {
        message: cause.message().to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
