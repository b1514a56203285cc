use crate::{AuthError, FormFields};

use mech_core::Session;

/// Where the user stands with the flow.
///
/// `Authenticating` only exists while an operation is running; a caller never
/// gets it back from a completed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated {
        fields: FormFields,
        /// Message from the last failed attempt
        error: Option<String>,
    },
    Authenticating {
        fields: FormFields,
    },
    Authenticated {
        session: Session,
    },
}

impl AuthState {
    /// Initial state: nothing entered, no error.
    pub fn new() -> Self {
        Self::Unauthenticated {
            fields: FormFields::default(),
            error: None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => "unauthenticated",
            Self::Authenticating { .. } => "authenticating",
            Self::Authenticated { .. } => "authenticated",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated { session } => Some(session),
            _ => None,
        }
    }

    pub fn fields(&self) -> Option<&FormFields> {
        match self {
            Self::Unauthenticated { fields, .. } | Self::Authenticating { fields } => Some(fields),
            Self::Authenticated { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one operation: the state to continue from, plus the failure if there was one.
#[derive(Debug)]
pub struct Transition {
    pub state: AuthState,
    pub error: Option<AuthError>,
}

impl Transition {
    pub(crate) fn ok(state: AuthState) -> Self {
        Self { state, error: None }
    }

    /// Back to the form with every entered field kept and the error's message on display.
    pub(crate) fn failed(fields: FormFields, error: AuthError) -> Self {
        Self {
            state: AuthState::Unauthenticated {
                fields,
                error: Some(error.user_message()),
            },
            error: Some(error),
        }
    }

    /// Refused before anything ran; the state is handed back untouched.
    pub(crate) fn refused(state: AuthState, error: AuthError) -> Self {
        Self {
            state,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
