pub mod auth_flow;
pub mod auth_state;
pub mod claims;
pub mod error;
pub mod form_fields;
pub mod session_validator;

pub use auth_flow::AuthFlow;
pub use auth_state::{AuthState, Transition};
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use form_fields::FormFields;
pub use session_validator::SessionValidator;
