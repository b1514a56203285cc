pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::directory_connection::DirectoryConnection;
pub use error::{DbError, Result};
pub use repositories::profile_repository::ProfileRepository;
