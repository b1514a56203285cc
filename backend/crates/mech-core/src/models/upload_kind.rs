use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which technique a video shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    Swing,
    Pitch,
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Swing => "swing",
            Self::Pitch => "pitch",
        }
    }
}

impl FromStr for UploadKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "swing" => Ok(Self::Swing),
            "pitch" => Ok(Self::Pitch),
            _ => Err(CoreError::InvalidUploadKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UploadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
