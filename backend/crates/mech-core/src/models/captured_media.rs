use std::path::PathBuf;

/// A video the device produced, still on local storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedMedia {
    pub path: PathBuf,
}

impl CapturedMedia {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}
