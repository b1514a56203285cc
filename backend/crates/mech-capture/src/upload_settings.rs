/// How uploaded objects are named and labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSettings {
    /// Without the leading dot
    pub file_extension: String,
    pub content_type: String,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            file_extension: String::from("mp4"),
            content_type: String::from("video/mp4"),
        }
    }
}
