use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Login response did not contain a token")]
    MissingToken,
}

impl ApiError {
    /// Status code of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("File size exceeds {max_mb}MB limit")]
    TooLarge { max_mb: u64 },

    #[error("Only PDF, DOC, DOCX, and TXT files are allowed (got {0})")]
    UnsupportedType(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Upload response did not contain a file URL")]
    MissingUrl,
}
