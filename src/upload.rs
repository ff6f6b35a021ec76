use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::{debug, info};

use crate::api::client::{find_string, ApiClient};
use crate::error::UploadError;

pub const DEFAULT_MAX_SIZE_MB: u64 = 5;
pub const BYTES_PER_MB: u64 = 1_048_576;
pub const DEFAULT_UPLOAD_TYPE: &str = "cv";

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TXT: &str = "text/plain";
pub const MIME_OCTET_STREAM: &str = "application/octet-stream";

/// Compared by exact string equality; parameters such as `;charset=` are not stripped.
pub const ALLOWED_MIME_TYPES: [&str; 4] = [MIME_PDF, MIME_DOC, MIME_DOCX, MIME_TXT];

const URL_KEYS: &[&str] = &["url", "fileUrl", "file_url"];

/// A file ready to be validated and sent to `POST /upload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Reads `path` from disk. The MIME type is `mime_override` if given,
    /// otherwise guessed from the extension.
    pub fn from_path(path: &Path, mime_override: Option<&str>) -> Result<Self, UploadError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime_type = match mime_override {
            Some(mime) => mime.to_string(),
            None => mime_from_extension(path).to_string(),
        };
        Ok(Self::new(name, mime_type, bytes))
    }

    /// Like `from_path`, but rejects a file larger than the ceiling using its
    /// on-disk length, before any of it is read.
    pub fn load(path: &Path, mime_override: Option<&str>, max_size_mb: Option<u64>) -> Result<Self, UploadError> {
        check_size(std::fs::metadata(path)?.len(), max_size_mb)?;
        Self::from_path(path, mime_override)
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

pub fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => MIME_PDF,
        "doc" => MIME_DOC,
        "docx" => MIME_DOCX,
        "txt" => MIME_TXT,
        _ => MIME_OCTET_STREAM,
    }
}

/// Checks size (inclusive ceiling of `max_size_mb` MiB, default 5) and then type.
/// The error's `Display` is the human-readable rejection reason.
pub fn validate_file(file: &UploadFile, max_size_mb: Option<u64>) -> Result<(), UploadError> {
    check_size(file.size(), max_size_mb)?;

    if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(UploadError::UnsupportedType(file.mime_type.clone()));
    }

    Ok(())
}

fn check_size(size: u64, max_size_mb: Option<u64>) -> Result<(), UploadError> {
    let max_mb = max_size_mb.unwrap_or(DEFAULT_MAX_SIZE_MB);
    if size > max_mb.saturating_mul(BYTES_PER_MB) {
        return Err(UploadError::TooLarge { max_mb });
    }
    Ok(())
}

/// Validates `file`, then sends it with its type tag as a single multipart
/// `POST /upload`. Returns the URL the server assigned to the file.
pub async fn upload_file(
    client: &ApiClient,
    file: &UploadFile,
    upload_type: &str,
    max_size_mb: Option<u64>,
) -> Result<String, UploadError> {
    validate_file(file, max_size_mb)?;

    let part = Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(&file.mime_type)
        .map_err(crate::error::ApiError::from)?;
    let form = Form::new()
        .part("file", part)
        .text("type", upload_type.to_string());

    debug!("Uploading {} ({} bytes, {})", file.name, file.size(), file.mime_type);
    let body = client.post_multipart("/upload", form).await?;

    let url = find_string(&body, URL_KEYS).ok_or(UploadError::MissingUrl)?;
    info!("Uploaded {} to {}", file.name, url);
    Ok(url)
}
