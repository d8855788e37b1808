use std::path::Path;

use reqwest::multipart;

use crate::errors::AppResult;

/// Field name the server expects the file part under.
pub const UPLOAD_FIELD: &str = "file";

/// A file picked for upload. Contents are held in memory as a vector of
/// bytes; files are read once and never mutated.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(filename: String, mime_type: String, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            mime_type,
            bytes,
        }
    }

    /// Read a file from disk and detect its MIME type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let mime_type = guess_mime_type(path).to_string();

        Ok(Self::new(filename, mime_type, bytes))
    }

    /// Build the multipart form for this file: exactly one part, under the
    /// fixed `file` field.
    pub fn to_form(&self) -> AppResult<multipart::Form> {
        let part = multipart::Part::bytes(self.bytes.clone())
            .file_name(self.filename.clone())
            .mime_str(&self.mime_type)?;

        Ok(multipart::Form::new().part(UPLOAD_FIELD, part))
    }
}

/// Detect MIME type based on file extension. The server takes images and
/// PDFs; anything else goes up as a plain octet stream and gets rejected
/// on the other side.
fn guess_mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
