use reqwest::Client;

use crate::errors::{AppError, AppResult};

use super::selection::SelectedFile;

/// HTTP client for the upload endpoint. One instance issues one request per
/// `send` call; concurrent calls are independent and nothing is shared
/// between them besides the connection pool.
pub struct UploadClient {
    client: Client,
    endpoint: String,
}

impl UploadClient {
    /// No timeout is set here; how long a call may stay pending is left to
    /// the transport default.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the file as a multipart form and return the response body text.
    ///
    /// No headers are set explicitly; the multipart boundary and
    /// content-type come from the form encoder. A non-success status fails
    /// with the fixed "Network response was not ok" message and the body is
    /// not read.
    pub async fn send(&self, file: &SelectedFile) -> AppResult<String> {
        let form = file.to_form()?;

        log::debug!(
            "Uploading {} ({}, {} bytes) to {}",
            file.filename,
            file.mime_type,
            file.bytes.len(),
            self.endpoint
        );

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::rejected(status));
        }

        Ok(response.text().await?)
    }
}
