use std::path::Path;

use crate::errors::{AppError, AppResult};

use super::client::UploadClient;
use super::selection::SelectedFile;

/// Upload the selected file, if there is one.
///
/// This is the single error boundary: every failure below it, from the
/// missing selection through transport errors, ends up logged here exactly
/// once and swallowed. The outcome is observable only through the logs.
pub async fn handle_upload(client: &UploadClient, selection: Option<&Path>) {
    match try_upload(client, selection).await {
        Ok(body) => log::info!("Success: {}", body),
        Err(e) => log::error!("Error: {}", e),
    }
}

/// The fallible half of the trigger, separated out so tests can see the
/// result instead of scraping logs.
pub async fn try_upload(client: &UploadClient, selection: Option<&Path>) -> AppResult<String> {
    let path = selection.ok_or(AppError::NoFileSelected)?;
    let file = SelectedFile::from_path(path).await?;
    client.send(&file).await
}
