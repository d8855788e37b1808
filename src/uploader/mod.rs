// Uploader module - packages the selected file and posts it
//
// One call chain: trigger reads the selection, client sends it.

pub mod client;
pub mod selection;
pub mod trigger;

pub use client::UploadClient;
pub use selection::{SelectedFile, UPLOAD_FIELD};
pub use trigger::{handle_upload, try_upload};
