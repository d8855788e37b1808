use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // The status is kept for diagnostics; the message stays the fixed text
    // callers match on.
    #[error("Network response was not ok")]
    Rejected { status: reqwest::StatusCode },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },
}

/// Custom result type
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(field: &str, message: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn file_not_found(path: &str) -> Self {
        Self::FileNotFound {
            path: path.to_string(),
        }
    }

    pub fn rejected(status: reqwest::StatusCode) -> Self {
        Self::Rejected { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_error_uses_fixed_message() {
        let error = AppError::rejected(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Network response was not ok");

        // Same text regardless of the actual status
        let error = AppError::rejected(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "Network response was not ok");
    }

    #[test]
    fn no_file_selected_message() {
        assert_eq!(AppError::NoFileSelected.to_string(), "No file selected");
    }
}
