use std::path::PathBuf;
use thiserror::Error;

/// GPI統一エラー型
#[derive(Debug, Error)]
pub enum GpiError {
    #[error("Invalid repository URL: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Repository not found or access denied.")]
    NotFound,

    #[error("No tags found in the repository.")]
    NoTags,

    #[error("Forge API error: {message}")]
    Forge { message: String },

    #[error("Failed to clone the repository:\n{output}")]
    Clone { output: String },

    #[error("Failed to fetch repository updates:\n{output}")]
    Fetch { output: String },

    #[error("Failed to checkout version '{git_ref}':\n{output}")]
    Checkout { git_ref: String, output: String },

    #[error("Package entry point not found in {}. Please check the repository structure.", directory.display())]
    EntryPointNotFound { directory: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GpiError>;
