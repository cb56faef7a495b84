use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipMgrError {
    /// A pip invocation exited non-zero; the payload is the full user-facing message.
    #[error("{0}")]
    Pip(String),

    #[error("Package '{0}' not found")]
    PackageNotFound(String),

    #[error("Version information not found for '{0}'")]
    VersionNotFound(String),

    #[error("Invalid Python path: File does not exist")]
    InvalidPythonPath,

    #[error("Error updating Python path: {0}")]
    PathUpdate(String),

    #[error("Please enter a {0}")]
    MissingInput(&'static str),

    #[error("Invalid operation")]
    InvalidOperation,

    #[error("Error: {0}")]
    CommandFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PipMgrError {
    /// Message without a leading `Error:`, for callers that print their own prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::CommandFailed(reason) => reason.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipMgrError>;
