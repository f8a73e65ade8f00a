use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Unable to find repo HEAD")]
    NoHead,

    #[error("Could not find an Azure DevOps remote for organization '{0}'")]
    NoMatchingRemote(String),

    #[error("Remote URL has no project/repository segments: {0}")]
    BadRemoteUrl(String),

    #[error("Could not find Azure DevOps project '{0}' based on current remote")]
    ProjectNotFound(String),

    #[error("Could not find Azure DevOps repository '{0}' based on current remote")]
    RepositoryNotFound(String),

    #[error("Azure DevOps request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("User cancelled operation")]
    Cancelled,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl From<inquire::error::InquireError> for Error {
    fn from(err: inquire::error::InquireError) -> Self {
        match err {
            inquire::error::InquireError::OperationCanceled => Error::Cancelled,
            inquire::error::InquireError::OperationInterrupted => Error::Cancelled,
            other => Error::InvalidInput(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
