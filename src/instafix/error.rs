use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixError {
    /// Something needed to reach the model endpoint is missing (usually the API key).
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("No response received from the model")]
    EmptyResponse,

    #[error("Invalid response format from the model: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for FixError {
    fn from(err: reqwest::Error) -> Self {
        FixError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FixError>;
