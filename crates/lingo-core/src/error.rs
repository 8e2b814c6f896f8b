use lingo_backend::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Empty response from backend")]
    EmptyResponse,

    /// Service failure, message kept as the backend reported it
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    Invalid(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
