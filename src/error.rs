use thiserror::Error;

use crate::data::{ApiError, ErrorCode, RepositoryError};

/// Failures while handling one console command.
///
/// None of these end the session; they are reported back in the response
/// envelope and the loop moves on to the next line.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("malformed command: {0}")]
    Command(#[from] serde_json::Error),

    #[error("invalid path {path:?}: {source}")]
    Path {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("path {0:?} leaves the application")]
    ForeignPath(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl From<ConsoleError> for ApiError {
    fn from(err: ConsoleError) -> Self {
        match err {
            ConsoleError::Repository(err) => err.into(),
            err @ ConsoleError::Encode(_) => ApiError::new(ErrorCode::Internal, err.to_string()),
            other => ApiError::new(ErrorCode::BadRequest, other.to_string()),
        }
    }
}
