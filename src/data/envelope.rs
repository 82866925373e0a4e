use serde::{Deserialize, Serialize};

use super::repository::RepositoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Conflict,
    Invalid,
    BadRequest,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        let code = match &err {
            RepositoryError::NotFound { .. } => ErrorCode::NotFound,
            RepositoryError::AlreadyExists { .. } => ErrorCode::Conflict,
            RepositoryError::Invalid(_) => ErrorCode::Invalid,
        };
        Self::new(code, err.to_string())
    }
}

/// The one response shape every operation answers with.
///
/// ```json
/// {"status":"success","data":{...}}
/// {"status":"error","error":{"code":"not_found","message":"..."}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApiResult<T> {
    Success { data: T },
    Error { error: ApiError },
}

impl<T> ApiResult<T> {
    pub fn success(data: T) -> Self {
        ApiResult::Success { data }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiResult::Error {
            error: ApiError::new(code, message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success { data } => ApiResult::Success { data: f(data) },
            ApiResult::Error { error } => ApiResult::Error { error },
        }
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiResult::Success { data } => Ok(data),
            ApiResult::Error { error } => Err(error),
        }
    }
}

impl<T, E: Into<ApiError>> From<Result<T, E>> for ApiResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => ApiResult::Success { data },
            Err(err) => ApiResult::Error { error: err.into() },
        }
    }
}
