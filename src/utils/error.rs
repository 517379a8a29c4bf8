use crate::domain::model::ApiResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status; the response is kept.
    #[error("HTTP request failed: {source}")]
    Status {
        #[source]
        source: reqwest::Error,
        response: Box<ApiResponse>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Request task aborted: {0}")]
    TaskAborted(#[from] tokio::task::JoinError),

    #[error("Request finished without reporting an outcome")]
    Incomplete,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::Http(e) => e.status(),
            ApiError::Status { response, .. } => Some(response.status()),
            _ => None,
        }
    }

    /// Response received before the request was rejected, if any.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            ApiError::Status { response, .. } => Some(response),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
