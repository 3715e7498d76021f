use thiserror::Error;

use crate::domain::ActivityType;

#[derive(Error, Debug)]
pub enum ApiError {
    /// One of the recent-activity sources could not be read.
    /// The message is for logs only and must not reach the caller.
    #[error("Failed to fetch recent {source_type} records: {message}")]
    SourceFetchFailure {
        source_type: ActivityType,
        message: String,
    },
}

impl ApiError {
    pub fn source_fetch_failure(source_type: ActivityType, message: impl Into<String>) -> Self {
        ApiError::SourceFetchFailure {
            source_type,
            message: message.into(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
