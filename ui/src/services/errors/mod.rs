use thiserror::Error;

/// Everything that can go wrong between pressing "Next" and watching the log.
///
/// Every variant renders as a single line suitable for showing under the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The request could not be built or the network call itself failed
    #[error("{message}")]
    Request { message: String },

    /// The backend answered with a non-success status
    #[error("Failed to start sync (HTTP {status})")]
    Status { status: u16 },

    /// The backend answered 2xx but the body carried no usable job id
    #[error("No job_id returned")]
    MissingJobId,

    /// The live log connection broke or could not be opened
    #[error("{message}")]
    Stream { message: String },
}

impl SyncError {
    pub fn request(message: impl Into<String>) -> Self {
        SyncError::Request {
            message: message.into(),
        }
    }

    pub fn stream(message: impl Into<String>) -> Self {
        SyncError::Stream {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Request {
            message: format!("Network error: {}", err),
        }
    }
}

/// Result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;
