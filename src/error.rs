use serde_json::Value;
use thiserror::Error;

/// Result type used across the pipeline.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// The two failure kinds of the pipeline. Upstream failures carry the remote
/// store's status and body verbatim; everything else propagates unwrapped.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{message} ({status} {status_text})")]
    Upstream {
        message: String,
        status: u16,
        status_text: String,
        body: Value,
    },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ServiceError {
    /// Non-success response from the remote store.
    pub fn upstream(
        message: impl Into<String>,
        status: u16,
        status_text: impl Into<String>,
        body: Value,
    ) -> Self {
        Self::Upstream {
            message: message.into(),
            status,
            status_text: status_text.into(),
            body,
        }
    }

    /// Upstream status code, when the failure came from the remote store.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::Unexpected(_) => None,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(error: reqwest::Error) -> Self {
        Self::Unexpected(anyhow::Error::new(error))
    }
}
