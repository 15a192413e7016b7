//! Error types for the project-management clients
//!
//! Two kinds originate here: bad constructor arguments and server payloads
//! that do not have the expected shape. Everything the request handler
//! reports is carried through untouched in [`ProjectManagementError::Transport`].

use serde_json::Value;

/// Result alias used by every client operation
pub type Result<T> = std::result::Result<T, ProjectManagementError>;

/// Errors returned by the app clients
#[derive(Debug, thiserror::Error)]
pub enum ProjectManagementError {
    /// A constructor argument was malformed
    #[error("{0}")]
    InvalidArgument(String),

    /// The server answered, but the payload broke the expected shape
    #[error("{message} Response data: {response}")]
    InvalidServerResponse {
        /// Which expectation failed
        message: String,
        /// The raw payload, kept for diagnosis
        response: Value,
    },

    /// Error raised by the request handler, passed through as-is
    #[error(transparent)]
    Transport(anyhow::Error),
}

impl ProjectManagementError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn invalid_server_response(message: impl Into<String>, response: &Value) -> Self {
        Self::InvalidServerResponse {
            message: message.into(),
            response: response.clone(),
        }
    }

    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid-argument",
            Self::InvalidServerResponse { .. } => "invalid-server-response",
            Self::Transport(_) => "transport",
        }
    }

    /// Raw server payload for response-shape errors
    pub fn response(&self) -> Option<&Value> {
        match self {
            Self::InvalidServerResponse { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Recover the handler's original error
    pub fn into_transport(self) -> Option<anyhow::Error> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for ProjectManagementError {
    fn from(err: anyhow::Error) -> Self {
        Self::Transport(err)
    }
}
