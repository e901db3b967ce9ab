//! Remote error types and the text shown for them

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Why a remote call did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the body's `message` field when present
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),

    /// The session expired before the request could be sent
    #[error("session expired")]
    SessionExpired,
}

/// User-facing operations, used to pick a fallback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadProjects,
    SaveProject,
    DeleteProject,
    LoadTasks,
    SaveTask,
    DeleteTask,
    ToggleTask,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::LoadProjects => "Failed to fetch projects.",
            Operation::SaveProject => "Operation failed.",
            Operation::DeleteProject => "Delete failed.",
            Operation::LoadTasks => "Failed to fetch tasks.",
            Operation::SaveTask => "Failed to save task.",
            Operation::DeleteTask => "Failed to delete task.",
            Operation::ToggleTask => "Failed to update task.",
        }
    }
}

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

impl ApiError {
    /// Banner text for this failure of `op`.
    ///
    /// A server-provided message is shown verbatim; everything else falls back
    /// to the fixed text of the operation.
    pub fn status_text(&self, op: Operation) -> String {
        match self {
            ApiError::Rejected { message: Some(message), .. } => message.clone(),
            ApiError::SessionExpired => SESSION_EXPIRED_MESSAGE.to_string(),
            _ => op.fallback_message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::Rejected { status: 400, message: Some("Name taken".into()) };
        assert_eq!(err.status_text(Operation::SaveProject), "Name taken");
    }

    #[test]
    fn test_fallback_per_operation() {
        let err = ApiError::Rejected { status: 500, message: None };
        assert_eq!(err.status_text(Operation::LoadProjects), "Failed to fetch projects.");
        assert_eq!(err.status_text(Operation::DeleteProject), "Delete failed.");

        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.status_text(Operation::SaveProject), "Operation failed.");
    }
}
