//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic. The orchestration service is the only
//! place allowed to raise them; the HTTP adapter maps them to status codes
//! without inspecting anything beyond the stable [`ErrorCode`].

use serde::{Deserialize, Serialize};

use crate::domain::thread::{PostBodyValidationError, ThreadItemId};

/// Stable machine-readable error code describing the failure category.
///
/// The serialized names form the external error contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The inbound payload carried no author text.
    EmptyAuthor,
    /// The inbound payload carried no message text.
    EmptyMessage,
    /// The referenced question does not exist (or is not a root question).
    QuestionNotFound,
    /// The store failed while registering a question.
    RegistrationFailed,
    /// The store failed while posting a reply.
    ReplyFailed,
    /// The store failed while listing questions.
    ListFailed,
    /// The store failed while reading question details.
    DetailFailed,
    /// Fixed fallback for failures outside the domain taxonomy.
    InternalError,
}

impl ErrorCode {
    /// Stable string form of the code, as serialized to clients.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyAuthor => "EmptyAuthor",
            Self::EmptyMessage => "EmptyMessage",
            Self::QuestionNotFound => "QuestionNotFound",
            Self::RegistrationFailed => "RegistrationFailed",
            Self::ReplyFailed => "ReplyFailed",
            Self::ListFailed => "ListFailed",
            Self::DetailFailed => "DetailFailed",
            Self::InternalError => "InternalError",
        }
    }
}

/// Domain error payload returned to clients on any failure.
///
/// `message` describes the failure at this layer; `description` preserves the
/// wrapped cause's own message so operators can tell a validation mistake
/// from an infrastructure fault without parsing prose. When there is no
/// wrapped cause the description repeats the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct DomainError {
    code: ErrorCode,
    message: String,
    description: String,
}

impl DomainError {
    /// Create an error with no wrapped cause.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let description = message.clone();
        Self {
            code,
            message,
            description,
        }
    }

    /// Create an error wrapping a lower-level cause.
    pub fn wrapping(
        code: ErrorCode,
        message: impl Into<String>,
        cause: impl std::fmt::Display,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            description: cause.to_string(),
        }
    }

    /// Stable machine-readable error code.
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message for this layer's failure.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Message of the wrapped cause, or the message itself when none exists.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Convenience constructor for [`ErrorCode::QuestionNotFound`].
    pub fn question_not_found(id: ThreadItemId) -> Self {
        Self::new(ErrorCode::QuestionNotFound, format!("question {id} not found"))
    }

    /// Convenience constructor for [`ErrorCode::RegistrationFailed`].
    pub fn registration_failed(cause: impl std::fmt::Display) -> Self {
        Self::wrapping(ErrorCode::RegistrationFailed, "failed to save question", cause)
    }

    /// Convenience constructor for [`ErrorCode::ReplyFailed`].
    pub fn reply_failed(cause: impl std::fmt::Display) -> Self {
        Self::wrapping(ErrorCode::ReplyFailed, "failed to save reply", cause)
    }

    /// Convenience constructor for [`ErrorCode::ListFailed`].
    pub fn list_failed(cause: impl std::fmt::Display) -> Self {
        Self::wrapping(ErrorCode::ListFailed, "failed to list questions", cause)
    }

    /// Convenience constructor for [`ErrorCode::DetailFailed`].
    pub fn detail_failed(cause: impl std::fmt::Display) -> Self {
        Self::wrapping(ErrorCode::DetailFailed, "failed to read question details", cause)
    }

    /// Fixed fallback for failures outside the domain taxonomy.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<PostBodyValidationError> for DomainError {
    fn from(error: PostBodyValidationError) -> Self {
        let code = match error {
            PostBodyValidationError::EmptyAuthor => ErrorCode::EmptyAuthor,
            PostBodyValidationError::EmptyMessage => ErrorCode::EmptyMessage,
        };
        Self::new(code, error.to_string())
    }
}
