//! Domain model and orchestration for the question/answer forum.
//!
//! Purpose: define the thread item entity, the pure validation and view
//! assembly functions, the ports at the hexagonal boundary, and the service
//! that sequences validation, store access, error translation, and view
//! assembly. Everything here is transport and persistence agnostic.

pub mod error;
pub mod ports;
mod question_service;
pub mod thread;
pub mod views;

pub use self::error::{DomainError, ErrorCode};
pub use self::question_service::QuestionServiceImpl;
pub use self::thread::{
    NewThreadItem, PostBody, PostBodyValidationError, PostPayload, ThreadItem, ThreadItemId,
};
pub use self::views::{
    QuestionCreatedView, QuestionDetailView, QuestionSummaryView, ReplyCreatedView, ReplyView,
};

/// Convenient result alias for use-case and handler signatures.
pub type ApiResult<T> = Result<T, DomainError>;
