//! Driving port for the question/answer use cases.
//!
//! Inbound adapters consume this port so handlers depend on use cases, not
//! on the store. Each method is one self-contained read-modify-respond unit;
//! the implementation holds no state between calls.

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::thread::{PostPayload, ThreadItemId};
use crate::domain::views::{
    QuestionCreatedView, QuestionDetailView, QuestionSummaryView, ReplyCreatedView,
};

/// Use-case surface of the forum backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionService: Send + Sync {
    /// Register a new root question.
    async fn register_question(
        &self,
        payload: PostPayload,
    ) -> Result<QuestionCreatedView, DomainError>;

    /// Post a reply to an existing question.
    async fn post_reply(
        &self,
        question_id: ThreadItemId,
        payload: PostPayload,
    ) -> Result<ReplyCreatedView, DomainError>;

    /// List all questions with their reply counts.
    async fn list_questions(&self) -> Result<Vec<QuestionSummaryView>, DomainError>;

    /// Read one question with its full reply list.
    async fn question_detail(
        &self,
        question_id: ThreadItemId,
    ) -> Result<QuestionDetailView, DomainError>;
}
