//! Question domain service.
//!
//! The single entry point for each use case: it validates inbound payloads,
//! drives the store, translates failures into the stable error taxonomy, and
//! assembles the per-endpoint view. It is the only place domain errors are
//! raised.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::ports::{QuestionService, ThreadItemRepository};
use crate::domain::thread::{NewThreadItem, PostBody, PostPayload, ThreadItemId};
use crate::domain::views::{
    QuestionCreatedView, QuestionDetailView, QuestionSummaryView, ReplyCreatedView,
};

/// Production implementation of [`QuestionService`].
///
/// Holds only an immutable reference to the store; constructed once at
/// process start and shared across calls.
#[derive(Clone)]
pub struct QuestionServiceImpl<R> {
    repository: Arc<R>,
}

impl<R> QuestionServiceImpl<R> {
    /// Create the service with its thread item store.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> QuestionService for QuestionServiceImpl<R>
where
    R: ThreadItemRepository,
{
    async fn register_question(
        &self,
        payload: PostPayload,
    ) -> Result<QuestionCreatedView, DomainError> {
        let body = PostBody::parse(payload)?;

        let question = self
            .repository
            .create(NewThreadItem::question(body))
            .await
            .map_err(DomainError::registration_failed)?;

        debug!(question_id = %question.id(), "question registered");
        Ok(QuestionCreatedView::from(&question))
    }

    async fn post_reply(
        &self,
        question_id: ThreadItemId,
        payload: PostPayload,
    ) -> Result<ReplyCreatedView, DomainError> {
        let body = PostBody::parse(payload)?;

        // Existence is confirmed before the write is attempted. The target
        // must be a root: replies cannot target replies.
        let question = self
            .repository
            .find_by_id(question_id)
            .await
            .map_err(DomainError::reply_failed)?
            .filter(|item| item.is_root())
            .ok_or_else(|| DomainError::question_not_found(question_id))?;

        let reply = self
            .repository
            .create(NewThreadItem::reply(body, question.id()))
            .await
            .map_err(DomainError::reply_failed)?;

        debug!(question_id = %question.id(), reply_id = %reply.id(), "reply posted");
        Ok(ReplyCreatedView::from(&reply))
    }

    async fn list_questions(&self) -> Result<Vec<QuestionSummaryView>, DomainError> {
        let roots = self
            .repository
            .find_root_items()
            .await
            .map_err(DomainError::list_failed)?;

        Ok(roots.iter().map(QuestionSummaryView::from).collect())
    }

    async fn question_detail(
        &self,
        question_id: ThreadItemId,
    ) -> Result<QuestionDetailView, DomainError> {
        let question = self
            .repository
            .find_by_id(question_id)
            .await
            .map_err(DomainError::detail_failed)?
            .ok_or_else(|| DomainError::question_not_found(question_id))?;

        Ok(QuestionDetailView::from(&question))
    }
}

#[cfg(test)]
#[path = "question_service_tests.rs"]
mod tests;
