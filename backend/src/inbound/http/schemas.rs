//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; this
//! module mirrors their serialized structure for documentation purposes only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Variant names are the stable strings of the external error contract.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The inbound payload carried no author text.
    EmptyAuthor,
    /// The inbound payload carried no message text.
    EmptyMessage,
    /// The referenced question does not exist.
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

/// OpenAPI schema for [`crate::domain::DomainError`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DomainError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "QuestionNotFound")]
    code: ErrorCodeSchema,
    /// Human-readable message for this layer's failure.
    #[schema(example = "question 1 not found")]
    message: String,
    /// Message of the wrapped cause, or the message itself when none exists.
    #[schema(example = "question 1 not found")]
    description: String,
}

/// OpenAPI schema for [`crate::domain::QuestionCreatedView`].
#[derive(ToSchema)]
#[schema(as = crate::domain::QuestionCreatedView, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct QuestionCreatedSchema {
    /// Store-assigned question identifier.
    id: i64,
    /// Author of the question.
    author: String,
    /// Message text of the question.
    message: String,
    /// Always zero for a freshly registered question.
    reply_count: usize,
}

/// OpenAPI schema for [`crate::domain::ReplyCreatedView`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ReplyCreatedView, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReplyCreatedSchema {
    /// Store-assigned reply identifier.
    id: i64,
    /// Author of the reply.
    author: String,
    /// Message text of the reply.
    message: String,
    /// Identifier of the question replied to.
    question_id: i64,
}

/// OpenAPI schema for [`crate::domain::QuestionSummaryView`].
#[derive(ToSchema)]
#[schema(as = crate::domain::QuestionSummaryView, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct QuestionSummarySchema {
    /// Store-assigned question identifier.
    id: i64,
    /// Author of the question.
    author: String,
    /// Message text of the question.
    message: String,
    /// Number of replies posted to the question.
    reply_count: usize,
}

/// OpenAPI schema for [`crate::domain::ReplyView`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ReplyView)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReplySchema {
    /// Store-assigned reply identifier.
    id: i64,
    /// Author of the reply.
    author: String,
    /// Message text of the reply.
    message: String,
}

/// OpenAPI schema for [`crate::domain::QuestionDetailView`].
#[derive(ToSchema)]
#[schema(as = crate::domain::QuestionDetailView)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct QuestionDetailSchema {
    /// Store-assigned question identifier.
    id: i64,
    /// Author of the question.
    author: String,
    /// Message text of the question.
    message: String,
    /// Replies to the question, ordered by creation.
    replies: Vec<ReplySchema>,
}
