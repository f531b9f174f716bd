//! Question and reply HTTP handlers.
//!
//! ```text
//! POST /questions
//! POST /questions/{questionId}/reply
//! GET  /questions
//! GET  /questions/{questionId}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::views::{
    QuestionCreatedView, QuestionDetailView, QuestionSummaryView, ReplyCreatedView,
};
use crate::domain::{PostPayload, ThreadItemId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ErrorSchema, QuestionCreatedSchema, QuestionDetailSchema, QuestionSummarySchema,
    ReplyCreatedSchema,
};
use crate::inbound::http::state::HttpState;

/// Request payload for registering a question or posting a reply.
///
/// Fields are optional at the transport layer; the domain decides how
/// missing input is reported.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PostRequestBody {
    /// Author of the post.
    pub author: Option<String>,
    /// Message text of the post.
    pub message: Option<String>,
}

impl From<PostRequestBody> for PostPayload {
    fn from(body: PostRequestBody) -> Self {
        Self {
            author: body.author,
            message: body.message,
        }
    }
}

/// Register a new question.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = PostRequestBody,
    responses(
        (status = 200, description = "Question registered", body = QuestionCreatedSchema),
        (status = 400, description = "Empty author or message", body = ErrorSchema),
        (status = 422, description = "Store rejected the question", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "registerQuestion"
)]
#[post("/questions")]
pub async fn register_question(
    state: web::Data<HttpState>,
    payload: web::Json<PostRequestBody>,
) -> ApiResult<web::Json<QuestionCreatedView>> {
    info!("registering question");
    let view = state
        .questions
        .register_question(payload.into_inner().into())
        .await?;
    Ok(web::Json(view))
}

/// Post a reply to an existing question.
#[utoipa::path(
    post,
    path = "/questions/{questionId}/reply",
    request_body = PostRequestBody,
    params(
        ("questionId" = i64, Path, description = "Identifier of the question being replied to")
    ),
    responses(
        (status = 200, description = "Reply posted", body = ReplyCreatedSchema),
        (status = 400, description = "Empty author or message", body = ErrorSchema),
        (status = 404, description = "Question missing or store rejected the reply", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "postReply"
)]
#[post("/questions/{questionId}/reply")]
pub async fn post_reply(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<PostRequestBody>,
) -> ApiResult<web::Json<ReplyCreatedView>> {
    let question_id = ThreadItemId::new(path.into_inner());
    info!(%question_id, "posting reply");
    let view = state
        .questions
        .post_reply(question_id, payload.into_inner().into())
        .await?;
    Ok(web::Json(view))
}

/// List all questions with their reply counts.
#[utoipa::path(
    get,
    path = "/questions",
    responses(
        (status = 200, description = "All questions", body = [QuestionSummarySchema]),
        (status = 422, description = "Store failed while listing", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<QuestionSummaryView>>> {
    info!("listing questions");
    let views = state.questions.list_questions().await?;
    Ok(web::Json(views))
}

/// Read one question with its full reply list.
#[utoipa::path(
    get,
    path = "/questions/{questionId}",
    params(
        ("questionId" = i64, Path, description = "Identifier of the requested question")
    ),
    responses(
        (status = 200, description = "Question details", body = QuestionDetailSchema),
        (status = 404, description = "Question missing or store failed", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "getQuestionDetails"
)]
#[get("/questions/{questionId}")]
pub async fn get_question(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<QuestionDetailView>> {
    let question_id = ThreadItemId::new(path.into_inner());
    info!(%question_id, "reading question details");
    let view = state.questions.question_detail(question_id).await?;
    Ok(web::Json(view))
}

#[cfg(test)]
#[path = "questions_tests.rs"]
mod tests;
