//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: the question endpoints, the health probes, and the schema
//! wrappers from the inbound layer. The original API surface was described
//! by a Swagger document; this regenerates the equivalent contract. Swagger
//! UI serves it in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, QuestionCreatedSchema, QuestionDetailSchema,
    QuestionSummarySchema, ReplyCreatedSchema, ReplySchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum backend API",
        description = "HTTP interface for registering questions, posting replies, and reading threads."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::questions::register_question,
        crate::inbound::http::questions::post_reply,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::get_question,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        QuestionCreatedSchema,
        ReplyCreatedSchema,
        QuestionSummarySchema,
        ReplySchema,
        QuestionDetailSchema,
    )),
    tags(
        (name = "questions", description = "Operations on questions and replies"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
