//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON envelopes and status
//! codes. The code-to-status table is the external error contract and must
//! stay stable.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{DomainError, ErrorCode};

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::EmptyAuthor | ErrorCode::EmptyMessage => StatusCode::BAD_REQUEST,
        ErrorCode::QuestionNotFound | ErrorCode::ReplyFailed | ErrorCode::DetailFailed => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::RegistrationFailed | ErrorCode::ListFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        error!(
            code = self.code().as_str(),
            description = self.description(),
            "request failed: {self}"
        );
        HttpResponse::build(self.status_code()).json(self)
    }
}

impl From<actix_web::Error> for DomainError {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}
