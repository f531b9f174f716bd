//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain use-case port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::QuestionService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Question use-case surface backing all forum endpoints.
    pub questions: Arc<dyn QuestionService>,
}

impl HttpState {
    /// Construct state from the question service port.
    pub fn new(questions: Arc<dyn QuestionService>) -> Self {
        Self { questions }
    }
}
