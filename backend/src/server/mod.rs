//! Server construction and wiring.
//!
//! Builds the question service over the configured store, assembles the
//! Actix application, and runs the HTTP server.

mod config;

pub use config::ServerConfig;

use std::io;
use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::QuestionServiceImpl;
use crate::domain::ports::{InMemoryThreadItemRepository, QuestionService};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::questions::{
    get_question, list_questions, post_reply, register_question,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DbPool, DieselThreadItemRepository, PoolConfig, run_migrations,
};

/// Build the question service over the configured store.
///
/// Uses the PostgreSQL-backed repository when a database URL is configured,
/// applying pending migrations first; otherwise falls back to the
/// deterministic in-memory store.
async fn build_question_service(config: &ServerConfig) -> io::Result<Arc<dyn QuestionService>> {
    match config.database_url() {
        Some(url) => {
            run_migrations(url).await.map_err(io::Error::other)?;
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(io::Error::other)?;
            info!("using the PostgreSQL thread item store");
            Ok(Arc::new(QuestionServiceImpl::new(Arc::new(
                DieselThreadItemRepository::new(pool),
            ))))
        }
        None => {
            warn!("DATABASE_URL not set; using the in-memory thread item store");
            Ok(Arc::new(QuestionServiceImpl::new(Arc::new(
                InMemoryThreadItemRepository::new(),
            ))))
        }
    }
}

/// Assemble the Actix application from its shared state.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .service(register_question)
        .service(post_reply)
        .service(list_questions)
        .service(get_question)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Run the HTTP server until it is stopped.
pub async fn run(config: ServerConfig) -> io::Result<()> {
    let questions = build_question_service(&config).await?;
    let http_state = web::Data::new(HttpState::new(questions));
    let health_state = web::Data::new(HealthState::new());

    // Clones for the server factory so the probe state stays accessible here.
    let server_http_state = http_state.clone();
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_http_state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr())?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr(), "forum backend listening");
    server.run().await
}
