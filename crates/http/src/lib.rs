//! HTTP API server for the phonebook.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

pub mod api_error;
mod extract;
mod handlers;
mod response_types;

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    routing::get,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use phonebook_service::PersonService;

pub use api_error::ApiError;
pub use extract::{PersonId, PersonPayload};
pub use response_types::ErrorEnvelope;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Person use cases over the injected store
    pub person_service: Arc<PersonService>,
    /// Directory of static front-end files served for unmatched GETs
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(person_service: Arc<PersonService>) -> Self {
        Self { person_service, static_dir: None }
    }

    #[must_use]
    pub fn with_static_dir(mut self, static_dir: Option<PathBuf>) -> Self {
        self.static_dir = static_dir;
        self
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/info", get(handlers::info::info))
        .route(
            "/api/persons",
            get(handlers::persons::list_persons).post(handlers::persons::create_person),
        )
        .route(
            "/api/persons/{id}",
            get(handlers::persons::get_person)
                .put(handlers::persons::update_person)
                .delete(handlers::persons::delete_person),
        )
        .method_not_allowed_fallback(unknown_route);

    let router = match &state.static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving static files");
            router.fallback_service(
                ServeDir::new(dir)
                    .call_fallback_on_method_not_allowed(true)
                    .not_found_service(unknown_route.into_service()),
            )
        },
        None => router.fallback(unknown_route),
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Empty 404 for any route the API does not define.
async fn unknown_route() -> StatusCode {
    StatusCode::NOT_FOUND
}
