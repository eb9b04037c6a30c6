pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::curriculum::handlers as curriculum_handlers;
use crate::export::handlers as export_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/curricula/generate",
            post(curriculum_handlers::handle_generate),
        )
        .route(
            "/api/v1/curricula/export",
            post(export_handlers::handle_export),
        )
        .route(
            "/api/v1/sessions/:id",
            delete(curriculum_handlers::handle_reset_session),
        )
        .with_state(state)
}
