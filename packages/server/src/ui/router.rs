//! Route definitions.

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{handler, middleware::log_request, state::AppState};

/// Create the main API router with all endpoints.
///
/// Layers run outermost first: request logger, CORS, trace.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handler::health_check))
        // Repository endpoints
        .route(
            "/repositories",
            get(handler::list_projects).post(handler::create_project),
        )
        .route(
            "/repositories/",
            get(handler::list_projects)
                .post(handler::create_project)
                .put(handler::missing_project_id)
                .delete(handler::missing_project_id),
        )
        .route(
            "/repositories/{id}",
            get(handler::get_project)
                .put(handler::update_project)
                .delete(handler::delete_project),
        )
        .route("/repositories/{id}/like", post(handler::like_project))
        .fallback(handler::route_not_found)
        .method_not_allowed_fallback(handler::method_not_allowed)
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}
