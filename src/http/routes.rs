use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Interview lifecycle
        .route("/interviews/start", post(handlers::start_interview))
        .route(
            "/interviews/:interview_id/end",
            post(handlers::end_interview),
        )
        // Track toggles
        .route(
            "/interviews/:interview_id/video/toggle",
            post(handlers::toggle_video),
        )
        .route(
            "/interviews/:interview_id/audio/toggle",
            post(handlers::toggle_audio),
        )
        // Timer controls
        .route(
            "/interviews/:interview_id/timer/pause",
            post(handlers::pause_timer),
        )
        .route(
            "/interviews/:interview_id/timer/resume",
            post(handlers::resume_timer),
        )
        // Queries
        .route(
            "/interviews/:interview_id/status",
            get(handlers::get_interview_status),
        )
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
