use super::state::{AppState, SessionEntry};
use crate::media::MediaBackendFactory;
use crate::session::{InterviewSession, SessionConfig, SessionEvent, SessionStats};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    /// Optional interview ID (if not provided, generate UUID)
    pub interview_id: Option<String>,

    /// Countdown duration in seconds (default: service config, 1800 = 30 min)
    pub duration_secs: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct StartInterviewResponse {
    pub interview_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct EndInterviewResponse {
    pub interview_id: String,
    pub status: String,
    pub message: String,
    pub stats: SessionStats,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub interview_id: String,
    pub active: bool,
    pub video_enabled: bool,
    pub audio_enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct TimerControlResponse {
    pub interview_id: String,
    pub timer_running: bool,
    pub remaining_secs: u32,
    pub formatted_remaining: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub stats: SessionStats,
    pub events: Vec<SessionEvent>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /interviews/start
/// Create a new interview session, acquire devices, and start the countdown
pub async fn start_interview(
    State(state): State<AppState>,
    Json(req): Json<StartInterviewRequest>,
) -> impl IntoResponse {
    // Generate or use provided interview ID
    let interview_id = req
        .interview_id
        .unwrap_or_else(|| format!("interview-{}", uuid::Uuid::new_v4()));

    info!("starting interview: {}", interview_id);

    // Check if already registered
    {
        let sessions = state.sessions.read().await;
        if sessions.contains_key(&interview_id) {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: format!("Interview {} already exists", interview_id),
                }),
            )
                .into_response();
        }
    }

    let config = SessionConfig {
        interview_id: interview_id.clone(),
        duration_secs: req.duration_secs.unwrap_or(state.default_duration_secs),
        constraints: state.constraints.clone(),
    };

    let backend = match MediaBackendFactory::create(state.media_source) {
        Ok(b) => b,
        Err(e) => {
            error!("failed to create media backend: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to create media backend: {}", e),
                }),
            )
                .into_response();
        }
    };

    let (session, mut events_rx) = InterviewSession::new(config, backend);
    let session = Arc::new(session);

    // Collect UI notifications for the status endpoint
    let events = Arc::new(Mutex::new(Vec::new()));
    {
        let events = Arc::clone(&events);
        let interview_id = interview_id.clone();
        tokio::spawn(async move {
            while let Some(event) = events_rx.recv().await {
                info!("interview {}: {:?}", interview_id, event);
                events.lock().await.push(event);
            }
        });
    }

    // Acquire devices and start the clock; on device failure the session
    // stays idle and is not registered, so the caller can retry
    if let Err(e) = session.start().await {
        error!("failed to start interview: {}", e);
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: format!("Failed to start interview: {}", e),
            }),
        )
            .into_response();
    }

    // Store session
    {
        let mut sessions = state.sessions.write().await;
        sessions.insert(
            interview_id.clone(),
            Arc::new(SessionEntry { session, events }),
        );
    }

    info!("interview started: {}", interview_id);

    (
        StatusCode::OK,
        Json(StartInterviewResponse {
            interview_id: interview_id.clone(),
            status: "active".to_string(),
            message: format!("Interview {} started", interview_id),
        }),
    )
        .into_response()
}

/// POST /interviews/:interview_id/end
/// End an interview, releasing its devices
pub async fn end_interview(
    State(state): State<AppState>,
    Path(interview_id): Path<String>,
) -> impl IntoResponse {
    info!("ending interview: {}", interview_id);

    // Find and remove entry
    let entry = {
        let mut sessions = state.sessions.write().await;
        sessions.remove(&interview_id)
    };

    match entry {
        Some(entry) => {
            let stats = entry.session.end().await;
            (
                StatusCode::OK,
                Json(EndInterviewResponse {
                    interview_id: interview_id.clone(),
                    status: "ended".to_string(),
                    message: "Interview ended".to_string(),
                    stats,
                }),
            )
                .into_response()
        }
        None => {
            error!("interview {} not found", interview_id);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Interview {} not found", interview_id),
                }),
            )
                .into_response()
        }
    }
}

/// POST /interviews/:interview_id/video/toggle
/// Flip the camera track (active interviews only; idle calls are ignored)
pub async fn toggle_video(
    State(state): State<AppState>,
    Path(interview_id): Path<String>,
) -> impl IntoResponse {
    let sessions = state.sessions.read().await;

    match sessions.get(&interview_id) {
        Some(entry) => {
            let video_enabled = entry.session.toggle_video().await;
            let stats = entry.session.stats().await;
            (
                StatusCode::OK,
                Json(ToggleResponse {
                    interview_id,
                    active: stats.active,
                    video_enabled,
                    audio_enabled: stats.audio_enabled,
                }),
            )
                .into_response()
        }
        None => not_found(&interview_id),
    }
}

/// POST /interviews/:interview_id/audio/toggle
/// Flip the microphone track (active interviews only; idle calls are ignored)
pub async fn toggle_audio(
    State(state): State<AppState>,
    Path(interview_id): Path<String>,
) -> impl IntoResponse {
    let sessions = state.sessions.read().await;

    match sessions.get(&interview_id) {
        Some(entry) => {
            let audio_enabled = entry.session.toggle_audio().await;
            let stats = entry.session.stats().await;
            (
                StatusCode::OK,
                Json(ToggleResponse {
                    interview_id,
                    active: stats.active,
                    video_enabled: stats.video_enabled,
                    audio_enabled,
                }),
            )
                .into_response()
        }
        None => not_found(&interview_id),
    }
}

/// POST /interviews/:interview_id/timer/pause
/// Suspend the countdown, preserving remaining time
pub async fn pause_timer(
    State(state): State<AppState>,
    Path(interview_id): Path<String>,
) -> impl IntoResponse {
    timer_control(&state, &interview_id, |session| session.pause_timer()).await
}

/// POST /interviews/:interview_id/timer/resume
/// Continue a paused countdown
pub async fn resume_timer(
    State(state): State<AppState>,
    Path(interview_id): Path<String>,
) -> impl IntoResponse {
    timer_control(&state, &interview_id, |session| session.resume_timer()).await
}

async fn timer_control(
    state: &AppState,
    interview_id: &str,
    op: impl FnOnce(&InterviewSession),
) -> axum::response::Response {
    let sessions = state.sessions.read().await;

    match sessions.get(interview_id) {
        Some(entry) => {
            op(&entry.session);
            let stats = entry.session.stats().await;
            (
                StatusCode::OK,
                Json(TimerControlResponse {
                    interview_id: interview_id.to_string(),
                    timer_running: stats.timer_running,
                    remaining_secs: stats.remaining_secs,
                    formatted_remaining: stats.formatted_remaining,
                }),
            )
                .into_response()
        }
        None => not_found(interview_id),
    }
}

/// GET /interviews/:interview_id/status
/// Get the state snapshot and collected notifications for an interview
pub async fn get_interview_status(
    State(state): State<AppState>,
    Path(interview_id): Path<String>,
) -> impl IntoResponse {
    let sessions = state.sessions.read().await;

    match sessions.get(&interview_id) {
        Some(entry) => {
            let stats = entry.session.stats().await;
            let events = entry.events.lock().await.clone();
            (StatusCode::OK, Json(StatusResponse { stats, events })).into_response()
        }
        None => not_found(&interview_id),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

fn not_found(interview_id: &str) -> axum::response::Response {
    error!("interview {} not found", interview_id);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Interview {} not found", interview_id),
        }),
    )
        .into_response()
}
