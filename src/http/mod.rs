//! HTTP API server for external control (the interview front end)
//!
//! This module provides a REST API for driving interview sessions:
//! - POST /interviews/start - Create and start an interview
//! - POST /interviews/:id/end - End an interview
//! - POST /interviews/:id/video/toggle - Flip the camera track
//! - POST /interviews/:id/audio/toggle - Flip the microphone track
//! - POST /interviews/:id/timer/pause - Suspend the countdown
//! - POST /interviews/:id/timer/resume - Continue the countdown
//! - GET /interviews/:id/status - Query session state and events
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
