use crate::media::{MediaConstraints, MediaSource};
use crate::session::{InterviewSession, SessionEvent};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// One registered interview plus the UI events collected for it so far
pub struct SessionEntry {
    pub session: Arc<InterviewSession>,
    pub events: Arc<Mutex<Vec<SessionEvent>>>,
}

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Registered interview sessions (interview_id → entry)
    pub sessions: Arc<RwLock<HashMap<String, Arc<SessionEntry>>>>,

    /// Countdown duration applied when a request doesn't override it
    pub default_duration_secs: u32,

    /// Capture constraints applied to every interview
    pub constraints: MediaConstraints,

    /// Which capture backend new interviews use
    pub media_source: MediaSource,
}

impl AppState {
    pub fn new(
        default_duration_secs: u32,
        constraints: MediaConstraints,
        media_source: MediaSource,
    ) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            default_duration_secs,
            constraints,
            media_source,
        }
    }
}
