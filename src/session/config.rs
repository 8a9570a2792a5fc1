use crate::media::MediaConstraints;
use serde::{Deserialize, Serialize};

/// Configuration for an interview session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique interview identifier (e.g., "interview-2026-08-06-backend-role")
    pub interview_id: String,

    /// Full countdown duration in whole seconds
    /// Default: 1800 seconds (30 minutes)
    pub duration_secs: u32,

    /// Capture constraints requested when the interview starts
    pub constraints: MediaConstraints,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            interview_id: format!("interview-{}", uuid::Uuid::new_v4()),
            duration_secs: 1800, // 30 minutes
            constraints: MediaConstraints::default(),
        }
    }
}
