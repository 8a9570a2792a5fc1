use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of an interview session's state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Whether the interview is currently active
    pub active: bool,

    /// When the session was created
    pub started_at: DateTime<Utc>,

    /// Seconds left on the countdown
    pub remaining_secs: u32,

    /// Remaining time rendered as `MM:SS`
    pub formatted_remaining: String,

    /// Whether the countdown is ticking
    pub timer_running: bool,

    /// Under a minute left, but not yet expired
    pub warning: bool,

    /// The countdown has run out
    pub expired: bool,

    /// Whether a capture stream is currently held
    pub connected: bool,

    /// Camera track enabled flag
    pub video_enabled: bool,

    /// Microphone track enabled flag
    pub audio_enabled: bool,

    /// Last device error shown to the user, if any
    pub error: Option<String>,
}
