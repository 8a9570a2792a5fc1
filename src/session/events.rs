use serde::{Deserialize, Serialize};

/// Notifications emitted to the surrounding UI
///
/// Each fires exactly once per transition; consumers receive them over the
/// channel returned by `InterviewSession::new` rather than polling flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    /// Devices acquired and countdown started
    InterviewStarted,
    /// Interview ended by the caller
    InterviewEnded,
    /// Less than a minute of interview time remains
    TimerWarning,
    /// The countdown ran out; devices were released automatically
    TimerExpired,
}
