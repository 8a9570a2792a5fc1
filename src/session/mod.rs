//! Interview session management
//!
//! This module provides the `InterviewSession` abstraction that composes the
//! countdown timer and the media session into one start/end surface:
//! - Starting acquires the devices, then starts the clock
//! - Ending, timer expiry, and disposal all release the devices
//! - Track toggles flow through to the media session while active
//! - UI notifications are emitted as typed events on a channel

mod config;
mod events;
mod session;
mod stats;

pub use config::SessionConfig;
pub use events::SessionEvent;
pub use session::InterviewSession;
pub use stats::SessionStats;
