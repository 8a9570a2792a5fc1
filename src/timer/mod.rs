//! Interview countdown timer
//!
//! This module provides the countdown clock for an interview session:
//! - `Countdown`: the pure state machine (remaining time, warning/expiry
//!   thresholds, one-shot notifications)
//! - `CountdownTimer`: the async driver that ticks the countdown once per
//!   second on a tokio task and publishes `TimerEvent`s

mod countdown;
mod timer;

pub use countdown::{format_clock, Countdown, TimerEvent, WARNING_THRESHOLD_SECS};
pub use timer::CountdownTimer;
