/// Remaining time at or below this boundary raises the low-time warning
pub const WARNING_THRESHOLD_SECS: u32 = 60;

/// One-shot notifications produced while the countdown is ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Remaining time crossed the warning threshold (fires once per countdown)
    Warning,
    /// Remaining time reached zero (fires once, countdown auto-stops)
    Expired,
}

/// Countdown clock state machine
///
/// Tracks a single countdown from a caller-supplied duration. The clock has
/// no notion of wall time; `tick()` is driven externally once per elapsed
/// second (see `CountdownTimer`), which keeps the arithmetic deterministic
/// and directly testable.
#[derive(Debug, Clone)]
pub struct Countdown {
    /// Full countdown duration in seconds, immutable after creation
    total: u32,

    /// Seconds left, always in 0..=total
    remaining: u32,

    /// Whether the clock is currently ticking
    running: bool,

    /// Whether the low-time warning is still armed for this countdown
    warning_armed: bool,
}

impl Countdown {
    /// Create a countdown at full duration, not running
    pub fn new(total_duration_secs: u32) -> Self {
        Self {
            total: total_duration_secs,
            remaining: total_duration_secs,
            running: false,
            warning_armed: true,
        }
    }

    /// Begin (or continue) ticking
    ///
    /// Returns `false` when the call was a no-op: the clock was already
    /// running, or the countdown has expired and needs a `reset()` first.
    pub fn start(&mut self) -> bool {
        if self.running || self.is_expired() {
            return false;
        }
        self.running = true;
        true
    }

    /// Suspend ticking, preserving the remaining time
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Continue ticking from a paused state (same semantics as `start`)
    pub fn resume(&mut self) -> bool {
        self.start()
    }

    /// Stop ticking without resetting the remaining time
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restore the full duration, stop ticking, and re-arm the warning
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.total;
        self.warning_armed = true;
    }

    /// Advance the clock by one elapsed second
    ///
    /// No-op unless running. Decrements remaining time (floored at zero),
    /// auto-stops on expiry, and returns the notification raised by this
    /// tick, if any. Warning and expiry each fire at most once per countdown.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            self.running = false;
            return Some(TimerEvent::Expired);
        }

        if self.remaining <= WARNING_THRESHOLD_SECS && self.warning_armed {
            self.warning_armed = false;
            return Some(TimerEvent::Warning);
        }

        None
    }

    pub fn total_duration_secs(&self) -> u32 {
        self.total
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Under a minute left, but not yet expired
    pub fn is_warning(&self) -> bool {
        self.remaining > 0 && self.remaining <= WARNING_THRESHOLD_SECS
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Remaining time rendered as zero-padded `MM:SS`
    pub fn formatted(&self) -> String {
        format_clock(i64::from(self.remaining))
    }
}

/// Render a second count as zero-padded `MM:SS`
///
/// Negative inputs render with a leading `-`. Normal countdown operation
/// floors at zero, so the sign only shows up if a caller feeds in raw
/// arithmetic of its own.
pub fn format_clock(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let abs = seconds.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
}
