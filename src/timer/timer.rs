use super::countdown::{Countdown, TimerEvent};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Asynchronous driver for a `Countdown`
///
/// Owns the countdown state and the single tokio task that ticks it once per
/// second while running. Notifications raised by ticks are published on the
/// event channel handed out by `new()`.
///
/// Tick callbacks are strictly serialized: at most one tick task exists per
/// timer, and `pause`/`stop`/`reset` cancel the pending tick before mutating
/// the clock, so no tick can observe or mutate state after cancellation.
pub struct CountdownTimer {
    /// Clock state, shared with the tick task
    state: Arc<Mutex<Countdown>>,

    /// Sender side of the notification channel
    events_tx: mpsc::UnboundedSender<TimerEvent>,

    /// Handle for the currently outstanding tick task, if any
    tick_handle: Mutex<Option<JoinHandle<()>>>,
}

impl CountdownTimer {
    /// Create a timer at full duration together with its notification channel
    pub fn new(total_duration_secs: u32) -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let timer = Self {
            state: Arc::new(Mutex::new(Countdown::new(total_duration_secs))),
            events_tx,
            tick_handle: Mutex::new(None),
        };

        (timer, events_rx)
    }

    /// Start ticking; no-op if already running or expired
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) {
        {
            let mut countdown = self.state.lock().unwrap();
            if !countdown.start() {
                debug!("timer start ignored (already running or expired)");
                return;
            }
        }

        let state = Arc::clone(&self.state);
        let events = self.events_tx.clone();

        let task = tokio::spawn(async move {
            // First tick fires one full period after start, not immediately
            let mut interval = tokio::time::interval_at(
                tokio::time::Instant::now() + TICK_PERIOD,
                TICK_PERIOD,
            );

            loop {
                interval.tick().await;

                let event = {
                    let mut countdown = state.lock().unwrap();
                    if !countdown.is_running() {
                        // Cancelled between ticks; leave state untouched
                        break;
                    }
                    countdown.tick()
                };

                match event {
                    Some(TimerEvent::Expired) => {
                        // Auto-stop: the countdown already cleared `running`
                        let _ = events.send(TimerEvent::Expired);
                        break;
                    }
                    Some(event) => {
                        let _ = events.send(event);
                    }
                    None => {}
                }
            }
        });

        let mut handle = self.tick_handle.lock().unwrap();
        if let Some(old) = handle.replace(task) {
            // `Countdown::start` returning true rules out a live ticker;
            // anything still here is a finished task from a prior run
            old.abort();
        }
    }

    /// Suspend ticking; remaining time is preserved
    pub fn pause(&self) {
        self.cancel_tick();
        self.state.lock().unwrap().pause();
    }

    /// Continue ticking from a paused state
    pub fn resume(&self) {
        self.start();
    }

    /// Stop ticking without resetting the remaining time
    pub fn stop(&self) {
        self.cancel_tick();
        self.state.lock().unwrap().stop();
    }

    /// Stop ticking and restore the full duration
    pub fn reset(&self) {
        self.cancel_tick();
        self.state.lock().unwrap().reset();
    }

    pub fn total_duration_secs(&self) -> u32 {
        self.state.lock().unwrap().total_duration_secs()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.state.lock().unwrap().remaining_secs()
    }

    pub fn is_running(&self) -> bool {
        self.state.lock().unwrap().is_running()
    }

    pub fn is_warning(&self) -> bool {
        self.state.lock().unwrap().is_warning()
    }

    pub fn is_expired(&self) -> bool {
        self.state.lock().unwrap().is_expired()
    }

    /// Remaining time rendered as zero-padded `MM:SS`
    pub fn formatted(&self) -> String {
        self.state.lock().unwrap().formatted()
    }

    /// Cancel the outstanding tick task, if any
    ///
    /// A tick already holding the state lock finishes its mutation first;
    /// the subsequent `running = false` store guarantees any later wakeup
    /// exits without touching the clock.
    fn cancel_tick(&self) {
        if let Some(task) = self.tick_handle.lock().unwrap().take() {
            task.abort();
        }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        // The owning session is going away; no tick may fire after this
        self.cancel_tick();
    }
}
