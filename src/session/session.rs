use super::config::SessionConfig;
use super::events::SessionEvent;
use super::stats::SessionStats;
use crate::media::{MediaBackend, MediaError, MediaSession};
use crate::timer::{CountdownTimer, TimerEvent};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// An interview session composing one countdown timer and one media session
///
/// The session is a two-state machine, idle or active. Starting acquires the
/// devices and only then starts the clock. Every path out of active (caller
/// end, timer expiry, disposal) releases the devices unconditionally, and
/// expiry tears the media down on its own rather than waiting for any UI
/// confirmation.
pub struct InterviewSession {
    /// Session configuration
    config: SessionConfig,

    /// The countdown clock
    timer: CountdownTimer,

    /// Exclusive owner of the capture stream
    media: Arc<Mutex<MediaSession>>,

    /// Whether the interview is currently active
    active: Arc<AtomicBool>,

    /// When the session was created
    started_at: chrono::DateTime<chrono::Utc>,

    /// UI notification channel
    events_tx: mpsc::UnboundedSender<SessionEvent>,

    /// Timer notification receiver, consumed by the event pump on first start
    timer_events: Mutex<Option<mpsc::UnboundedReceiver<TimerEvent>>>,

    /// Handle for the event pump task
    pump_handle: Mutex<Option<JoinHandle<()>>>,
}

impl InterviewSession {
    /// Create an idle session together with its UI notification channel
    pub fn new(
        config: SessionConfig,
        backend: Box<dyn MediaBackend>,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        info!("creating interview session: {}", config.interview_id);

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (timer, timer_rx) = CountdownTimer::new(config.duration_secs);
        let media = MediaSession::new(backend, config.constraints.clone());

        let session = Self {
            config,
            timer,
            media: Arc::new(Mutex::new(media)),
            active: Arc::new(AtomicBool::new(false)),
            started_at: Utc::now(),
            events_tx,
            timer_events: Mutex::new(Some(timer_rx)),
            pump_handle: Mutex::new(None),
        };

        (session, events_rx)
    }

    pub fn interview_id(&self) -> &str {
        &self.config.interview_id
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Start the interview: acquire devices, then start the countdown
    ///
    /// On acquisition failure the session stays idle, the clock is never
    /// started, and the device error is returned (and kept visible in
    /// `stats()`). Starting an already-active or expired session is a no-op.
    pub async fn start(&self) -> Result<(), MediaError> {
        if self.active.load(Ordering::SeqCst) {
            warn!("interview {} already active", self.config.interview_id);
            return Ok(());
        }

        if self.timer.is_expired() {
            warn!(
                "interview {} has already expired, ignoring start",
                self.config.interview_id
            );
            return Ok(());
        }

        {
            let mut media = self.media.lock().await;
            media.acquire().await?;
        }

        self.active.store(true, Ordering::SeqCst);
        self.timer.start();
        self.spawn_event_pump().await;

        let _ = self.events_tx.send(SessionEvent::InterviewStarted);
        info!(
            "interview {} started ({} on the clock)",
            self.config.interview_id,
            self.timer.formatted()
        );

        Ok(())
    }

    /// End the interview: stop the clock, always release the devices
    ///
    /// Returns the final stats. Ending an idle session is a no-op that still
    /// reports current state.
    pub async fn end(&self) -> SessionStats {
        if !self.active.swap(false, Ordering::SeqCst) {
            warn!("interview {} not active", self.config.interview_id);
            return self.stats().await;
        }

        self.timer.stop();

        // Media release runs on this path no matter what happened above
        {
            let mut media = self.media.lock().await;
            media.release();
        }

        let _ = self.events_tx.send(SessionEvent::InterviewEnded);
        info!("interview {} ended", self.config.interview_id);

        self.stats().await
    }

    /// Suspend the countdown; devices stay acquired. Idle sessions: no-op
    pub fn pause_timer(&self) {
        if self.active.load(Ordering::SeqCst) {
            self.timer.pause();
        } else {
            debug!("timer pause ignored while idle");
        }
    }

    /// Continue a paused countdown. Idle sessions: no-op
    pub fn resume_timer(&self) {
        if self.active.load(Ordering::SeqCst) {
            self.timer.resume();
        } else {
            debug!("timer resume ignored while idle");
        }
    }

    /// Flip the camera track while active; returns the resulting flag
    pub async fn toggle_video(&self) -> bool {
        let mut media = self.media.lock().await;
        if self.active.load(Ordering::SeqCst) {
            media.toggle_video();
        } else {
            debug!("video toggle ignored while idle");
        }
        media.video_enabled()
    }

    /// Flip the microphone track while active; returns the resulting flag
    pub async fn toggle_audio(&self) -> bool {
        let mut media = self.media.lock().await;
        if self.active.load(Ordering::SeqCst) {
            media.toggle_audio();
        } else {
            debug!("audio toggle ignored while idle");
        }
        media.audio_enabled()
    }

    /// Get a snapshot of the session state
    pub async fn stats(&self) -> SessionStats {
        let media = self.media.lock().await;

        SessionStats {
            active: self.active.load(Ordering::SeqCst),
            started_at: self.started_at,
            remaining_secs: self.timer.remaining_secs(),
            formatted_remaining: self.timer.formatted(),
            timer_running: self.timer.is_running(),
            warning: self.timer.is_warning(),
            expired: self.timer.is_expired(),
            connected: media.connected(),
            video_enabled: media.video_enabled(),
            audio_enabled: media.audio_enabled(),
            error: media.error().map(str::to_owned),
        }
    }

    /// Spawn the task that reacts to timer notifications
    ///
    /// Warning is forwarded to the UI channel. Expiry runs the same teardown
    /// as `end()` but emits the distinct expired signal, so the caller can
    /// show its "time is up" treatment instead of a generic end. The pump
    /// survives pause/resume cycles; only the first start spawns it.
    async fn spawn_event_pump(&self) {
        let mut timer_events = self.timer_events.lock().await;
        let Some(mut timer_rx) = timer_events.take() else {
            return; // pump already running from an earlier start
        };

        let media = Arc::clone(&self.media);
        let active = Arc::clone(&self.active);
        let events_tx = self.events_tx.clone();
        let interview_id = self.config.interview_id.clone();

        let task = tokio::spawn(async move {
            while let Some(event) = timer_rx.recv().await {
                match event {
                    TimerEvent::Warning => {
                        info!("interview {}: less than a minute remaining", interview_id);
                        let _ = events_tx.send(SessionEvent::TimerWarning);
                    }
                    TimerEvent::Expired => {
                        info!("interview {}: time expired, releasing devices", interview_id);
                        active.store(false, Ordering::SeqCst);
                        {
                            let mut media = media.lock().await;
                            media.release();
                        }
                        let _ = events_tx.send(SessionEvent::TimerExpired);
                        break;
                    }
                }
            }
        });

        *self.pump_handle.lock().await = Some(task);
    }
}

impl Drop for InterviewSession {
    fn drop(&mut self) {
        // Cancel the pump; the timer's own Drop cancels its tick task, and
        // the media session's Drop releases any held stream once the pump's
        // Arc clone goes away
        if let Ok(mut handle) = self.pump_handle.try_lock() {
            if let Some(task) = handle.take() {
                task.abort();
            }
        }
    }
}
