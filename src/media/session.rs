use super::backend::{CaptureStream, MediaBackend, MediaConstraints};
use super::error::MediaError;
use tracing::{debug, info, warn};

/// Exclusive owner of one camera+microphone capture
///
/// Holds at most one acquired stream at a time and exposes exactly one
/// user-visible error. No other component may retain a stream reference
/// across a release/acquire cycle; anything that needs to watch track state
/// takes a `TrackObserver` instead.
pub struct MediaSession {
    /// Device backend used for acquisition
    backend: Box<dyn MediaBackend>,

    /// Constraints requested on every acquisition
    constraints: MediaConstraints,

    /// The held capture, if connected
    stream: Option<CaptureStream>,

    /// Mirror of the video track's enabled flag
    video_enabled: bool,

    /// Mirror of the audio track's enabled flag
    audio_enabled: bool,

    /// Last device error shown to the user; cleared on success and release
    error: Option<String>,
}

impl MediaSession {
    pub fn new(backend: Box<dyn MediaBackend>, constraints: MediaConstraints) -> Self {
        Self {
            backend,
            constraints,
            stream: None,
            video_enabled: true,
            audio_enabled: true,
            error: None,
        }
    }

    /// Request a new audio+video capture from the backend
    ///
    /// On success the stream is held, both tracks start enabled, and any
    /// prior error is cleared. On failure the error slot is set to a
    /// human-readable message and no stream is held; the caller may retry
    /// once the user has granted permission or changed devices.
    pub async fn acquire(&mut self) -> Result<(), MediaError> {
        if self.stream.is_some() {
            warn!("media already acquired, ignoring");
            return Ok(());
        }

        info!(
            "acquiring media devices via {} backend ({}x{} video)",
            self.backend.name(),
            self.constraints.video.ideal_width,
            self.constraints.video.ideal_height
        );

        match self.backend.open(&self.constraints).await {
            Ok(stream) => {
                self.stream = Some(stream);
                self.video_enabled = true;
                self.audio_enabled = true;
                self.error = None;
                info!("media devices acquired");
                Ok(())
            }
            Err(error) => {
                warn!("media acquisition failed: {}", error);
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Stop every track and drop the held stream; idempotent
    pub fn release(&mut self) {
        if let Some(stream) = self.stream.take() {
            info!("releasing capture stream");
            stream.stop_all();
        }
        self.error = None;
    }

    /// Flip the camera track's enabled flag; no-op with no stream held
    pub fn toggle_video(&mut self) {
        if let Some(stream) = &self.stream {
            let track = stream.video_track();
            let enabled = !track.is_enabled();
            track.set_enabled(enabled);
            self.video_enabled = enabled;
            debug!("video track enabled: {}", enabled);
        }
    }

    /// Flip the microphone track's enabled flag; no-op with no stream held
    pub fn toggle_audio(&mut self) {
        if let Some(stream) = &self.stream {
            let track = stream.audio_track();
            let enabled = !track.is_enabled();
            track.set_enabled(enabled);
            self.audio_enabled = enabled;
            debug!("audio track enabled: {}", enabled);
        }
    }

    pub fn connected(&self) -> bool {
        self.stream.is_some()
    }

    pub fn video_enabled(&self) -> bool {
        self.video_enabled
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The held capture stream, if connected
    pub fn stream(&self) -> Option<&CaptureStream> {
        self.stream.as_ref()
    }
}

impl Drop for MediaSession {
    fn drop(&mut self) {
        // A held-open device indicator after the session is gone is a
        // correctness bug, not cosmetic; release unconditionally
        self.release();
    }
}
