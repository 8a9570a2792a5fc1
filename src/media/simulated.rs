use super::backend::{CaptureStream, MediaBackend, MediaConstraints, TrackHandle, TrackKind, TrackObserver};
use super::error::MediaError;
use std::sync::{Arc, Mutex};
use tracing::info;

/// In-process capture backend for interview simulation mode
///
/// Produces capture streams whose tracks behave like real device tracks
/// (enable/disable, stop) without touching any hardware. A fault can be
/// queued to make the next `open()` fail with a specific device error,
/// which models the permission-prompt flow: the first attempt is denied,
/// the retry after the user grants access succeeds.
pub struct SimulatedBackend {
    /// Error returned by the next `open()` call, consumed once
    fail_next: Option<MediaError>,

    /// Observers for every track this backend has handed out
    issued: Arc<Mutex<Vec<TrackObserver>>>,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self {
            fail_next: None,
            issued: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Backend whose first `open()` fails with the given error
    pub fn failing(error: MediaError) -> Self {
        let mut backend = Self::new();
        backend.fail_next = Some(error);
        backend
    }

    /// Queue an error for the next `open()` call
    pub fn deny_next(&mut self, error: MediaError) {
        self.fail_next = Some(error);
    }

    /// Handle for inspecting tracks after the backend has been handed off
    pub fn observer(&self) -> SimulatedBackendObserver {
        SimulatedBackendObserver {
            issued: Arc::clone(&self.issued),
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MediaBackend for SimulatedBackend {
    async fn open(&mut self, constraints: &MediaConstraints) -> Result<CaptureStream, MediaError> {
        if let Some(error) = self.fail_next.take() {
            return Err(error);
        }

        let video = TrackHandle::new(
            TrackKind::Video,
            format!(
                "Simulated Camera ({}x{}, {:?})",
                constraints.video.ideal_width,
                constraints.video.ideal_height,
                constraints.video.facing
            ),
        );
        let audio = TrackHandle::new(TrackKind::Audio, "Simulated Microphone");

        info!(
            "simulated capture opened: {} / {}",
            video.label(),
            audio.label()
        );

        {
            let mut issued = self.issued.lock().unwrap();
            issued.push(video.observer());
            issued.push(audio.observer());
        }

        Ok(CaptureStream::new(video, audio))
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

/// Inspection handle onto a `SimulatedBackend`
///
/// Stays usable after the backend itself has been boxed into a session,
/// which is how tests assert that every issued track was stopped.
#[derive(Clone)]
pub struct SimulatedBackendObserver {
    issued: Arc<Mutex<Vec<TrackObserver>>>,
}

impl SimulatedBackendObserver {
    /// Observers for every track handed out so far
    pub fn issued_tracks(&self) -> Vec<TrackObserver> {
        self.issued.lock().unwrap().clone()
    }
}
