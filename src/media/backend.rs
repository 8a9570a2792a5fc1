use super::error::MediaError;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Kind of track within a capture stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    /// Camera video channel
    Video,
    /// Microphone audio channel
    Audio,
}

/// Which way the requested camera faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraFacing {
    /// Front-facing camera (the interviewee's face)
    User,
    /// Rear-facing camera
    Environment,
}

/// Target constraints for the camera track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoConstraints {
    /// Ideal capture width in pixels
    pub ideal_width: u32,
    /// Ideal capture height in pixels
    pub ideal_height: u32,
    /// Requested camera direction
    pub facing: CameraFacing,
}

impl Default for VideoConstraints {
    fn default() -> Self {
        Self {
            ideal_width: 1280, // 720p is plenty for an interview feed
            ideal_height: 720,
            facing: CameraFacing::User,
        }
    }
}

/// Target constraints for the microphone track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioConstraints {
    pub echo_cancellation: bool,
    pub noise_suppression: bool,
    pub auto_gain_control: bool,
}

impl Default for AudioConstraints {
    fn default() -> Self {
        Self {
            echo_cancellation: true,
            noise_suppression: true,
            auto_gain_control: true,
        }
    }
}

/// Combined audio+video capture constraints for one acquisition
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaConstraints {
    pub video: VideoConstraints,
    pub audio: AudioConstraints,
}

/// Shared state of a single device track
#[derive(Debug)]
struct TrackState {
    enabled: AtomicBool,
    stopped: AtomicBool,
}

/// Handle to one audio or video channel within a capture stream
///
/// Tracks start enabled. Disabling a track mutes/blanks it without closing
/// the device; stopping it closes the underlying channel for good.
#[derive(Debug)]
pub struct TrackHandle {
    kind: TrackKind,
    label: String,
    state: Arc<TrackState>,
}

impl TrackHandle {
    pub fn new(kind: TrackKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            state: Arc::new(TrackState {
                enabled: AtomicBool::new(true),
                stopped: AtomicBool::new(false),
            }),
        }
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled.load(Ordering::SeqCst)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.state.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.state.stopped.load(Ordering::SeqCst)
    }

    /// Close the underlying channel; idempotent
    pub fn stop(&self) {
        if !self.state.stopped.swap(true, Ordering::SeqCst) {
            debug!("track stopped: {}", self.label);
        }
    }

    /// Read-only view onto this track's state
    ///
    /// Observers stay valid after the stream is released, which is how
    /// backends and tests verify that teardown actually closed the device.
    pub fn observer(&self) -> TrackObserver {
        TrackObserver {
            state: Arc::clone(&self.state),
        }
    }
}

/// Read-only view onto a track's enabled/stopped state
#[derive(Debug, Clone)]
pub struct TrackObserver {
    state: Arc<TrackState>,
}

impl TrackObserver {
    pub fn is_enabled(&self) -> bool {
        self.state.enabled.load(Ordering::SeqCst)
    }

    pub fn is_stopped(&self) -> bool {
        self.state.stopped.load(Ordering::SeqCst)
    }
}

/// An open camera+microphone device capture
///
/// Exclusively owned by the `MediaSession` that acquired it. Dropping the
/// stream stops both tracks, so a forgotten release cannot leave the camera
/// indicator lit.
#[derive(Debug)]
pub struct CaptureStream {
    video: TrackHandle,
    audio: TrackHandle,
}

impl CaptureStream {
    pub fn new(video: TrackHandle, audio: TrackHandle) -> Self {
        debug_assert_eq!(video.kind(), TrackKind::Video);
        debug_assert_eq!(audio.kind(), TrackKind::Audio);
        Self { video, audio }
    }

    pub fn video_track(&self) -> &TrackHandle {
        &self.video
    }

    pub fn audio_track(&self) -> &TrackHandle {
        &self.audio
    }

    /// Stop every track on the stream; idempotent
    pub fn stop_all(&self) {
        self.video.stop();
        self.audio.stop();
    }
}

impl Drop for CaptureStream {
    fn drop(&mut self) {
        self.stop_all();
    }
}

/// Capture device backend trait
///
/// Implementations:
/// - Platform device capture (camera + microphone), where wired in
/// - Simulated: in-process stream for interview simulation mode and tests
#[async_trait::async_trait]
pub trait MediaBackend: Send + Sync {
    /// Open a new audio+video capture matching the given constraints
    async fn open(&mut self, constraints: &MediaConstraints) -> Result<CaptureStream, MediaError>;

    /// Get backend name for logging
    fn name(&self) -> &str;
}

/// Media source type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaSource {
    /// Real platform capture devices
    Device,
    /// In-process simulated devices (simulation mode, tests)
    Simulated,
}

/// Media backend factory
pub struct MediaBackendFactory;

impl MediaBackendFactory {
    /// Create a media backend for the given source
    pub fn create(source: MediaSource) -> Result<Box<dyn MediaBackend>, MediaError> {
        match source {
            MediaSource::Device => Err(MediaError::BackendUnavailable(
                "platform device capture is not wired on this build".to_string(),
            )),
            MediaSource::Simulated => Ok(Box::new(super::simulated::SimulatedBackend::new())),
        }
    }
}
