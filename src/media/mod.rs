//! Camera and microphone capture lifecycle
//!
//! This module owns the device-facing half of an interview session:
//! - `MediaBackend`: the capture device abstraction (trait + factory)
//! - `SimulatedBackend`: in-process backend for simulation mode and tests
//! - `MediaSession`: exclusive owner of one acquired capture stream, with
//!   per-track enable toggles and a single user-visible error slot

pub mod backend;
pub mod error;
pub mod session;
pub mod simulated;

pub use backend::{
    AudioConstraints, CameraFacing, CaptureStream, MediaBackend, MediaBackendFactory,
    MediaConstraints, MediaSource, TrackHandle, TrackKind, TrackObserver, VideoConstraints,
};
pub use error::MediaError;
pub use session::MediaSession;
pub use simulated::{SimulatedBackend, SimulatedBackendObserver};
