use thiserror::Error;

/// Device-acquisition failures surfaced by a media backend
///
/// These are always recovered into a user-visible message; they never crash
/// a session, and a running countdown is never aborted by a later device
/// fault. Denial and absence are deliberately distinct so the user can tell
/// "grant permission" apart from "plug in a camera".
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("camera and microphone access was denied; check your browser or OS permissions")]
    PermissionDenied,

    #[error("no camera or microphone was found on this device")]
    DeviceNotFound,

    #[error("the camera or microphone is already in use by another application")]
    DeviceBusy,

    #[error("the requested capture settings are not supported by this device")]
    UnsupportedConstraints,

    #[error("no capture backend is available: {0}")]
    BackendUnavailable(String),
}
