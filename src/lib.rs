pub mod config;
pub mod http;
pub mod media;
pub mod session;
pub mod timer;

pub use config::Config;
pub use http::{create_router, AppState};
pub use media::{
    AudioConstraints, CameraFacing, CaptureStream, MediaBackend, MediaBackendFactory,
    MediaConstraints, MediaError, MediaSession, MediaSource, SimulatedBackend, TrackKind,
    TrackObserver, VideoConstraints,
};
pub use session::{InterviewSession, SessionConfig, SessionEvent, SessionStats};
pub use timer::{format_clock, Countdown, CountdownTimer, TimerEvent};
