// Tests for configuration loading

use tempfile::TempDir;
use video_interview::{CameraFacing, Config, MediaSource, SessionConfig};

const SAMPLE: &str = r#"
[service]
name = "video-interview"

[service.http]
bind = "127.0.0.1"
port = 8740

[interview]
duration_secs = 1800

[media]
source = "simulated"

[media.video]
ideal_width = 1280
ideal_height = 720
facing = "user"

[media.audio]
echo_cancellation = true
noise_suppression = true
auto_gain_control = true
"#;

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("video-interview.toml");
    std::fs::write(&path, SAMPLE).expect("write config");

    let cfg = Config::load(dir.path().join("video-interview").to_str().unwrap())
        .expect("config should load");

    assert_eq!(cfg.service.name, "video-interview");
    assert_eq!(cfg.service.http.bind, "127.0.0.1");
    assert_eq!(cfg.service.http.port, 8740);
    assert_eq!(cfg.interview.duration_secs, 1800);
    assert_eq!(cfg.media.source, MediaSource::Simulated);

    let constraints = cfg.constraints();
    assert_eq!(constraints.video.ideal_width, 1280);
    assert_eq!(constraints.video.ideal_height, 720);
    assert_eq!(constraints.video.facing, CameraFacing::User);
    assert!(constraints.audio.echo_cancellation);
    assert!(constraints.audio.noise_suppression);
    assert!(constraints.audio.auto_gain_control);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("does-not-exist");

    assert!(Config::load(path.to_str().unwrap()).is_err());
}

#[test]
fn test_session_config_defaults() {
    let config = SessionConfig::default();

    assert!(config.interview_id.starts_with("interview-"));
    assert_eq!(config.duration_secs, 1800, "default interview is 30 minutes");
    assert_eq!(config.constraints.video.ideal_width, 1280);
    assert_eq!(config.constraints.video.ideal_height, 720);
}
