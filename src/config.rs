use crate::media::{AudioConstraints, MediaConstraints, MediaSource, VideoConstraints};
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub interview: InterviewConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct InterviewConfig {
    pub duration_secs: u32,
}

#[derive(Debug, Deserialize)]
pub struct MediaConfig {
    pub source: MediaSource,
    pub video: VideoConstraints,
    pub audio: AudioConstraints,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Capture constraints assembled from the media section
    pub fn constraints(&self) -> MediaConstraints {
        MediaConstraints {
            video: self.media.video.clone(),
            audio: self.media.audio.clone(),
        }
    }
}
