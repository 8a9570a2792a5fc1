use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;
use video_interview::{InterviewSession, SessionConfig, SimulatedBackend};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("🎬 Starting a short simulated interview");

    // 1. Short countdown so the warning and expiry show up quickly.
    //    Anything at or under the 60s threshold warns on the first tick.
    let config = SessionConfig {
        interview_id: format!("demo-{}", chrono::Utc::now().timestamp()),
        duration_secs: 5,
        ..SessionConfig::default()
    };

    // 2. Create the session on the simulated capture backend
    let backend = SimulatedBackend::new();
    let probe = backend.observer();
    let (session, mut events) = InterviewSession::new(config, Box::new(backend));

    // 3. Print UI notifications as they arrive
    let event_task = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            info!("📣 event: {:?}", event);
        }
    });

    // 4. Start: acquires camera+microphone, then starts the clock
    session.start().await?;
    info!("clock: {}", session.stats().await.formatted_remaining);

    // 5. Mute the camera mid-interview, then bring it back
    sleep(Duration::from_secs(2)).await;
    let enabled = session.toggle_video().await;
    info!("video enabled: {}", enabled);
    sleep(Duration::from_secs(1)).await;
    let enabled = session.toggle_video().await;
    info!("video enabled: {}", enabled);

    // 6. Let the countdown run out; expiry releases the devices on its own
    sleep(Duration::from_secs(3)).await;

    let stats = session.stats().await;
    info!(
        "final state: active={} connected={} expired={} clock={}",
        stats.active, stats.connected, stats.expired, stats.formatted_remaining
    );

    for (i, track) in probe.issued_tracks().iter().enumerate() {
        info!("track {}: stopped={}", i, track.is_stopped());
    }

    drop(session);
    event_task.abort();

    info!("✅ Demo complete");

    Ok(())
}
