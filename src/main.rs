use anyhow::Result;
use clap::Parser;
use tracing::info;
use video_interview::{create_router, AppState, Config};

#[derive(Debug, Parser)]
#[command(name = "video-interview", about = "Video interview session service")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/video-interview")]
    config: String,

    /// Override the HTTP port from the configuration
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v0.1.0", cfg.service.name);
    info!(
        "default interview duration: {}s, media source: {:?}",
        cfg.interview.duration_secs, cfg.media.source
    );

    let state = AppState::new(
        cfg.interview.duration_secs,
        cfg.constraints(),
        cfg.media.source,
    );
    let router = create_router(state);

    let port = args.port.unwrap_or(cfg.service.http.port);
    let addr = format!("{}:{}", cfg.service.http.bind, port);
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
