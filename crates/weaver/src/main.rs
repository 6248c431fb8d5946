//! Story Weaver web server binary.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use weaver::observability::{ObservabilityConfig, init_observability};
use weaver::{
    AppState, GoogleTtsDriver, HuggingFaceChatDriver, HuggingFaceImageDriver, PageRenderer,
    SessionStore, StoryWeaver, WeaverConfig, serve,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "AI Story Weaver web server", long_about = None)]
struct Cli {
    /// Configuration file to use instead of the layered defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides `server.bind_addr`)
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => WeaverConfig::from_file(path)?,
        None => WeaverConfig::load()?,
    };

    init_observability(&ObservabilityConfig::from(&config.logging))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!(
        story_model = %config.story.model,
        image_model = %config.illustration.model,
        audio_path = %config.narration.audio_path.display(),
        "Starting Story Weaver"
    );

    let client = reqwest::Client::new();
    let story = HuggingFaceChatDriver::with_client(client.clone(), &config.story.chat_base_url);
    let images =
        HuggingFaceImageDriver::with_client(client.clone(), &config.illustration.image_base_url);
    let speech = GoogleTtsDriver::with_client(client, &config.narration.tts_base_url)
        .with_max_chunk_chars(config.narration.max_chunk_chars);

    let weaver = StoryWeaver::from_config(
        &config,
        Arc::new(story),
        Arc::new(images),
        Arc::new(speech),
    );

    let state = AppState::new(
        Arc::new(weaver),
        SessionStore::with_capacity(config.server.max_sessions),
        Arc::new(PageRenderer::new()?),
    );

    let addr = cli.bind.unwrap_or_else(|| config.server.bind_addr.clone());
    serve(&addr, state).await?;
    Ok(())
}
