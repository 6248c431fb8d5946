//! Trait definitions for hosted backends.

use async_trait::async_trait;
use weaver_core::{Credential, IllustrationRequest, Image, SpeechRequest, StoryRequest};
use weaver_error::WeaverResult;

/// A hosted chat-completion model that writes the story.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Run one chat completion and return the raw generated text.
    async fn complete(&self, credential: &Credential, req: &StoryRequest) -> WeaverResult<String>;

    /// Provider name (e.g., "huggingface").
    fn provider_name(&self) -> &'static str;
}

/// A hosted text-to-image model that draws one scene per call.
#[async_trait]
pub trait IllustrationDriver: Send + Sync {
    /// Generate exactly one image.
    async fn text_to_image(
        &self,
        credential: &Credential,
        req: &IllustrationRequest,
    ) -> WeaverResult<Image>;

    /// Provider name (e.g., "huggingface").
    fn provider_name(&self) -> &'static str;
}

/// A speech synthesizer producing MP3 audio.
#[async_trait]
pub trait SpeechDriver: Send + Sync {
    /// Synthesize the request into MP3-encoded bytes.
    async fn synthesize(&self, req: &SpeechRequest) -> WeaverResult<Vec<u8>>;

    /// Provider name (e.g., "google-translate").
    fn provider_name(&self) -> &'static str;
}
