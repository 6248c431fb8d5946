//! Request types for the three hosted backends.

use crate::Message;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A chat-completion request for the story text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct StoryRequest {
    /// Model identifier
    model: String,
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: u32,
}

impl StoryRequest {
    /// Creates a new builder for `StoryRequest`.
    pub fn builder() -> StoryRequestBuilder {
        StoryRequestBuilder::default()
    }
}

/// A text-to-image request for one scene.
///
/// # Examples
///
/// ```
/// use weaver_core::IllustrationRequest;
///
/// let request = IllustrationRequest::builder()
///     .model("stabilityai/stable-diffusion-xl-base-1.0")
///     .prompt("a forest")
///     .negative_prompt("blurry")
///     .width(1024u32)
///     .height(768u32)
///     .build()
///     .unwrap();
/// assert_eq!(*request.width(), 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct IllustrationRequest {
    /// Model identifier
    model: String,
    /// Positive prompt
    prompt: String,
    /// Negative prompt
    negative_prompt: String,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl IllustrationRequest {
    /// Creates a new builder for `IllustrationRequest`.
    pub fn builder() -> IllustrationRequestBuilder {
        IllustrationRequestBuilder::default()
    }
}

/// A text-to-speech request for the whole story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SpeechRequest {
    /// Text to narrate
    text: String,
    /// Language code (e.g. "en")
    language: String,
}

impl SpeechRequest {
    /// Create a speech request.
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }
}
