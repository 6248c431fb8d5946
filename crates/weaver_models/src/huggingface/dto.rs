//! HuggingFace Inference API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A message in an OpenAI-compatible chat request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Message content
    pub content: String,
}

/// OpenAI-compatible chat completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Streaming is never requested
    #[builder(default = "false")]
    stream: bool,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// OpenAI-compatible chat completion response.
///
/// Only `choices` is required; HuggingFace omits some bookkeeping fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Unique identifier for the completion
    #[serde(default)]
    pub id: Option<String>,
    /// Model used for completion
    #[serde(default)]
    pub model: Option<String>,
    /// Generated completions
    pub choices: Vec<Choice>,
    /// Token usage statistics
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// A completion choice
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// Index of this choice
    #[serde(default)]
    pub index: u32,
    /// The generated message
    pub message: ChoiceMessage,
    /// Reason why generation finished
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message in a choice
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /// Role of the message (typically "assistant")
    #[serde(default)]
    pub role: Option<String>,
    /// Generated content
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total tokens used
    #[serde(default)]
    pub total_tokens: u32,
}

/// Text-to-image task parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TextToImageParameters {
    /// What the image should avoid
    negative_prompt: String,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

/// Text-to-image task request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TextToImageRequest {
    /// Positive prompt
    inputs: String,
    /// Generation parameters
    parameters: TextToImageParameters,
}

impl TextToImageRequest {
    /// Assemble a request body.
    pub fn new(
        inputs: impl Into<String>,
        negative_prompt: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            inputs: inputs.into(),
            parameters: TextToImageParameters {
                negative_prompt: negative_prompt.into(),
                width,
                height,
            },
        }
    }
}
