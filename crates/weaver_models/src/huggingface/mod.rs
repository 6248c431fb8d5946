//! HuggingFace Inference API integration.

mod chat;
mod conversions;
mod dto;
mod image;

pub use chat::HuggingFaceChatDriver;
pub use dto::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    Choice, ChoiceMessage, TextToImageParameters, TextToImageRequest, Usage,
};
pub use image::HuggingFaceImageDriver;

/// Provider name reported in errors and spans.
pub(crate) const PROVIDER: &str = "huggingface";
