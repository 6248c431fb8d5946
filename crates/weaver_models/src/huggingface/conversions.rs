//! Type conversions between Story Weaver and HuggingFace formats.

use super::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, PROVIDER, TextToImageRequest};
use weaver_core::{IllustrationRequest, StoryRequest};
use weaver_error::{BackendError, BackendErrorKind, WeaverResult};

/// Converts a story request to the chat completion format.
pub fn to_chat_request(req: &StoryRequest) -> WeaverResult<ChatCompletionRequest> {
    let messages = req
        .messages()
        .iter()
        .map(|m| ChatMessage {
            role: m.role.as_str().to_string(),
            content: m.content.clone(),
        })
        .collect::<Vec<_>>();

    ChatCompletionRequest::builder()
        .model(req.model().clone())
        .messages(messages)
        .max_tokens(*req.max_tokens())
        .build()
        .map_err(|e| {
            BackendError::new(
                PROVIDER,
                BackendErrorKind::InvalidRequest(format!("Failed to build chat request: {}", e)),
            )
            .into()
        })
}

/// Extracts the first choice's text.
pub fn from_chat_response(resp: &ChatCompletionResponse) -> WeaverResult<String> {
    let choice = resp.choices.first().ok_or_else(|| {
        BackendError::new(
            PROVIDER,
            BackendErrorKind::EmptyResponse("no choices in chat completion".to_string()),
        )
    })?;

    choice.message.content.clone().ok_or_else(|| {
        BackendError::new(
            PROVIDER,
            BackendErrorKind::EmptyResponse("first choice has no content".to_string()),
        )
        .into()
    })
}

/// Converts an illustration request to the text-to-image body.
pub fn to_image_request(req: &IllustrationRequest) -> TextToImageRequest {
    TextToImageRequest::new(
        req.prompt().clone(),
        req.negative_prompt().clone(),
        *req.width(),
        *req.height(),
    )
}

/// Identify an image format from its leading bytes.
pub fn sniff_mime(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        Some("image/webp")
    } else if data.starts_with(b"GIF8") {
        Some("image/gif")
    } else {
        None
    }
}
