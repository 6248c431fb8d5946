//! Hosted backend integrations for Story Weaver.
//!
//! Each provider lives behind its own feature flag:
//!
//! - **HuggingFace** chat completion and text-to-image - `huggingface` feature
//! - **Google Translate** speech synthesis - `google` feature
//!
//! # Example
//!
//! ```no_run
//! use weaver_core::{Credential, StoryRequest, story_messages};
//! use weaver_interface::StoryDriver;
//! use weaver_models::HuggingFaceChatDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = HuggingFaceChatDriver::new("https://router.huggingface.co/hf-inference/models");
//! let request = StoryRequest::builder()
//!     .model("HuggingFaceH4/zephyr-7b-beta")
//!     .messages(story_messages("A robot discovering an ancient, magical forest."))
//!     .max_tokens(300u32)
//!     .build()?;
//! let story = driver.complete(&Credential::new("hf_..."), &request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod response;

#[cfg(feature = "huggingface")]
mod huggingface;

#[cfg(feature = "google")]
mod google;

#[cfg(feature = "huggingface")]
pub use huggingface::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    Choice, ChoiceMessage, HuggingFaceChatDriver, HuggingFaceImageDriver, TextToImageParameters,
    TextToImageRequest, Usage,
};

#[cfg(feature = "google")]
pub use google::{DEFAULT_MAX_CHUNK_CHARS, GoogleTtsDriver, chunk_text};
