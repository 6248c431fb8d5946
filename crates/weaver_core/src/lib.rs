//! Core data types for Story Weaver.
//!
//! This crate provides the data types passed between the story, illustration
//! and narration stages, plus the sentence segmenter that turns a story into
//! scenes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credential;
mod image;
mod inputs;
mod message;
mod prompts;
mod request;
mod role;
mod scene;

pub use credential::Credential;
pub use image::Image;
pub use inputs::StoryInputs;
pub use message::Message;
pub use prompts::{
    NARRATION_LANGUAGE, NEGATIVE_PROMPT, STORY_SYSTEM_PROMPT, illustration_prompt, story_messages,
    story_user_prompt,
};
pub use request::{
    IllustrationRequest, IllustrationRequestBuilder, SpeechRequest, StoryRequest,
    StoryRequestBuilder,
};
pub use role::Role;
pub use scene::{DEFAULT_MAX_SCENES, Scene, split_scenes};
