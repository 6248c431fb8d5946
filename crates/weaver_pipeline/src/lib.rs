//! Story Weaver generation pipeline.
//!
//! One run takes the three form inputs through four stages:
//!
//! 1. [`NarrativeGenerator`] writes the story
//! 2. [`split_scenes`](weaver_core::split_scenes) cuts it into scenes
//! 3. [`IllustrationGenerator`] draws one image per scene
//! 4. [`NarrationSynthesizer`] records the narration
//!
//! [`StoryWeaver`] drives the stages, reports every step to a
//! [`StatusReporter`](weaver_interface::StatusReporter), and returns a
//! [`RunOutcome`] that the caller folds into its [`SessionState`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod illustration;
mod narration;
mod narrative;
mod session;
mod weaver;

pub use illustration::{IllustrationGenerator, IllustrationOutcome};
pub use narration::NarrationSynthesizer;
pub use narrative::NarrativeGenerator;
pub use session::{RunOutcome, SessionState};
pub use weaver::{
    AUDIO_ERROR_PREFIX, IMAGE_ERROR_PREFIX, MISSING_FIELDS_WARNING, STORY_ERROR_PREFIX,
    StoryWeaver,
};
