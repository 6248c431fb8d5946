//! Trait definitions for Story Weaver.
//!
//! Each hosted backend sits behind one driver trait, and the pipeline talks
//! to the user through a [`StatusReporter`].

mod status;
mod traits;

pub use status::{Phase, Progress, StatusReporter};
pub use traits::{IllustrationDriver, SpeechDriver, StoryDriver};
