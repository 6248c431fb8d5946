//! Per-session results.

use std::path::PathBuf;
use weaver_core::Image;
use weaver_error::WeaverError;

/// What one session last generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Full story text
    pub story_text: String,
    /// Illustrations in scene order; may be shorter than the scene list
    pub story_images: Vec<Image>,
    /// Narration file, when narration succeeded
    pub audio_file_path: Option<PathBuf>,
    /// True once any run has completed
    pub story_generated: bool,
}

impl SessionState {
    /// Fold a run into the session.
    ///
    /// Only a completed run replaces the state; rejected and failed runs
    /// leave the previous result on screen. Returns true if the state changed.
    pub fn apply(&mut self, outcome: RunOutcome) -> bool {
        match outcome {
            RunOutcome::Completed(state) => {
                *self = state;
                true
            }
            RunOutcome::Rejected(_) | RunOutcome::StoryFailed(_) => false,
        }
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// A required input was blank; nothing was sent anywhere
    Rejected(WeaverError),
    /// The story backend failed; later stages never ran
    StoryFailed(WeaverError),
    /// The run reached the end, possibly with missing images or audio
    Completed(SessionState),
}

impl RunOutcome {
    /// The completed state, if the run completed.
    pub fn state(&self) -> Option<&SessionState> {
        match self {
            RunOutcome::Completed(state) => Some(state),
            _ => None,
        }
    }

    /// True when the run completed.
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }
}
