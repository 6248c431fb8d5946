//! The per-run orchestrator.

use crate::{IllustrationGenerator, NarrationSynthesizer, NarrativeGenerator, RunOutcome, SessionState};
use derive_getters::Getters;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use weaver_config::WeaverConfig;
use weaver_core::{Credential, DEFAULT_MAX_SCENES, StoryInputs, split_scenes};
use weaver_interface::{IllustrationDriver, Phase, SpeechDriver, StatusReporter, StoryDriver};

/// Warning shown when a required field is blank.
pub const MISSING_FIELDS_WARNING: &str = "Please fill in all the fields to begin.";
/// Prefix for story backend failures.
pub const STORY_ERROR_PREFIX: &str = "Story Generation Error: ";
/// Prefix for illustration backend failures.
pub const IMAGE_ERROR_PREFIX: &str = "Image Generation Error: ";
/// Prefix for narration failures.
pub const AUDIO_ERROR_PREFIX: &str = "Audio Generation Error: ";

const WRITING_LABEL: &str = "Writing a compelling story...";
const RECORDING_LABEL: &str = "Recording the narration...";
const COMPLETE_LABEL: &str = "Story complete!";

/// Runs the story, illustration and narration stages for one trigger.
///
/// The weaver holds no per-session state. Each [`run`](Self::run) returns a
/// [`RunOutcome`] for the caller to store.
#[derive(Debug, Clone, Getters)]
pub struct StoryWeaver {
    /// Story stage
    narrative: NarrativeGenerator,
    /// Illustration stage
    illustration: IllustrationGenerator,
    /// Narration stage
    narration: NarrationSynthesizer,
    /// Most scenes illustrated per run
    max_scenes: usize,
}

impl StoryWeaver {
    /// Assemble a weaver from its stages, illustrating at most
    /// [`DEFAULT_MAX_SCENES`] scenes.
    pub fn new(
        narrative: NarrativeGenerator,
        illustration: IllustrationGenerator,
        narration: NarrationSynthesizer,
    ) -> Self {
        Self {
            narrative,
            illustration,
            narration,
            max_scenes: DEFAULT_MAX_SCENES,
        }
    }

    /// Change the scene cap.
    pub fn with_max_scenes(mut self, max_scenes: usize) -> Self {
        self.max_scenes = max_scenes;
        self
    }

    /// Assemble a weaver from configuration and the three backends.
    pub fn from_config(
        config: &WeaverConfig,
        story: Arc<dyn StoryDriver>,
        images: Arc<dyn IllustrationDriver>,
        speech: Arc<dyn SpeechDriver>,
    ) -> Self {
        Self::new(
            NarrativeGenerator::from_settings(story, &config.story),
            IllustrationGenerator::from_settings(images, &config.illustration),
            NarrationSynthesizer::from_settings(speech, &config.narration),
        )
        .with_max_scenes(config.illustration.max_scenes)
    }

    /// Run every stage for `inputs`.
    ///
    /// Blank inputs are rejected before any backend is called. A story
    /// failure ends the run. Illustration and narration failures are
    /// reported and the run still completes with whatever was produced.
    #[instrument(skip_all, fields(max_scenes = self.max_scenes))]
    pub async fn run(&self, inputs: &StoryInputs, reporter: &mut dyn StatusReporter) -> RunOutcome {
        reporter.phase(Phase::Validating);

        let credential = Credential::new(inputs.credential.expose().trim());
        let idea = inputs.idea.trim();
        let character = inputs.character.trim();

        let trimmed = StoryInputs {
            credential,
            idea: idea.to_string(),
            character: character.to_string(),
        };
        if let Err(e) = trimmed.validate() {
            info!(field = e.field, "Run rejected");
            reporter.warning(MISSING_FIELDS_WARNING);
            reporter.phase(Phase::Idle);
            return RunOutcome::Rejected(e.into());
        }
        let credential = &trimmed.credential;

        reporter.phase(Phase::GeneratingStory);
        reporter.label(WRITING_LABEL);
        let story = match self.narrative.generate(credential, idea).await {
            Ok(story) => story,
            Err(e) => {
                warn!(error = %e, "Story generation failed");
                reporter.error(&format!("{}{}", STORY_ERROR_PREFIX, e.user_message()));
                reporter.phase(Phase::Idle);
                return RunOutcome::StoryFailed(e);
            }
        };

        reporter.phase(Phase::SegmentingAndIllustrating);
        let scenes = split_scenes(&story, self.max_scenes);
        info!(scenes = scenes.len(), "Story segmented");
        let illustrated = self
            .illustration
            .generate(credential, character, &scenes, reporter)
            .await;
        if let Some(e) = &illustrated.error {
            reporter.error(&format!("{}{}", IMAGE_ERROR_PREFIX, e.user_message()));
        }

        reporter.phase(Phase::Narrating);
        reporter.label(RECORDING_LABEL);
        let audio_file_path = match self.narration.narrate(&story).await {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "Narration failed");
                reporter.error(&format!("{}{}", AUDIO_ERROR_PREFIX, e.user_message()));
                None
            }
        };

        reporter.phase(Phase::Complete);
        reporter.label(COMPLETE_LABEL);
        info!(
            images = illustrated.images.len(),
            narrated = audio_file_path.is_some(),
            "Run complete"
        );

        let state = SessionState {
            story_text: story,
            story_images: illustrated.images,
            audio_file_path,
            story_generated: true,
        };
        reporter.phase(Phase::Idle);
        RunOutcome::Completed(state)
    }
}
