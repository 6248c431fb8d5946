//! Story text generation.

use derive_getters::Getters;
use std::sync::Arc;
use tracing::{debug, instrument};
use weaver_config::StorySettings;
use weaver_core::{Credential, StoryRequest, story_messages};
use weaver_error::{BackendError, BackendErrorKind, WeaverResult};
use weaver_interface::StoryDriver;

/// Turns a story idea into story text with one chat completion.
#[derive(Clone, Getters)]
pub struct NarrativeGenerator {
    #[getter(skip)]
    driver: Arc<dyn StoryDriver>,
    /// Chat model identifier
    model: String,
    /// Completion length cap
    max_tokens: u32,
}

impl std::fmt::Debug for NarrativeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrativeGenerator")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl NarrativeGenerator {
    /// Create a generator for `model`.
    pub fn new(driver: Arc<dyn StoryDriver>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            driver,
            model: model.into(),
            max_tokens,
        }
    }

    /// Create a generator from the `[story]` settings.
    pub fn from_settings(driver: Arc<dyn StoryDriver>, settings: &StorySettings) -> Self {
        Self::new(driver, settings.model.clone(), settings.max_tokens)
    }

    /// Write a story for `idea`.
    ///
    /// # Errors
    ///
    /// Propagates backend failures, and rejects completions that are blank
    /// once trimmed.
    #[instrument(skip(self, credential, idea), fields(model = %self.model, idea_len = idea.len()))]
    pub async fn generate(&self, credential: &Credential, idea: &str) -> WeaverResult<String> {
        let request = StoryRequest::builder()
            .model(self.model.clone())
            .messages(story_messages(idea))
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| {
                BackendError::new(
                    self.driver.provider_name(),
                    BackendErrorKind::InvalidRequest(format!("Failed to build story request: {}", e)),
                )
            })?;

        let text = self.driver.complete(credential, &request).await?;
        let text = text.trim();

        if text.is_empty() {
            return Err(BackendError::new(
                self.driver.provider_name(),
                BackendErrorKind::EmptyResponse("story text was empty".to_string()),
            )
            .into());
        }

        debug!(story_len = text.len(), "Story generated");
        Ok(text.to_string())
    }
}
