//! Story narration.

use derive_getters::Getters;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, instrument};
use weaver_config::NarrationSettings;
use weaver_core::SpeechRequest;
use weaver_error::WeaverResult;
use weaver_interface::SpeechDriver;
use weaver_storage::NarrationFile;

/// Speaks the story and writes it to the narration file.
#[derive(Clone, Getters)]
pub struct NarrationSynthesizer {
    #[getter(skip)]
    driver: Arc<dyn SpeechDriver>,
    /// Destination file
    file: NarrationFile,
    /// Spoken language code
    language: String,
}

impl std::fmt::Debug for NarrationSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrationSynthesizer")
            .field("provider", &self.driver.provider_name())
            .field("file", &self.file)
            .field("language", &self.language)
            .finish()
    }
}

impl NarrationSynthesizer {
    /// Create a synthesizer writing to `file`.
    pub fn new(
        driver: Arc<dyn SpeechDriver>,
        file: NarrationFile,
        language: impl Into<String>,
    ) -> Self {
        Self {
            driver,
            file,
            language: language.into(),
        }
    }

    /// Create a synthesizer from the `[narration]` settings.
    pub fn from_settings(driver: Arc<dyn SpeechDriver>, settings: &NarrationSettings) -> Self {
        Self::new(
            driver,
            NarrationFile::new(settings.audio_path.clone()),
            settings.language.clone(),
        )
    }

    /// Narrate `text`, overwriting the narration file.
    ///
    /// # Errors
    ///
    /// Returns the speech or storage failure. The file may be missing or
    /// stale afterwards.
    #[instrument(skip(self, text), fields(path = %self.file.path().display(), text_len = text.len()))]
    pub async fn narrate(&self, text: &str) -> WeaverResult<PathBuf> {
        let request = SpeechRequest::new(text, self.language.clone());
        let audio = self.driver.synthesize(&request).await?;
        let path = self.file.write(&audio).await?;
        debug!(bytes = audio.len(), "Narration recorded");
        Ok(path)
    }
}
