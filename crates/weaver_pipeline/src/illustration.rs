//! Per-scene illustration.

use derive_getters::Getters;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use weaver_config::IllustrationSettings;
use weaver_core::{
    Credential, IllustrationRequest, Image, NEGATIVE_PROMPT, Scene, illustration_prompt,
};
use weaver_error::{BackendError, BackendErrorKind, WeaverError, WeaverResult};
use weaver_interface::{IllustrationDriver, Progress, StatusReporter};

/// Images drawn before the loop finished or stopped.
///
/// `images[i]` illustrates scene `i + 1`. When `error` is set the loop
/// stopped at the first failure and `images` holds what came before it.
#[derive(Debug, Default)]
pub struct IllustrationOutcome {
    /// Images in scene order
    pub images: Vec<Image>,
    /// The failure that stopped the loop, if any
    pub error: Option<WeaverError>,
}

/// Draws one image per scene, in order, one request at a time.
#[derive(Clone, Getters)]
pub struct IllustrationGenerator {
    #[getter(skip)]
    driver: Arc<dyn IllustrationDriver>,
    /// Text-to-image model identifier
    model: String,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl std::fmt::Debug for IllustrationGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IllustrationGenerator")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.model)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl IllustrationGenerator {
    /// Create a generator for `model` at `width` x `height`.
    pub fn new(
        driver: Arc<dyn IllustrationDriver>,
        model: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            driver,
            model: model.into(),
            width,
            height,
        }
    }

    /// Create a generator from the `[illustration]` settings.
    pub fn from_settings(
        driver: Arc<dyn IllustrationDriver>,
        settings: &IllustrationSettings,
    ) -> Self {
        Self::new(
            driver,
            settings.model.clone(),
            settings.width,
            settings.height,
        )
    }

    fn request(&self, character: &str, scene: &Scene) -> WeaverResult<IllustrationRequest> {
        IllustrationRequest::builder()
            .model(self.model.clone())
            .prompt(illustration_prompt(character, &scene.text))
            .negative_prompt(NEGATIVE_PROMPT)
            .width(self.width)
            .height(self.height)
            .build()
            .map_err(|e| {
                BackendError::new(
                    self.driver.provider_name(),
                    BackendErrorKind::InvalidRequest(format!(
                        "Failed to build illustration request: {}",
                        e
                    )),
                )
                .into()
            })
    }

    /// Illustrate `scenes` with `character` blended into every prompt.
    ///
    /// The reporter sees `Creating illustration i of n...` before each
    /// request and a [`Progress`] after each image. Progress is cleared
    /// when the loop ends, whether or not it failed.
    #[instrument(skip_all, fields(model = %self.model, scenes = scenes.len()))]
    pub async fn generate(
        &self,
        credential: &Credential,
        character: &str,
        scenes: &[Scene],
        reporter: &mut dyn StatusReporter,
    ) -> IllustrationOutcome {
        let total = scenes.len();
        let mut outcome = IllustrationOutcome::default();

        for scene in scenes {
            reporter.label(&format!(
                "Creating illustration {} of {}...",
                scene.number, total
            ));

            let result = match self.request(character, scene) {
                Ok(request) => self.driver.text_to_image(credential, &request).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(image) => {
                    debug!(scene = scene.number, size = image.data.len(), "Scene illustrated");
                    outcome.images.push(image);
                    reporter.progress(Progress::new(outcome.images.len(), total));
                }
                Err(e) => {
                    warn!(scene = scene.number, error = %e, "Illustration failed");
                    outcome.error = Some(e);
                    break;
                }
            }
        }

        reporter.clear_progress();
        outcome
    }
}
