//! HTML rendering of the form and the session result.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use minijinja::Environment;
use serde::Serialize;
use weaver_error::{ServerError, ServerErrorKind, WeaverResult};
use weaver_pipeline::SessionState;

use crate::{Notice, StatusLog, StatusStep};

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");
const PAGE_NAME: &str = "page.html";

const TITLE: &str = "AI Story Weaver";
const SUBTITLE: &str = "Turn your ideas into illustrated and narrated stories with the power of AI.";
const BUTTON: &str = "Weave My Story!";
const IDEA_PLACEHOLDER: &str = "e.g., A robot discovering an ancient, magical forest.";
const CHARACTER_PLACEHOLDER: &str =
    "e.g., A small, curious robot with a polished chrome finish, cinematic film still.";

const MAX_GALLERY_COLUMNS: usize = 3;

/// Gallery width for `images` illustrations.
pub fn gallery_columns(images: usize) -> usize {
    images.min(MAX_GALLERY_COLUMNS)
}

/// One gallery cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    /// `data:` URL of the image
    pub src: String,
    /// `Scene N`
    pub caption: String,
}

/// The rendered story block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryView {
    /// Story text
    pub text: String,
    /// Narration URL, when narration succeeded
    pub audio_url: Option<String>,
    /// Gallery cells in scene order
    pub images: Vec<GalleryImage>,
    /// Gallery columns
    pub columns: usize,
}

impl StoryView {
    /// Build the story block for a session. `None` until a run has completed.
    ///
    /// `audio_version` is appended to the audio URL so the browser refetches
    /// the overwritten file.
    pub fn from_state(state: &SessionState, audio_version: &str) -> Option<Self> {
        if !state.story_generated {
            return None;
        }

        let images = state
            .story_images
            .iter()
            .enumerate()
            .map(|(i, image)| GalleryImage {
                src: format!("data:{};base64,{}", image.mime, STANDARD.encode(&image.data)),
                caption: format!("Scene {}", i + 1),
            })
            .collect::<Vec<_>>();

        Some(Self {
            text: state.story_text.clone(),
            audio_url: state
                .audio_file_path
                .as_ref()
                .map(|_| format!("/audio?v={}", audio_version)),
            columns: gallery_columns(images.len()),
            images,
        })
    }
}

/// Everything the page template needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Idea field value
    pub idea: String,
    /// Character field value
    pub character: String,
    /// Status timeline from the last run
    pub steps: Vec<StatusStep>,
    /// Warnings and errors from the last run
    pub notices: Vec<Notice>,
    /// Last completed story
    pub story: Option<StoryView>,
}

impl PageView {
    /// Page for a session with no run in this request.
    pub fn for_session(state: &SessionState, audio_version: &str) -> Self {
        Self {
            story: StoryView::from_state(state, audio_version),
            ..Self::default()
        }
    }

    /// Carry a run's status log onto the page.
    pub fn with_status(mut self, log: &StatusLog) -> Self {
        self.steps = log.steps().to_vec();
        self.notices = log.notices().to_vec();
        self
    }

    /// Echo the submitted idea and character back into the form.
    pub fn with_form(mut self, idea: impl Into<String>, character: impl Into<String>) -> Self {
        self.idea = idea.into();
        self.character = character.into();
        self
    }
}

/// Renders [`PageView`]s with the bundled template.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Load the bundled page template.
    ///
    /// # Errors
    ///
    /// Returns a template error if the template fails to parse.
    pub fn new() -> WeaverResult<Self> {
        let mut env = Environment::new();
        env.add_template(PAGE_NAME, PAGE_TEMPLATE)
            .map_err(|e| ServerError::new(ServerErrorKind::Template(e.to_string())))?;
        Ok(Self { env })
    }

    /// Render the page.
    ///
    /// # Errors
    ///
    /// Returns a template error if rendering fails.
    pub fn render(&self, view: &PageView) -> WeaverResult<String> {
        let template = self
            .env
            .get_template(PAGE_NAME)
            .map_err(|e| ServerError::new(ServerErrorKind::Template(e.to_string())))?;

        template
            .render(minijinja::context! {
                title => TITLE,
                subtitle => SUBTITLE,
                button => BUTTON,
                idea_placeholder => IDEA_PLACEHOLDER,
                character_placeholder => CHARACTER_PLACEHOLDER,
                idea => &view.idea,
                character => &view.character,
                steps => &view.steps,
                notices => &view.notices,
                story => &view.story,
            })
            .map_err(|e| ServerError::new(ServerErrorKind::Template(e.to_string())).into())
    }
}
