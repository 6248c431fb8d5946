//! Mock backends and an app server on an ephemeral port.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use weaver_core::{Credential, IllustrationRequest, Image, SpeechRequest, StoryRequest};
use weaver_error::{BackendError, BackendErrorKind, WeaverResult};
use weaver_interface::{IllustrationDriver, SpeechDriver, StoryDriver};
use weaver_pipeline::{IllustrationGenerator, NarrationSynthesizer, NarrativeGenerator, StoryWeaver};
use weaver_server::{AppState, PageRenderer, SessionStore, create_router};
use weaver_storage::NarrationFile;

#[derive(Debug, Default)]
pub struct FixedStory {
    pub reply: Option<&'static str>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl StoryDriver for FixedStory {
    async fn complete(&self, _credential: &Credential, _req: &StoryRequest) -> WeaverResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.map(str::to_string).ok_or_else(|| {
            BackendError::new("mock", BackendErrorKind::from_status(401, "Invalid credentials"))
                .into()
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[derive(Debug, Default)]
pub struct CountingImages {
    pub fail: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl IllustrationDriver for CountingImages {
    async fn text_to_image(
        &self,
        _credential: &Credential,
        _req: &IllustrationRequest,
    ) -> WeaverResult<Image> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(BackendError::new("mock", BackendErrorKind::from_status(503, "busy")).into());
        }
        Ok(Image::new("image/png", vec![call as u8]))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[derive(Debug, Default)]
pub struct FixedSpeech;

#[async_trait]
impl SpeechDriver for FixedSpeech {
    async fn synthesize(&self, _req: &SpeechRequest) -> WeaverResult<Vec<u8>> {
        Ok(b"ID3narration".to_vec())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Handles to a running app.
#[allow(dead_code)]
pub struct TestApp {
    pub base_url: String,
    pub story: Arc<FixedStory>,
    pub images: Arc<CountingImages>,
    pub sessions: SessionStore,
}

/// Serve the app over the given story reply, narrating into `dir`.
pub async fn spawn_app(reply: Option<&'static str>, fail_images: bool, dir: &Path) -> TestApp {
    let story = Arc::new(FixedStory {
        reply,
        calls: AtomicUsize::new(0),
    });
    let images = Arc::new(CountingImages {
        fail: fail_images,
        calls: AtomicUsize::new(0),
    });

    let weaver = StoryWeaver::new(
        NarrativeGenerator::new(story.clone(), "test/chat", 300),
        IllustrationGenerator::new(images.clone(), "test/sdxl", 1024, 768),
        NarrationSynthesizer::new(
            Arc::new(FixedSpeech),
            NarrationFile::new(dir.join("story_narration.mp3")),
            "en",
        ),
    );

    let sessions = SessionStore::new();
    let renderer = PageRenderer::new().expect("bundled template parses");
    let state = AppState::new(Arc::new(weaver), sessions.clone(), Arc::new(renderer));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind app");
    let addr = listener.local_addr().expect("app address");
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.expect("app server");
    });

    TestApp {
        base_url: format!("http://{}", addr),
        story,
        images,
        sessions,
    }
}

/// The `name=value` part of a `Set-Cookie` header.
#[allow(dead_code)]
pub fn cookie_pair(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}
