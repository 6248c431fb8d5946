//! Recording mock backends and status reporter.

use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};
use weaver_core::{Credential, IllustrationRequest, Image, SpeechRequest, StoryRequest};
use weaver_error::{BackendError, BackendErrorKind, WeaverResult};
use weaver_interface::{
    IllustrationDriver, Phase, Progress, SpeechDriver, StatusReporter, StoryDriver,
};
use weaver_pipeline::{
    IllustrationGenerator, NarrationSynthesizer, NarrativeGenerator, StoryWeaver,
};
use weaver_storage::NarrationFile;

/// Five sentences, so five scenes.
#[allow(dead_code)]
pub const FIVE_SENTENCE_STORY: &str = "Bip woke beneath the giant ferns. \
    The trees hummed an ancient song! Could the moss really glow? \
    Bip followed the light deeper. At the heart stood a silver door.";

/// Chat backend returning a fixed reply, or failing when `reply` is `None`.
#[derive(Debug, Default)]
pub struct MockStory {
    reply: Option<String>,
    calls: Mutex<Vec<(String, StoryRequest)>>,
}

#[allow(dead_code)]
impl MockStory {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: Mutex::default(),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<(String, StoryRequest)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl StoryDriver for MockStory {
    async fn complete(&self, credential: &Credential, req: &StoryRequest) -> WeaverResult<String> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((credential.expose().to_string(), req.clone()));
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(BackendError::new(
                "mock",
                BackendErrorKind::from_status(401, "Invalid credentials"),
            )
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Image backend that fails on the `fail_on`-th call (1-based).
#[derive(Debug, Default)]
pub struct MockImages {
    fail_on: Option<usize>,
    calls: Mutex<Vec<IllustrationRequest>>,
}

#[allow(dead_code)]
impl MockImages {
    pub fn working() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_on(call: usize) -> Arc<Self> {
        Arc::new(Self {
            fail_on: Some(call),
            calls: Mutex::default(),
        })
    }

    pub fn calls(&self) -> Vec<IllustrationRequest> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl IllustrationDriver for MockImages {
    async fn text_to_image(
        &self,
        _credential: &Credential,
        req: &IllustrationRequest,
    ) -> WeaverResult<Image> {
        let call = {
            let mut calls = self.calls.lock().expect("calls lock");
            calls.push(req.clone());
            calls.len()
        };
        if self.fail_on == Some(call) {
            return Err(BackendError::new(
                "mock",
                BackendErrorKind::from_status(429, "quota exceeded"),
            )
            .into());
        }
        Ok(Image::new("image/png", vec![call as u8]))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Speech backend returning a fixed MP3 body, or failing.
#[derive(Debug, Default)]
pub struct MockSpeech {
    fail: bool,
    calls: Mutex<Vec<SpeechRequest>>,
}

#[allow(dead_code)]
impl MockSpeech {
    pub fn working() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            calls: Mutex::default(),
        })
    }

    pub fn calls(&self) -> Vec<SpeechRequest> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl SpeechDriver for MockSpeech {
    async fn synthesize(&self, req: &SpeechRequest) -> WeaverResult<Vec<u8>> {
        self.calls.lock().expect("calls lock").push(req.clone());
        if self.fail {
            return Err(
                BackendError::new("mock", BackendErrorKind::Request("connection reset".into()))
                    .into(),
            );
        }
        Ok(b"ID3narration".to_vec())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Everything a reporter was told, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Event {
    Phase(Phase),
    Label(String),
    Progress(Progress),
    ClearProgress,
    Warning(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

#[allow(dead_code)]
impl RecordingReporter {
    pub fn phases(&self) -> Vec<Phase> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Phase(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Label(l) => Some(l.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn progress(&self) -> Vec<Progress> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Progress(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Warning(w) => Some(w.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Error(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }
}

impl StatusReporter for RecordingReporter {
    fn phase(&mut self, phase: Phase) {
        self.events.push(Event::Phase(phase));
    }

    fn label(&mut self, label: &str) {
        self.events.push(Event::Label(label.to_string()));
    }

    fn progress(&mut self, progress: Progress) {
        self.events.push(Event::Progress(progress));
    }

    fn clear_progress(&mut self) {
        self.events.push(Event::ClearProgress);
    }

    fn warning(&mut self, message: &str) {
        self.events.push(Event::Warning(message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.events.push(Event::Error(message.to_string()));
    }
}

/// A weaver over the given mocks, narrating into `dir`.
#[allow(dead_code)]
pub fn weaver_with(
    story: Arc<MockStory>,
    images: Arc<MockImages>,
    speech: Arc<MockSpeech>,
    dir: &Path,
) -> StoryWeaver {
    StoryWeaver::new(
        NarrativeGenerator::new(story, "test/chat", 300),
        IllustrationGenerator::new(images, "test/sdxl", 1024, 768),
        NarrationSynthesizer::new(
            speech,
            NarrationFile::new(dir.join("story_narration.mp3")),
            "en",
        ),
    )
}
