//! Configuration for Story Weaver.
//!
//! Settings load from TOML with a precedence system:
//! - Bundled defaults (include_str! from weaver.toml)
//! - User overrides (~/.config/story_weaver/weaver.toml, then ./weaver.toml)
//! - Automatic merging with user values taking precedence

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};
use weaver_error::{ConfigError, WeaverError, WeaverResult};

// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../weaver.toml");

/// Web surface settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address the UI listens on
    pub bind_addr: String,
    /// Browser sessions kept in memory before the least recent is dropped
    pub max_sessions: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8501".to_string(),
            max_sessions: 256,
        }
    }
}

/// Narrative generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorySettings {
    /// Chat-completion model identifier
    pub model: String,
    /// Generated token ceiling
    pub max_tokens: u32,
    /// Base URL; requests go to `{chat_base_url}/{model}/v1/chat/completions`
    pub chat_base_url: String,
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            model: "HuggingFaceH4/zephyr-7b-beta".to_string(),
            max_tokens: 300,
            chat_base_url: "https://router.huggingface.co/hf-inference/models".to_string(),
        }
    }
}

/// Illustration generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IllustrationSettings {
    /// Text-to-image model identifier
    pub model: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Cap on scenes (and therefore images) per story
    pub max_scenes: usize,
    /// Base URL; requests go to `{image_base_url}/{model}`
    pub image_base_url: String,
}

impl Default for IllustrationSettings {
    fn default() -> Self {
        Self {
            model: "stabilityai/stable-diffusion-xl-base-1.0".to_string(),
            width: 1024,
            height: 768,
            max_scenes: weaver_core::DEFAULT_MAX_SCENES,
            image_base_url: "https://router.huggingface.co/hf-inference/models".to_string(),
        }
    }
}

/// Narration synthesizer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NarrationSettings {
    /// Narration language code
    pub language: String,
    /// The single narration file, overwritten on every run
    pub audio_path: PathBuf,
    /// Speech endpoint
    pub tts_base_url: String,
    /// Longest text chunk sent in one speech request
    pub max_chunk_chars: usize,
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            language: weaver_core::NARRATION_LANGUAGE.to_string(),
            audio_path: PathBuf::from("story_narration.mp3"),
            tts_base_url: "https://translate.google.com/translate_tts".to_string(),
            max_chunk_chars: 100,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Top-level Story Weaver configuration.
///
/// # Example
///
/// ```no_run
/// use weaver_config::WeaverConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WeaverConfig::load()?;
/// println!("Listening on {}", config.server.bind_addr);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WeaverConfig {
    /// Web surface
    pub server: ServerSettings,
    /// Narrative generator
    pub story: StorySettings,
    /// Illustration generator
    pub illustration: IllustrationSettings,
    /// Narration synthesizer
    pub narration: NarrationSettings,
    /// Logging
    pub logging: LoggingSettings,
}

impl WeaverConfig {
    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// configuration is invalid.
    #[instrument]
    pub fn load() -> WeaverResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("story_weaver/weaver.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("weaver").required(false));

        Self::finish(builder)
    }

    /// Load bundled defaults overlaid with one specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the result
    /// is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> WeaverResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));

        Self::finish(builder)
    }

    /// Parse bundled defaults overlaid with a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML or the result is invalid.
    pub fn from_toml_str(overrides: &str) -> WeaverResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> WeaverResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                WeaverError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                WeaverError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings no run could succeed with.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending key.
    pub fn validate(&self) -> WeaverResult<()> {
        let blank = [
            ("server.bind_addr", &self.server.bind_addr),
            ("story.model", &self.story.model),
            ("story.chat_base_url", &self.story.chat_base_url),
            ("illustration.model", &self.illustration.model),
            ("illustration.image_base_url", &self.illustration.image_base_url),
            ("narration.language", &self.narration.language),
            ("narration.tts_base_url", &self.narration.tts_base_url),
        ];
        if let Some((key, _)) = blank.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::new(format!("{} must not be empty", key)).into());
        }

        let zero = [
            ("server.max_sessions", self.server.max_sessions),
            ("story.max_tokens", self.story.max_tokens as usize),
            ("illustration.width", self.illustration.width as usize),
            ("illustration.height", self.illustration.height as usize),
            ("illustration.max_scenes", self.illustration.max_scenes),
            ("narration.max_chunk_chars", self.narration.max_chunk_chars),
        ];
        if let Some((key, _)) = zero.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::new(format!("{} must be positive", key)).into());
        }

        if self.narration.audio_path.as_os_str().is_empty() {
            return Err(ConfigError::new("narration.audio_path must not be empty").into());
        }

        Ok(())
    }
}
