//! Google Translate speech synthesis.

mod chunking;
mod tts;

pub use chunking::chunk_text;
pub use tts::{DEFAULT_MAX_CHUNK_CHARS, GoogleTtsDriver};

/// Provider name reported in errors and spans.
pub(crate) const PROVIDER: &str = "google-translate";
