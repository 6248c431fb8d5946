//! Google Translate text-to-speech driver.

use super::{PROVIDER, chunk_text};
use crate::response::{ensure_success, request_failed};
use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::{debug, error, instrument};
use weaver_core::SpeechRequest;
use weaver_error::{BackendError, BackendErrorKind, WeaverResult};
use weaver_interface::SpeechDriver;

/// Default chunk size accepted by the translate endpoint.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 100;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Speech synthesis through the public Google Translate endpoint.
///
/// The text is split into chunks, each chunk is fetched as MP3, and the
/// MP3 frames are concatenated in order.
#[derive(Debug, Clone)]
pub struct GoogleTtsDriver {
    client: Client,
    base_url: String,
    max_chunk_chars: usize,
}

impl GoogleTtsDriver {
    /// Creates a driver with its own HTTP client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a driver sharing an existing HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
        }
    }

    /// Override the chunk size.
    pub fn with_max_chunk_chars(mut self, max_chunk_chars: usize) -> Self {
        self.max_chunk_chars = max_chunk_chars.max(1);
        self
    }

    #[instrument(skip(self, chunk), fields(len = chunk.len()))]
    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
        idx: usize,
        total: usize,
    ) -> WeaverResult<Vec<u8>> {
        let total_param = total.to_string();
        let idx_param = idx.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .client
            .get(&self.base_url)
            .header(header::USER_AGENT, USER_AGENT)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("total", total_param.as_str()),
                ("idx", idx_param.as_str()),
                ("textlen", textlen.as_str()),
                ("q", chunk),
            ])
            .send()
            .await
            .map_err(|e| request_failed(PROVIDER, e))?;

        let response = ensure_success(PROVIDER, response).await?;

        let bytes = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read audio chunk");
            BackendError::new(
                PROVIDER,
                BackendErrorKind::MalformedResponse(format!("Failed to read audio: {}", e)),
            )
        })?;

        if bytes.is_empty() {
            return Err(BackendError::new(
                PROVIDER,
                BackendErrorKind::EmptyResponse(format!("chunk {} returned no audio", idx)),
            )
            .into());
        }

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechDriver for GoogleTtsDriver {
    #[instrument(skip(self, req), fields(language = %req.language(), text_len = req.text().len()))]
    async fn synthesize(&self, req: &SpeechRequest) -> WeaverResult<Vec<u8>> {
        let chunks = chunk_text(req.text(), self.max_chunk_chars);
        if chunks.is_empty() {
            return Err(BackendError::new(
                PROVIDER,
                BackendErrorKind::InvalidRequest("No text to speak".to_string()),
            )
            .into());
        }

        debug!(chunks = chunks.len(), "Synthesizing narration");

        let total = chunks.len();
        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let bytes = self.fetch_chunk(chunk, req.language(), idx, total).await?;
            audio.extend_from_slice(&bytes);
        }

        debug!(bytes = audio.len(), "Narration synthesized");
        Ok(audio)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
