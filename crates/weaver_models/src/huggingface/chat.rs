//! HuggingFace chat completion driver.

use super::{ChatCompletionResponse, PROVIDER, conversions};
use crate::response::{ensure_success, request_failed};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use weaver_core::{Credential, StoryRequest};
use weaver_error::{BackendError, BackendErrorKind, WeaverResult};
use weaver_interface::StoryDriver;

/// Chat completion against the HuggingFace OpenAI-compatible route.
///
/// Requests go to `{base_url}/{model}/v1/chat/completions`.
#[derive(Debug, Clone)]
pub struct HuggingFaceChatDriver {
    client: Client,
    base_url: String,
}

impl HuggingFaceChatDriver {
    /// Creates a driver with its own HTTP client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a driver sharing an existing HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, "Created HuggingFace chat driver");
        Self { client, base_url }
    }

    /// The endpoint for a model.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/{}/v1/chat/completions", self.base_url, model)
    }
}

#[async_trait]
impl StoryDriver for HuggingFaceChatDriver {
    #[instrument(skip(self, credential, req), fields(model = %req.model(), max_tokens = req.max_tokens()))]
    async fn complete(&self, credential: &Credential, req: &StoryRequest) -> WeaverResult<String> {
        let body = conversions::to_chat_request(req)?;
        let url = self.endpoint(req.model());
        debug!(url = %url, messages = body.messages().len(), "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", credential.expose()))
            .json(&body)
            .send()
            .await
            .map_err(|e| request_failed(PROVIDER, e))?;

        let response = ensure_success(PROVIDER, response).await?;

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat completion");
            BackendError::new(
                PROVIDER,
                BackendErrorKind::MalformedResponse(format!("Failed to parse response: {}", e)),
            )
        })?;

        if let Some(usage) = &completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Chat completion usage"
            );
        }

        conversions::from_chat_response(&completion)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
