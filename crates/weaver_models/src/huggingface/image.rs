//! HuggingFace text-to-image driver.

use super::{PROVIDER, conversions};
use crate::response::{ensure_success, request_failed};
use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::{debug, error, instrument};
use weaver_core::{Credential, IllustrationRequest, Image};
use weaver_error::{BackendError, BackendErrorKind, WeaverResult};
use weaver_interface::IllustrationDriver;

/// Text-to-image against the HuggingFace inference route.
///
/// Requests go to `{base_url}/{model}`; the response body is the raw image.
#[derive(Debug, Clone)]
pub struct HuggingFaceImageDriver {
    client: Client,
    base_url: String,
}

impl HuggingFaceImageDriver {
    /// Creates a driver with its own HTTP client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a driver sharing an existing HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The endpoint for a model.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/{}", self.base_url, model)
    }
}

#[async_trait]
impl IllustrationDriver for HuggingFaceImageDriver {
    #[instrument(
        skip(self, credential, req),
        fields(model = %req.model(), width = req.width(), height = req.height())
    )]
    async fn text_to_image(
        &self,
        credential: &Credential,
        req: &IllustrationRequest,
    ) -> WeaverResult<Image> {
        let body = conversions::to_image_request(req);
        let url = self.endpoint(req.model());
        debug!(url = %url, prompt_len = body.inputs().len(), "Sending text-to-image request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", credential.expose()))
            .header(header::ACCEPT, "image/png")
            .json(&body)
            .send()
            .await
            .map_err(|e| request_failed(PROVIDER, e))?;

        let response = ensure_success(PROVIDER, response).await?;

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_ascii_lowercase());

        let data = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read image body");
            BackendError::new(
                PROVIDER,
                BackendErrorKind::MalformedResponse(format!("Failed to read image: {}", e)),
            )
        })?;

        if data.is_empty() {
            return Err(BackendError::new(
                PROVIDER,
                BackendErrorKind::EmptyResponse("image body was empty".to_string()),
            )
            .into());
        }

        let mime = match content_type {
            Some(ct) if ct.starts_with("image/") => ct,
            Some(ct) if ct.contains("json") || ct.starts_with("text/") => {
                let text = String::from_utf8_lossy(&data).into_owned();
                error!(content_type = %ct, body = %text, "Expected an image");
                return Err(BackendError::new(
                    PROVIDER,
                    BackendErrorKind::MalformedResponse(format!("expected an image, got {}: {}", ct, text)),
                )
                .into());
            }
            _ => conversions::sniff_mime(&data)
                .ok_or_else(|| {
                    BackendError::new(
                        PROVIDER,
                        BackendErrorKind::MalformedResponse(
                            "response is not a recognizable image".to_string(),
                        ),
                    )
                })?
                .to_string(),
        };

        debug!(mime = %mime, size = data.len(), "Received image");
        Ok(Image::new(mime, data.to_vec()))
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
