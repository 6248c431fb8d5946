mod test_utils;

use axum::{Router, http::StatusCode};
use test_utils::{Recorder, canned, spawn_backend};
use weaver_core::{Credential, IllustrationRequest, NEGATIVE_PROMPT};
use weaver_error::{BackendErrorKind, WeaverErrorKind};
use weaver_interface::IllustrationDriver;
use weaver_models::HuggingFaceImageDriver;

const IMAGE_PATH: &str = "/test/sdxl";
const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-pixels";

fn illustration_request() -> IllustrationRequest {
    IllustrationRequest::builder()
        .model("test/sdxl")
        .prompt("cinematic film still, a tin robot, the robot walked")
        .negative_prompt(NEGATIVE_PROMPT)
        .width(1024u32)
        .height(768u32)
        .build()
        .expect("valid illustration request")
}

#[tokio::test]
async fn test_image_returns_body_and_content_type() -> Result<(), Box<dyn std::error::Error>> {
    let recorder = Recorder::default();
    let router = Router::new().route(
        IMAGE_PATH,
        canned(&recorder, StatusCode::OK, "image/jpeg", b"\xFF\xD8\xFFjpeg".to_vec()),
    );
    let base = spawn_backend(router).await;

    let image = HuggingFaceImageDriver::new(base)
        .text_to_image(&Credential::new("hf_token"), &illustration_request())
        .await?;

    assert_eq!(image.mime, "image/jpeg");
    assert_eq!(image.data, b"\xFF\xD8\xFFjpeg".to_vec());
    Ok(())
}

#[tokio::test]
async fn test_image_sends_prompt_and_dimensions() -> Result<(), Box<dyn std::error::Error>> {
    let recorder = Recorder::default();
    let router = Router::new().route(
        IMAGE_PATH,
        canned(&recorder, StatusCode::OK, "image/png", PNG_BYTES.to_vec()),
    );
    let base = spawn_backend(router).await;

    HuggingFaceImageDriver::new(base)
        .text_to_image(&Credential::new("hf_token"), &illustration_request())
        .await?;

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer hf_token"));

    let body = calls[0].json();
    assert_eq!(
        body["inputs"],
        "cinematic film still, a tin robot, the robot walked"
    );
    assert_eq!(body["parameters"]["negative_prompt"], NEGATIVE_PROMPT);
    assert_eq!(body["parameters"]["width"], 1024);
    assert_eq!(body["parameters"]["height"], 768);
    Ok(())
}

#[tokio::test]
async fn test_image_sniffs_mime_when_content_type_is_generic(
) -> Result<(), Box<dyn std::error::Error>> {
    let recorder = Recorder::default();
    let router = Router::new().route(
        IMAGE_PATH,
        canned(
            &recorder,
            StatusCode::OK,
            "application/octet-stream",
            PNG_BYTES.to_vec(),
        ),
    );
    let base = spawn_backend(router).await;

    let image = HuggingFaceImageDriver::new(base)
        .text_to_image(&Credential::new("hf_token"), &illustration_request())
        .await?;

    assert_eq!(image.mime, "image/png");
    Ok(())
}

#[tokio::test]
async fn test_image_json_body_is_malformed() {
    let recorder = Recorder::default();
    let router = Router::new().route(
        IMAGE_PATH,
        canned(
            &recorder,
            StatusCode::OK,
            "application/json",
            r#"{"error":"Model is loading"}"#,
        ),
    );
    let base = spawn_backend(router).await;

    let err = HuggingFaceImageDriver::new(base)
        .text_to_image(&Credential::new("hf_token"), &illustration_request())
        .await
        .expect_err("json body is not an image");

    match err.kind() {
        WeaverErrorKind::Backend(backend) => match &backend.kind {
            BackendErrorKind::MalformedResponse(message) => {
                assert!(message.contains("Model is loading"));
            }
            other => panic!("unexpected kind: {:?}", other),
        },
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_image_server_error_keeps_status() {
    let recorder = Recorder::default();
    let router = Router::new().route(
        IMAGE_PATH,
        canned(
            &recorder,
            StatusCode::SERVICE_UNAVAILABLE,
            "text/plain",
            "overloaded",
        ),
    );
    let base = spawn_backend(router).await;

    let err = HuggingFaceImageDriver::new(base)
        .text_to_image(&Credential::new("hf_token"), &illustration_request())
        .await
        .expect_err("503 should fail");

    assert!(matches!(
        err.kind(),
        WeaverErrorKind::Backend(backend)
            if matches!(backend.kind, BackendErrorKind::Api { status: 503, .. })
    ));
    assert!(err.to_string().contains("overloaded"));
}

#[tokio::test]
async fn test_image_empty_body_is_empty_response() {
    let recorder = Recorder::default();
    let router = Router::new().route(
        IMAGE_PATH,
        canned(&recorder, StatusCode::OK, "image/png", Vec::new()),
    );
    let base = spawn_backend(router).await;

    let err = HuggingFaceImageDriver::new(base)
        .text_to_image(&Credential::new("hf_token"), &illustration_request())
        .await
        .expect_err("empty body should fail");

    assert!(matches!(
        err.kind(),
        WeaverErrorKind::Backend(backend) if matches!(backend.kind, BackendErrorKind::EmptyResponse(_))
    ));
}
