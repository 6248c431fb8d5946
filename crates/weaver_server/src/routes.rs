//! HTTP handlers.

use crate::{PageRenderer, PageView, SESSION_COOKIE, SessionStore, StatusLog, session_id_from_cookies};
use axum::{
    Form, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;
use weaver_core::StoryInputs;
use weaver_error::{StorageErrorKind, WeaverErrorKind};
use weaver_pipeline::StoryWeaver;
use weaver_storage::NarrationFile;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    weaver: Arc<StoryWeaver>,
    sessions: SessionStore,
    renderer: Arc<PageRenderer>,
}

impl AppState {
    /// Creates new handler state.
    pub fn new(weaver: Arc<StoryWeaver>, sessions: SessionStore, renderer: Arc<PageRenderer>) -> Self {
        Self {
            weaver,
            sessions,
            renderer,
        }
    }

    /// The session store.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

/// Creates the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/weave", post(weave))
        .route("/audio", get(audio))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Existing session id, or a new one that must be sent back as a cookie.
fn resolve_session(headers: &HeaderMap) -> (Uuid, bool) {
    match session_id_from_cookies(headers) {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    }
}

fn page_response(state: &AppState, view: &PageView, id: Uuid, set_cookie: bool) -> Response {
    let mut response = match state.renderer.render(view) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    };

    if set_cookie {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

/// Form page with the session's last result.
#[instrument(skip_all)]
async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, fresh) = resolve_session(&headers);
    let session = state.sessions.get(id).await;
    let view = PageView::for_session(&session, &Uuid::new_v4().simple().to_string());
    page_response(&state, &view, id, fresh)
}

/// Run the pipeline for the submitted form.
#[instrument(skip_all)]
async fn weave(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(inputs): Form<StoryInputs>,
) -> Response {
    let (id, fresh) = resolve_session(&headers);
    info!(session = %id, "Weave requested");

    let mut log = StatusLog::new();
    let outcome = state.weaver.run(&inputs, &mut log).await;
    let session = state.sessions.apply(id, outcome).await;

    let view = PageView::for_session(&session, &Uuid::new_v4().simple().to_string())
        .with_status(&log)
        .with_form(inputs.idea.clone(), inputs.character.clone());
    page_response(&state, &view, id, fresh)
}

/// The session's narration as `audio/mpeg`.
#[instrument(skip_all)]
async fn audio(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(id) = session_id_from_cookies(&headers) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(path) = state.sessions.get(id).await.audio_file_path else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match NarrationFile::new(path).read().await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "audio/mpeg"),
                (header::CACHE_CONTROL, "no-store"),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => match e.kind() {
            WeaverErrorKind::Storage(storage) if matches!(storage.kind, StorageErrorKind::NotFound(_)) => {
                StatusCode::NOT_FOUND.into_response()
            }
            _ => {
                error!(error = %e, "Failed to read narration");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
