//! Test utilities for backend driver tests.
//!
//! Each test spins up a local axum server on an ephemeral port that plays
//! the part of the hosted backend and records every request it receives.

use axum::{
    Router,
    body::Bytes,
    http::{HeaderMap, StatusCode, Uri, header},
    routing::{MethodRouter, any},
};
use std::sync::{Arc, Mutex};

/// One request seen by the mock backend.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Recorded {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Vec<u8>,
}

impl Recorded {
    #[allow(dead_code)]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

/// Shared log of requests.
#[derive(Debug, Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl Recorder {
    fn record(&self, uri: &Uri, headers: &HeaderMap, body: &[u8]) {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.0.lock().expect("recorder lock").push(Recorded {
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            authorization,
            body: body.to_vec(),
        });
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.0.lock().expect("recorder lock").clone()
    }
}

/// A route that records each call and always answers with the same response.
pub fn canned(
    recorder: &Recorder,
    status: StatusCode,
    content_type: &'static str,
    body: impl Into<Vec<u8>>,
) -> MethodRouter {
    let recorder = recorder.clone();
    let body = body.into();
    any(move |uri: Uri, headers: HeaderMap, request: Bytes| {
        let recorder = recorder.clone();
        let body = body.clone();
        async move {
            recorder.record(&uri, &headers, &request);
            (status, [(header::CONTENT_TYPE, content_type)], body)
        }
    })
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock backend");
    });
    format!("http://{}", addr)
}
