//! In-process stand-in for the image API and the image host.
#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use image_studio::OpenAIClient;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "test-key";

#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Success { image_len: usize },
    AuthFailure,
    MissingUrl,
    UnreachableImage,
    ImageNotFound,
}

#[derive(Clone)]
struct MockState {
    behaviour: Behaviour,
    self_base: String,
    dead_base: String,
    generation_calls: Arc<AtomicUsize>,
    fetch_calls: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
}

pub struct MockUpstream {
    pub base_url: String,
    pub generation_calls: Arc<AtomicUsize>,
    pub fetch_calls: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
}

impl MockUpstream {
    pub fn client(&self) -> OpenAIClient {
        self.client_with_key(API_KEY)
    }

    pub fn client_with_key(&self, key: &str) -> OpenAIClient {
        OpenAIClient::new(self.api_base(), key, "dall-e-2")
    }

    /// API root as configured through `OPENAI_BASE_URL`.
    pub fn api_base(&self) -> String {
        format!("{}/v1", self.base_url)
    }

    pub fn total_calls(&self) -> usize {
        self.generation_calls.load(Ordering::SeqCst) + self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }
}

/// Bytes served for a successful image: PNG magic followed by a counter.
pub fn image_bytes(len: usize) -> Vec<u8> {
    let magic = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    (0..len)
        .map(|i| magic.get(i).copied().unwrap_or((i % 251) as u8))
        .collect()
}

async fn generations(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.generation_calls.fetch_add(1, Ordering::SeqCst);
    *state.last_body.lock().unwrap() = Some(body);

    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", API_KEY))
        .unwrap_or(false);
    if !authorized || matches!(state.behaviour, Behaviour::AuthFailure) {
        let err = json!({
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error",
                "code": "invalid_api_key"
            }
        });
        return (StatusCode::UNAUTHORIZED, Json(err)).into_response();
    }

    let url = match state.behaviour {
        Behaviour::MissingUrl => return Json(json!({"created": 1, "data": []})).into_response(),
        Behaviour::UnreachableImage => format!("{}/files/ai_image.png", state.dead_base),
        Behaviour::ImageNotFound => format!("{}/files/missing.png", state.self_base),
        _ => format!("{}/files/ai_image.png", state.self_base),
    };
    Json(json!({"created": 1, "data": [{"url": url}]})).into_response()
}

async fn image_file(State(state): State<MockState>) -> Response {
    state.fetch_calls.fetch_add(1, Ordering::SeqCst);
    match state.behaviour {
        Behaviour::Success { image_len } => {
            ([("content-type", "image/png")], image_bytes(image_len)).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn missing_file(State(state): State<MockState>) -> StatusCode {
    state.fetch_calls.fetch_add(1, Ordering::SeqCst);
    StatusCode::NOT_FOUND
}

pub async fn spawn(behaviour: Behaviour) -> MockUpstream {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    // A port nothing listens on once the probe listener is dropped.
    let dead = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_addr = dead.local_addr().unwrap();
    drop(dead);

    let state = MockState {
        behaviour,
        self_base: format!("http://{}", addr),
        dead_base: format!("http://{}", dead_addr),
        generation_calls: Arc::new(AtomicUsize::new(0)),
        fetch_calls: Arc::new(AtomicUsize::new(0)),
        last_body: Arc::new(Mutex::new(None)),
    };
    let upstream = MockUpstream {
        base_url: state.self_base.clone(),
        generation_calls: state.generation_calls.clone(),
        fetch_calls: state.fetch_calls.clone(),
        last_body: state.last_body.clone(),
    };

    let app = Router::new()
        .route("/v1/images/generations", post(generations))
        .route("/files/ai_image.png", get(image_file))
        .route("/files/missing.png", get(missing_file))
        .with_state(state);
    let server = axum::Server::from_tcp(listener).unwrap().serve(app.into_make_service());
    tokio::spawn(server);
    upstream
}
