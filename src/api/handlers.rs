//! Axum request handlers. Each submission is handled exactly once by a fresh
//! [`Interaction`]; nothing survives between requests.
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::api::page::{render_page, PageView};
use crate::api::routes::AppState;
use crate::form::collector::{ImageSize, Submission};
use crate::interaction::{Interaction, InteractionState};

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub prompt: String,
    pub size: Option<String>,
}

pub async fn index() -> Html<String> {
    Html(render_page(&PageView::default()))
}

pub async fn generate_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let size = match form.size.as_deref().map(str::parse::<ImageSize>).transpose() {
        Ok(size) => size.unwrap_or_default(),
        Err(e) => {
            let view = PageView { prompt: &form.prompt, error: Some(e.to_string()), ..Default::default() };
            return (StatusCode::BAD_REQUEST, Html(render_page(&view))).into_response();
        }
    };

    let submission = Submission::new(form.prompt.clone(), size);
    let interaction = Interaction::new().submit(&state.client, &submission).await;
    let view = PageView {
        prompt: &form.prompt,
        size,
        warning: interaction.warning().map(String::from),
        error: interaction.error_message().map(String::from),
        image_url: interaction.result().map(|r| r.image_url.as_str()),
        download: interaction.download(),
    };
    Html(render_page(&view)).into_response()
}

#[derive(Debug, Deserialize)]
pub struct GenerateJson {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub size: Option<String>,
}

pub async fn generate_json(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateJson>,
) -> Response {
    let size = match payload.size.as_deref().map(str::parse::<ImageSize>).transpose() {
        Ok(size) => size.unwrap_or_default(),
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({"error": e.to_string()}))).into_response();
        }
    };

    let submission = Submission::new(payload.prompt, size);
    let interaction = Interaction::new().submit(&state.client, &submission).await;

    if let Some(warning) = interaction.warning() {
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({"warning": warning}))).into_response();
    }
    match (interaction.state(), interaction.download()) {
        (InteractionState::Succeeded(result), Some(download)) => Json(json!({
            "image_url": result.image_url,
            "file_name": download.file_name,
            "mime": download.mime,
            "image_base64": base64::engine::general_purpose::STANDARD.encode(download.bytes),
        }))
        .into_response(),
        _ => {
            let body = json!({
                "error": interaction.error_message().unwrap_or("Error generating image"),
                "image_url": interaction.image_url(),
            });
            (StatusCode::BAD_GATEWAY, Json(body)).into_response()
        }
    }
}
