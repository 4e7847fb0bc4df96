//! Axum request handlers for the HTTP API.
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::routes::AppState;
use crate::enrich;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
}

type ApiError = (StatusCode, Json<Value>);

fn client_error(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({"error": message})))
}

fn server_error(message: &str) -> ApiError {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": message})))
}

/// Serve the demo page from the configured static directory.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let path = format!("{}/index.html", state.static_dir.trim_end_matches('/'));
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path, e);
            "FLUX Prompt Proxy".into_response()
        }
    }
}

/// Enrich the submitted prompt and forward it to the FLUX Space.
///
/// A missing `prompt` field is a client error; a present-but-blank prompt
/// falls through to the enrichment default. The response carries the image
/// artifact reference under `output`, matching what the front-end expects.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<Value>, ApiError> {
    let Some(prompt) = payload.prompt else {
        return Err(client_error("Falta el prompt"));
    };

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, "Received prompt: {}", prompt);
    let enriched = enrich::enrich(Some(&prompt));
    tracing::info!(%request_id, "Enriched prompt: {}", enriched);

    state.flux_client.generate(&enriched, &state.params)
        .await
        .map(|image| Json(json!({"output": [image]})))
        .map_err(|e| {
            tracing::error!(%request_id, "Failed to generate image: {:?}", e);
            server_error("No se pudo generar imagen desde HF Space")
        })
}
