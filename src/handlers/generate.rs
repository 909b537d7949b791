// Stateless generation endpoints - thin wrappers over the gateway adapters.
// These carry the original wire contract; the session workflow endpoints in
// handlers::workflow drive the same adapters through the orchestrator.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::Extension;
use axum::routing::post;
use axum::{Json, Router};

use crate::error::ApiError;
use crate::gateway::audio::AudioOutcome;
use crate::models::api::*;
use crate::scenes::extract_scenes;
use crate::AppState;

pub fn generate_routes() -> Router {
    Router::new()
        .route("/api/generate-script", post(generate_script))
        .route("/api/generate-images", post(generate_images))
        .route("/api/generate-audio", post(generate_audio))
        .route("/api/generate-video", post(generate_video))
}

async fn generate_script(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<GenerateScriptRequest>, JsonRejection>,
) -> Result<Json<GenerateScriptResponse>, ApiError> {
    let Json(request) = payload?;

    let outcome = state.gateway.generate_script(&request.topic).await?;
    Ok(Json(GenerateScriptResponse {
        script: outcome.into_payload(),
    }))
}

async fn generate_images(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<GenerateImagesRequest>, JsonRejection>,
) -> Result<Json<GenerateImagesResponse>, ApiError> {
    let Json(request) = payload?;
    if request.script.trim().is_empty() {
        return Err(ApiError::InvalidInput("Script is required"));
    }

    let scenes = extract_scenes(&request.script);
    let generated = state.gateway.generate_images(&scenes).await?;
    Ok(Json(GenerateImagesResponse {
        truncated: generated.truncated,
        images: generated.urls(),
    }))
}

async fn generate_audio(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<GenerateAudioRequest>, JsonRejection>,
) -> Result<Json<GenerateAudioResponse>, ApiError> {
    let Json(request) = payload?;

    let response = match state.gateway.generate_audio(&request.script).await? {
        AudioOutcome::Synthesized { audio } => GenerateAudioResponse {
            audio,
            use_client_tts: None,
            text: None,
        },
        AudioOutcome::ClientTts { text, .. } => GenerateAudioResponse {
            audio: String::new(),
            use_client_tts: Some(true),
            text: Some(text),
        },
    };
    Ok(Json(response))
}

async fn generate_video(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<GenerateVideoRequest>, JsonRejection>,
) -> Result<Json<GenerateVideoResponse>, ApiError> {
    let Json(request) = payload?;

    let handoff = state.gateway.compose_video(request.images, request.audio)?;
    Ok(Json(GenerateVideoResponse {
        video: handoff.video,
        use_client_generation: handoff.use_client_generation,
        images: handoff.images,
        audio: handoff.audio,
        message: handoff.message,
    }))
}
