// Session workflow endpoints - the orchestrator over HTTP.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::gateway::audio::AudioOutcome;
use crate::models::api::GenerateScriptRequest;
use crate::AppState;

pub fn workflow_routes() -> Router {
    Router::new()
        .route("/api/workflow", post(create_session))
        .route("/api/workflow/:id", get(get_session).delete(delete_session))
        .route("/api/workflow/:id/script", post(script_step))
        .route("/api/workflow/:id/images", post(images_step))
        .route("/api/workflow/:id/audio", post(audio_step))
        .route("/api/workflow/:id/video", post(video_step))
        .route("/api/workflow/:id/reset", post(reset_session))
}

async fn create_session(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let (id, session) = state.sessions.create().await;
    let current = session.state().await;
    Json(json!({
        "session_id": id,
        "current_step": current.step.index(),
        "state": current,
    }))
}

async fn get_session(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = state.sessions.get(id).await?;
    let current = session.state().await;
    Ok(Json(json!({ "current_step": current.step.index(), "state": current })))
}

async fn delete_session(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    state.sessions.remove(id).await?;
    Ok(Json(json!({ "deleted": true })))
}

async fn script_step(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<GenerateScriptRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload?;
    let session = state.sessions.get(id).await?;
    let new_state = session.generate_script(&request.topic).await?;
    Ok(Json(json!({ "current_step": new_state.step.index(), "state": new_state })))
}

async fn images_step(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = state.sessions.get(id).await?;
    let (new_state, truncated) = session.generate_images().await?;
    Ok(Json(json!({
        "current_step": new_state.step.index(),
        "state": new_state,
        "truncated": truncated,
    })))
}

async fn audio_step(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = state.sessions.get(id).await?;
    let (new_state, outcome) = session.generate_audio().await?;
    let response = match outcome {
        AudioOutcome::Synthesized { .. } => {
            json!({ "current_step": new_state.step.index(), "state": new_state })
        }
        AudioOutcome::ClientTts { text, .. } => json!({
            "current_step": new_state.step.index(),
            "state": new_state,
            "useClientTTS": true,
            "text": text,
        }),
    };
    Ok(Json(response))
}

async fn video_step(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = state.sessions.get(id).await?;
    let (new_state, handoff) = session.generate_video().await?;
    Ok(Json(json!({
        "current_step": new_state.step.index(),
        "state": new_state,
        "useClientGeneration": true,
        "message": handoff.message,
    })))
}

async fn reset_session(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let session = state.sessions.get(id).await?;
    let new_state = session.reset().await?;
    Ok(Json(json!({ "current_step": new_state.step.index(), "state": new_state })))
}
