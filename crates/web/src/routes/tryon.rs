//! Virtual try-on handlers (premium only).
//!
//! The entitlement gate runs before the analysis gate: a free-tier visitor
//! is sent to the upgrade page even when they also lack an analysis.

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{RequireAnalysis, RequirePremium};
use crate::services::tryon;
use crate::session;
use crate::state::AppState;

/// Generation request.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub model_id: u8,
}

/// Try-on view: the frame catalog plus the latest render, if any.
pub async fn show(
    RequirePremium(_user): RequirePremium,
    RequireAnalysis(_analysis): RequireAnalysis,
    session: Session,
) -> Json<Value> {
    let current = session::get_render(&session).await;

    Json(json!({
        "title": "Virtual try-on",
        "models": tryon::models(),
        "current": current.map(|r| json!({
            "model": r.model,
            "image": r.image.to_data_url(),
            "generated_at": r.generated_at,
        })),
    }))
}

/// Generate a render for the chosen model, replacing any previous one.
pub async fn generate(
    RequirePremium(_user): RequirePremium,
    RequireAnalysis(analysis): RequireAnalysis,
    session: Session,
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<Value>> {
    let render = tryon::generate(
        analysis.image,
        request.model_id,
        state.config().tryon_delay(),
    )
    .await
    .map_err(|e| AppError::InputValidation(e.to_string()))?;

    session::set_render(&session, &render).await?;
    tracing::info!(model = %render.model.name, "try-on render stored");

    Ok(Json(json!({
        "model": render.model,
        "image": render.image.to_data_url(),
        "generated_at": render.generated_at,
    })))
}

/// Download the latest render as a file, byte for byte.
pub async fn download(
    RequirePremium(_user): RequirePremium,
    session: Session,
) -> Result<Response> {
    let render = session::get_render(&session)
        .await
        .ok_or_else(|| AppError::redirect_to("/try-on"))?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        tryon::download_filename(&render.model)
    );

    Ok((
        [
            (header::CONTENT_TYPE, render.image.mime().to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        render.image.bytes().to_vec(),
    )
        .into_response())
}
