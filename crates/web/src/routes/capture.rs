//! Capture and upload handlers.
//!
//! Both submission variants converge on the same path: normalize the image,
//! run the analysis simulator, store the analysis record, and move on to
//! the results page. A reported camera failure is classified and answered
//! with its distinct message; the upload variant is always the fallback.

use axum::{
    Json,
    extract::{Multipart, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use framefit_core::ImagePayload;

use crate::error::{AppError, Result};
use crate::middleware::RequireQuestionnaire;
use crate::services::{analysis, capture};
use crate::session;
use crate::state::AppState;

/// Camera failure report from the browser.
#[derive(Debug, Deserialize)]
pub struct CameraErrorReport {
    /// The DOM exception name, e.g. `NotAllowedError`.
    pub name: String,
}

/// Camera frame submission as a base64 data URL.
#[derive(Debug, Deserialize)]
pub struct FrameSubmission {
    pub image: String,
}

/// Capture view.
pub async fn show(RequireQuestionnaire(_answers): RequireQuestionnaire) -> Json<Value> {
    Json(json!({
        "title": "Facial analysis",
        "instructions": "Take a photo with your camera or upload one",
        "fallback": "/capture/upload",
    }))
}

/// Classify a reported camera failure.
///
/// Every camera failure is recoverable by the upload fallback, so this
/// never ends the funnel; it answers with the failure's actionable message.
pub async fn camera_error(
    RequireQuestionnaire(_answers): RequireQuestionnaire,
    Json(report): Json<CameraErrorReport>,
) -> Response {
    let error = capture::CameraError::classify(&report.name);
    tracing::warn!(%error, dom_name = %report.name, "camera acquisition failed");

    AppError::CapabilityUnavailable(error.user_message().to_owned()).into_response()
}

/// Submit a camera frame.
pub async fn frame(
    RequireQuestionnaire(_answers): RequireQuestionnaire,
    session: Session,
    State(state): State<AppState>,
    Json(submission): Json<FrameSubmission>,
) -> Result<Redirect> {
    let payload = capture::frame_from_data_url(&submission.image)
        .map_err(|e| AppError::InputValidation(e.to_string()))?;

    analyze_and_store(&session, &state, payload).await
}

/// Upload a photo as an alternative to the camera.
pub async fn upload(
    RequireQuestionnaire(_answers): RequireQuestionnaire,
    session: Session,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InputValidation(e.to_string()))?
    {
        if field.file_name().is_none() {
            continue;
        }

        let content_type = field.content_type().map(ToOwned::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::InputValidation(e.to_string()))?;

        let payload = capture::payload_from_upload(content_type.as_deref(), bytes.to_vec());
        return analyze_and_store(&session, &state, payload).await;
    }

    Err(AppError::InputValidation("no file uploaded".to_owned()))
}

/// Run the simulator over the normalized payload and persist the result.
async fn analyze_and_store(
    session: &Session,
    state: &AppState,
    payload: ImagePayload,
) -> Result<Redirect> {
    let result = analysis::analyze(payload, state.config().analysis_delay())
        .await
        .map_err(|e| AppError::InputValidation(e.to_string()))?;

    session::set_analysis(session, &result).await?;
    tracing::info!(face_shape = %result.face_shape, "analysis stored");

    Ok(Redirect::to("/results"))
}
