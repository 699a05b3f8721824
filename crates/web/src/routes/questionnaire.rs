//! Questionnaire wizard handlers.
//!
//! The wizard state machine lives in [`crate::services::wizard`]; these
//! handlers load it from the session, apply one transition, and store it
//! back. The commit transition writes the answers record and discards the
//! draft.

use axum::{
    Form, Json,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use framefit_core::UsageActivity;

use crate::error::Result;
use crate::services::wizard::{Advance, AnswerPatch, Retreat, TOTAL_STEPS, Wizard};
use crate::session;

/// Activity toggle form data.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub activity: UsageActivity,
}

async fn load_wizard(session: &Session) -> Wizard {
    session::get_wizard(session).await.unwrap_or_default()
}

fn step_view(wizard: &Wizard) -> Json<Value> {
    Json(json!({
        "step": wizard.step(),
        "total_steps": TOTAL_STEPS,
        "draft": wizard.draft(),
        "can_proceed": wizard.can_proceed(),
    }))
}

/// Current step view.
pub async fn show(session: Session) -> Json<Value> {
    let wizard = load_wizard(&session).await;
    step_view(&wizard)
}

/// Apply a partial answer to the draft.
pub async fn answer(session: Session, Form(patch): Form<AnswerPatch>) -> Result<Json<Value>> {
    let mut wizard = load_wizard(&session).await;
    wizard.apply(patch);
    session::set_wizard(&session, &wizard).await?;
    Ok(step_view(&wizard))
}

/// Toggle a multi-select usage activity.
pub async fn toggle(session: Session, Form(form): Form<ToggleForm>) -> Result<Json<Value>> {
    let mut wizard = load_wizard(&session).await;
    wizard.toggle_activity(form.activity);
    session::set_wizard(&session, &wizard).await?;
    Ok(step_view(&wizard))
}

/// Advance one step. On the final step this commits the answers record,
/// discards the draft, and moves the visitor on to capture.
pub async fn next(session: Session) -> Result<Response> {
    let mut wizard = load_wizard(&session).await;

    match wizard.next() {
        Advance::Committed(answers) => {
            session::set_questionnaire(&session, &answers).await?;
            session::clear_wizard(&session).await?;
            tracing::info!("questionnaire committed");
            Ok(Redirect::to("/capture").into_response())
        }
        Advance::Moved(_) => {
            session::set_wizard(&session, &wizard).await?;
            Ok(step_view(&wizard).into_response())
        }
        // Incomplete step: no error, forward progress is just unavailable.
        Advance::Stayed => Ok(step_view(&wizard).into_response()),
    }
}

/// Go back one step. From step 1 the wizard exits to the landing page;
/// the draft is kept either way.
pub async fn back(session: Session) -> Result<Response> {
    let mut wizard = load_wizard(&session).await;

    match wizard.back() {
        Retreat::Moved(_) => {
            session::set_wizard(&session, &wizard).await?;
            Ok(step_view(&wizard).into_response())
        }
        Retreat::Exited => Ok(Redirect::to("/").into_response()),
    }
}
