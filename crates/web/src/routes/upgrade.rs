//! Upgrade and signup handlers.
//!
//! Plan selection branches on identity: a logged-in visitor upgrades in
//! place (idempotently, keeping an already-recorded plan), an anonymous
//! one is asked to sign up first. Signup validates, hashes the password,
//! and writes a premium record in one step.

use axum::{
    Form, Json,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use framefit_core::{Plan, UserSession};

use crate::error::{AppError, Result};
use crate::middleware::OptionalUser;
use crate::services::account;
use crate::session;

/// Plan selection form data.
#[derive(Debug, Deserialize)]
pub struct PlanForm {
    pub plan: Plan,
}

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub plan: Plan,
}

/// Plan comparison view.
pub async fn show(OptionalUser(user): OptionalUser) -> Json<Value> {
    let plans: Vec<Value> = [Plan::Monthly, Plan::Yearly]
        .iter()
        .map(|plan| {
            json!({
                "plan": plan,
                "label": plan.label(),
                "price": plan.price_label(),
            })
        })
        .collect();

    Json(json!({
        "title": "Go Premium",
        "plans": plans,
        "free_features": [
            "Basic facial analysis",
            "1 free recommendation",
            "Store locator",
            "Email support",
        ],
        "premium_features": [
            "Advanced AI facial analysis",
            "Unlimited recommendations",
            "Real-time virtual try-on",
            "Priority support",
        ],
        "logged_in": user.is_some(),
    }))
}

/// Select a plan.
///
/// Logged-in visitors upgrade directly and move on to the try-on;
/// anonymous visitors are told to sign up.
pub async fn select_plan(
    OptionalUser(user): OptionalUser,
    session: Session,
    Form(form): Form<PlanForm>,
) -> Result<Response> {
    let Some(mut user) = user else {
        return Ok(Json(json!({ "next": "signup", "plan": form.plan })).into_response());
    };

    user.upgrade(form.plan);
    session::set_user(&session, &user).await?;
    tracing::info!(plan = ?user.plan, "user upgraded to premium");

    Ok(Redirect::to("/try-on").into_response())
}

/// Create an account with the premium entitlement in one step.
pub async fn signup(session: Session, Form(form): Form<SignupForm>) -> Result<Redirect> {
    let (email, password_hash) =
        account::validate_signup(&form.email, &form.password, &form.password_confirm)
            .map_err(|e| AppError::InputValidation(e.to_string()))?;

    let user = UserSession::premium(email, password_hash, form.plan);
    session::set_user(&session, &user).await?;
    tracing::info!(plan = ?form.plan, "premium account created");

    Ok(Redirect::to("/try-on"))
}
