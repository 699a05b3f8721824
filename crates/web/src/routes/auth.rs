//! Login and logout handlers.
//!
//! Login is email-only and always produces a free-tier record; the premium
//! entitlement is acquired through the upgrade flow. Logout is the explicit
//! full reset: every funnel record in the session is destroyed.

use axum::{
    Form, Json,
    response::Redirect,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use framefit_core::{Email, UserSession};

use crate::error::{AppError, Result};
use crate::middleware::OptionalUser;
use crate::session;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
}

/// Login view.
pub async fn login_page(OptionalUser(user): OptionalUser) -> Json<Value> {
    Json(json!({
        "title": "Sign in",
        "fields": ["email"],
        "logged_in": user.is_some(),
    }))
}

/// Login action: overwrite the user record with a fresh free-tier session.
pub async fn login(session: Session, Form(form): Form<LoginForm>) -> Result<Redirect> {
    let email =
        Email::parse(&form.email).map_err(|e| AppError::InputValidation(e.to_string()))?;

    session::set_user(&session, &UserSession::free(email)).await?;
    tracing::info!("user logged in");

    Ok(Redirect::to("/questionnaire"))
}

/// Logout action: destroys every record, not just the user.
pub async fn logout(session: Session) -> Result<Redirect> {
    session::reset(&session).await?;
    Ok(Redirect::to("/"))
}
