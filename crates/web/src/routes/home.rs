//! Landing page and health check.

use axum::Json;
use serde_json::{Value, json};

use crate::middleware::OptionalUser;

/// Funnel landing view.
pub async fn home(OptionalUser(user): OptionalUser) -> Json<Value> {
    Json(json!({
        "title": "FrameFit",
        "tagline": "Find the perfect glasses for your face shape",
        "logged_in": user.is_some(),
        "tier": user.map(|u| u.tier),
        "start": "/login",
    }))
}

/// Liveness health check endpoint.
pub async fn health() -> &'static str {
    "ok"
}
