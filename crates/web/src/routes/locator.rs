//! Store locator handler.
//!
//! Open to everyone regardless of login or funnel progress. With no
//! explicit query the search seeds itself from the committed questionnaire
//! location, matching how the visitor entered the funnel.

use axum::{Json, extract::Query};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use crate::services::locator;
use crate::session;

/// Locator query parameters.
#[derive(Debug, Deserialize)]
pub struct LocatorQuery {
    pub location: Option<String>,
}

/// Nearby optics listings view.
pub async fn show(session: Session, Query(query): Query<LocatorQuery>) -> Json<Value> {
    let location = match query.location {
        Some(loc) if !loc.trim().is_empty() => Some(loc),
        _ => session::get_questionnaire(&session)
            .await
            .map(|answers| answers.location),
    };

    let Some(location) = location else {
        return Json(json!({
            "title": "Nearby optics",
            "prompt": "Enter a location to search",
            "listings": [],
        }));
    };

    let listings = locator::find_nearby(&location);
    Json(json!({
        "title": "Nearby optics",
        "location": location,
        "listings": listings,
    }))
}
