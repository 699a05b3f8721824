//! HTTP route handlers for the funnel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Funnel landing
//! GET  /health                 - Health check
//!
//! # Auth
//! GET  /login                  - Login view
//! POST /login                  - Email login (free tier)
//! POST /logout                 - Full session reset
//!
//! # Questionnaire wizard
//! GET  /questionnaire          - Current step view
//! POST /questionnaire/answer   - Apply a partial answer to the draft
//! POST /questionnaire/toggle   - Toggle a usage activity
//! POST /questionnaire/next     - Advance (commits on the final step)
//! POST /questionnaire/back     - Go back (exits from step 1)
//!
//! # Capture
//! GET  /capture                - Capture view
//! POST /capture/camera-error   - Classify a reported camera failure
//! POST /capture/frame          - Submit a camera frame (data URL)
//! POST /capture/upload         - Upload a photo (multipart)
//!
//! # Results
//! GET  /results                - Recommendations for the analyzed shape
//!
//! # Try-on (premium)
//! GET  /try-on                 - Try-on view with the frame catalog
//! POST /try-on/generate        - Generate a render for a model
//! GET  /try-on/download        - Download the latest render
//!
//! # Locator
//! GET  /locator                - Nearby optics listings
//!
//! # Upgrade
//! GET  /upgrade                - Plan comparison
//! POST /upgrade                - Select a plan (upgrade or request signup)
//! POST /upgrade/signup         - Create an account with premium entitlement
//! ```

pub mod auth;
pub mod capture;
pub mod home;
pub mod locator;
pub mod questionnaire;
pub mod results;
pub mod tryon;
pub mod upgrade;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the questionnaire wizard router.
pub fn questionnaire_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(questionnaire::show))
        .route("/answer", post(questionnaire::answer))
        .route("/toggle", post(questionnaire::toggle))
        .route("/next", post(questionnaire::next))
        .route("/back", post(questionnaire::back))
}

/// Create the capture routes router.
pub fn capture_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(capture::show))
        .route("/camera-error", post(capture::camera_error))
        .route("/frame", post(capture::frame))
        .route("/upload", post(capture::upload))
}

/// Create the try-on routes router.
pub fn tryon_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(tryon::show))
        .route("/generate", post(tryon::generate))
        .route("/download", get(tryon::download))
}

/// Create the upgrade routes router.
pub fn upgrade_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(upgrade::show).post(upgrade::select_plan))
        .route("/signup", post(upgrade::signup))
}

/// Create all routes for the funnel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(home::health))
        .nest("/questionnaire", questionnaire_routes())
        .nest("/capture", capture_routes())
        .route("/results", get(results::show))
        .nest("/try-on", tryon_routes())
        .route("/locator", get(locator::show))
        .nest("/upgrade", upgrade_routes())
        .merge(auth_routes())
}
