//! FrameFit funnel library.
//!
//! This crate provides the funnel functionality as a library, allowing it
//! to be tested end-to-end (see `crates/integration-tests`) and reused.
//!
//! # Components
//!
//! - [`session`] - The three singleton session records and their typed store
//! - [`services`] - Wizard state machine, capture normalization, analysis
//!   and try-on simulators, recommendation resolver, tier gate, locator
//! - [`routes`] - The HTTP navigation surface
//! - [`middleware`] - Precondition extractors (auth, premium, funnel order)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router with session and trace layers.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = session::create_session_layer(state.config());

    routes::routes()
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
