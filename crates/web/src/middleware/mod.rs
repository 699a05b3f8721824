//! Request extractors guarding the funnel.
//!
//! Two families: identity/entitlement guards ([`auth`]) and funnel-stage
//! prerequisite guards ([`funnel`]). All of them read the session records
//! set by earlier steps and reject with a redirect to the earliest missing
//! prerequisite, so a visitor who lands mid-funnel is walked back instead
//! of shown an error.

pub mod auth;
pub mod funnel;

pub use auth::{OptionalUser, RequirePremium};
pub use funnel::{RequireAnalysis, RequireQuestionnaire};
