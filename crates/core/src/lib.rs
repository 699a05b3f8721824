//! FrameFit Core - Shared domain types.
//!
//! This crate provides the types shared across FrameFit components:
//! - `web` - The public funnel (questionnaire, facial analysis, results)
//! - `integration-tests` - End-to-end funnel scenarios
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage access.
//! Everything stateful (sessions, simulators, routing) lives in the `web`
//! crate and operates over these types.
//!
//! # Modules
//!
//! - [`types`] - Emails, tiers, face shapes, questionnaire enums, session
//!   records and static catalog entries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
