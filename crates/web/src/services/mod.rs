//! Funnel business logic.
//!
//! Everything here is session-agnostic: services take values and return
//! values, and the routes wire them to the session store. The simulators
//! (analysis, try-on) are async only because of their fixed simulated
//! latency; nothing blocks.

pub mod account;
pub mod analysis;
pub mod capture;
pub mod locator;
pub mod recommend;
pub mod tier;
pub mod tryon;
pub mod wizard;
