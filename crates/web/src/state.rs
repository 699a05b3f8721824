//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::FunnelConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The funnel keeps no server-side user data
/// outside the per-visitor session, so state is configuration only.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: FunnelConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: FunnelConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    /// Get a reference to the funnel configuration.
    #[must_use]
    pub fn config(&self) -> &FunnelConfig {
        &self.inner.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_cheap_to_clone() {
        let state = AppState::new(FunnelConfig::for_tests());
        let clone = state.clone();
        assert_eq!(clone.config().port, state.config().port);
    }
}
