//! Tier gating.
//!
//! One place answers "does this tier unlock that feature", so the routes
//! never compare tiers directly.

use framefit_core::Tier;

/// Features gated behind the premium tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// The virtual try-on simulator.
    TryOn,
    /// The full recommendation list instead of the single free item.
    UnlimitedRecommendations,
}

/// Whether the given tier must upgrade before using the feature.
#[must_use]
pub const fn requires_upgrade(tier: Tier, feature: Feature) -> bool {
    match feature {
        Feature::TryOn | Feature::UnlimitedRecommendations => !tier.is_premium(),
    }
}
