//! Entitlement tier and subscription plan.

use serde::{Deserialize, Serialize};

/// Entitlement level of a session.
///
/// Gates access to the virtual try-on and to the locked portion of the
/// recommendation list. Flips free → premium only through an explicit
/// upgrade; never the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    #[default]
    Free,
    Premium,
}

impl Tier {
    /// Whether this tier unlocks premium features.
    #[must_use]
    pub const fn is_premium(self) -> bool {
        matches!(self, Self::Premium)
    }
}

/// Subscription plan recorded on upgrade.
///
/// Purely informational: no payment is captured anywhere in this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Monthly,
    Yearly,
}

impl Plan {
    /// Display label for the plan.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Advertised price of the plan, as shown on the upgrade page.
    #[must_use]
    pub const fn price_label(self) -> &'static str {
        match self {
            Self::Monthly => "R$ 29.90/month",
            Self::Yearly => "R$ 299.90/year",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tier_is_free() {
        assert_eq!(Tier::default(), Tier::Free);
        assert!(!Tier::Free.is_premium());
        assert!(Tier::Premium.is_premium());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Tier::Premium).expect("serialize"),
            "\"premium\""
        );
        assert_eq!(
            serde_json::to_string(&Plan::Yearly).expect("serialize"),
            "\"yearly\""
        );
    }
}
