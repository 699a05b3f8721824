//! The singleton session records.
//!
//! Exactly one of each record exists per session, last write wins. Reads
//! always return detached copies; nothing hands out shared mutable state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::catalog::FrameModel;
use crate::types::email::Email;
use crate::types::face_shape::FaceShape;
use crate::types::image::ImagePayload;
use crate::types::tier::{Plan, Tier};

/// Identity and entitlement for the current visitor.
///
/// Created on login or signup, mutated in place on upgrade, deleted only by
/// an explicit full reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub email: Email,
    /// Argon2 PHC string when the account was created through signup.
    /// Plaintext credentials are never stored.
    pub password_hash: Option<String>,
    pub tier: Tier,
    /// Plan chosen at upgrade time; `None` while the session is free.
    pub plan: Option<Plan>,
    pub created_at: DateTime<Utc>,
}

impl UserSession {
    /// Create a free-tier session for a login without signup.
    #[must_use]
    pub fn free(email: Email) -> Self {
        Self {
            email,
            password_hash: None,
            tier: Tier::Free,
            plan: None,
            created_at: Utc::now(),
        }
    }

    /// Create a premium session directly (signup-and-upgrade path).
    #[must_use]
    pub fn premium(email: Email, password_hash: String, plan: Plan) -> Self {
        Self {
            email,
            password_hash: Some(password_hash),
            tier: Tier::Premium,
            plan: Some(plan),
            created_at: Utc::now(),
        }
    }

    /// Flip the tier to premium and record the plan.
    ///
    /// Idempotent: upgrading an already-premium session is a no-op and the
    /// originally recorded plan is kept.
    pub fn upgrade(&mut self, plan: Plan) {
        if self.tier.is_premium() {
            return;
        }
        self.tier = Tier::Premium;
        self.plan = Some(plan);
    }

    /// Whether this session unlocks premium features.
    #[must_use]
    pub const fn is_premium(&self) -> bool {
        self.tier.is_premium()
    }
}

/// Output of one analysis run.
///
/// Immutable once written; replaced wholesale by the next capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacialAnalysis {
    /// The captured or uploaded image the run was based on.
    pub image: ImagePayload,
    pub face_shape: FaceShape,
    /// Templated summary embedding the label.
    pub narrative: String,
    pub computed_at: DateTime<Utc>,
}

/// Result of one try-on generation.
///
/// A new generation replaces any stored render wholesale; there is no
/// queue of pending generations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TryOnRender {
    /// Echo of the analysis image (no real compositing happens).
    pub image: ImagePayload,
    pub model: FrameModel,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn session() -> UserSession {
        UserSession::free(Email::parse("user@example.com").unwrap())
    }

    #[test]
    fn test_free_session_defaults() {
        let s = session();
        assert_eq!(s.tier, Tier::Free);
        assert!(s.plan.is_none());
        assert!(s.password_hash.is_none());
    }

    #[test]
    fn test_upgrade_records_plan() {
        let mut s = session();
        s.upgrade(Plan::Monthly);
        assert!(s.is_premium());
        assert_eq!(s.plan, Some(Plan::Monthly));
    }

    #[test]
    fn test_upgrade_is_idempotent() {
        let mut s = session();
        s.upgrade(Plan::Monthly);
        let after_first = s.clone();

        // Second upgrade is a no-op; the original plan survives.
        s.upgrade(Plan::Yearly);
        assert_eq!(s, after_first);
        assert_eq!(s.plan, Some(Plan::Monthly));
    }

    #[test]
    fn test_premium_signup_session() {
        let s = UserSession::premium(
            Email::parse("buyer@example.com").unwrap(),
            "$argon2id$stub".to_owned(),
            Plan::Yearly,
        );
        assert!(s.is_premium());
        assert_eq!(s.plan, Some(Plan::Yearly));
    }
}
