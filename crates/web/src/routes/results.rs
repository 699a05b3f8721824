//! Results page handler.
//!
//! Shows the analysis outcome and the resolved recommendation list. The
//! full list always ships to the view; premium items carry a `locked` flag
//! for free-tier (and anonymous) visitors instead of being filtered out,
//! so the page can show what an upgrade unlocks.

use axum::Json;
use serde::Serialize;
use serde_json::{Value, json};

use framefit_core::{RecommendationItem, Tier};

use crate::middleware::{OptionalUser, RequireAnalysis};
use crate::services::recommend;
use crate::services::tier::{Feature, requires_upgrade};

#[derive(Debug, Serialize)]
struct ItemView {
    #[serde(flatten)]
    item: RecommendationItem,
    /// Whether the current visitor must upgrade to see this item.
    locked: bool,
}

/// Results view.
pub async fn show(
    RequireAnalysis(analysis): RequireAnalysis,
    OptionalUser(user): OptionalUser,
) -> Json<Value> {
    let tier = user.as_ref().map_or(Tier::Free, |u| u.tier);
    let gated = requires_upgrade(tier, Feature::UnlimitedRecommendations);

    let items: Vec<ItemView> = recommend::resolve_shape(analysis.face_shape)
        .into_iter()
        .map(|item| ItemView {
            locked: item.premium_locked && gated,
            item,
        })
        .collect();

    Json(json!({
        "face_shape": analysis.face_shape,
        "narrative": analysis.narrative,
        "computed_at": analysis.computed_at,
        "tier": tier,
        "recommendations": items,
        "try_on": if requires_upgrade(tier, Feature::TryOn) { "/upgrade" } else { "/try-on" },
        "locator": "/locator",
    }))
}
