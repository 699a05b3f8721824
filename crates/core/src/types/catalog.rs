//! Static catalog entry types.
//!
//! Catalog content is configuration shipped with the application, never
//! derived from user input. The actual data lives in `framefit-web`'s
//! services; these are just the shapes.

use serde::{Deserialize, Serialize};

use crate::types::price::Price;

/// One recommendable pair of glasses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Price,
    /// Reference to the product image (URL in the shipped catalog).
    pub image_ref: String,
    pub description: String,
    /// Locked behind the premium tier. By convention the first item of
    /// every resolved list is free and the rest are locked.
    pub premium_locked: bool,
    /// Face-shape labels this frame suits, as shown to the user.
    pub recommended_for: Vec<String>,
}

/// A frame model available in the virtual try-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameModel {
    pub id: u8,
    pub name: String,
    pub color: String,
    pub description: String,
}

/// A synthesized nearby optics shop.
///
/// Regenerated on every locator search from the typed "City, State" string;
/// never persisted. Distance and rating are decorative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticsListing {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub specialties: Vec<String>,
    pub distance: String,
    pub rating: f32,
    pub city: String,
    pub state: String,
}
