//! The virtual try-on simulator.
//!
//! Premium-only feature. Like the analysis simulator this stands in for a
//! real image-generation backend: after a fixed simulated latency the
//! "render" echoes the analysis photo byte for byte, tagged with the chosen
//! frame model. A real backend would compose the frame onto the photo and
//! return genuinely new bytes; everything around the call already treats
//! the output as an opaque image.

use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

use framefit_core::{FrameModel, ImagePayload, TryOnRender};

/// Errors the simulator can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TryOnError {
    /// The payload carries no image data.
    #[error("image payload is empty")]
    InvalidInput,
    /// No frame model with that id exists in the catalog.
    #[error("unknown frame model: {0}")]
    UnknownModel(u8),
}

/// The fixed try-on frame catalog.
#[must_use]
pub fn models() -> Vec<FrameModel> {
    vec![
        model(1, "Classic Aviator", "Gold", "Classic aviator frame in gold metal with gradient lenses"),
        model(2, "Modern Wayfarer", "Matte Black", "Modern wayfarer frame in matte black acetate"),
        model(3, "Elegant Cat Eye", "Tortoise", "Elegant cat eye frame in tortoise acetate"),
        model(4, "Sport Wrap", "Metallic Blue", "Sporty wrap frame in lightweight metallic blue material"),
        model(5, "Vintage Round", "Rose Gold", "Vintage round frame in rose gold metal"),
    ]
}

/// Look up a catalog model by id.
#[must_use]
pub fn find_model(id: u8) -> Option<FrameModel> {
    models().into_iter().find(|m| m.id == id)
}

/// Suggested filename for a downloaded render.
#[must_use]
pub fn download_filename(model: &FrameModel) -> String {
    format!(
        "virtual-try-on-{}.jpg",
        model.name.to_lowercase().replace(' ', "-")
    )
}

/// Generate one simulated try-on render.
///
/// Selecting a new model replaces the previous render wholesale; the
/// caller persists whatever this returns.
///
/// # Errors
///
/// Returns [`TryOnError::UnknownModel`] for an id outside the catalog and
/// [`TryOnError::InvalidInput`] for an empty photo.
pub async fn generate(
    image: ImagePayload,
    model_id: u8,
    delay: Duration,
) -> Result<TryOnRender, TryOnError> {
    let model = find_model(model_id).ok_or(TryOnError::UnknownModel(model_id))?;
    if image.is_empty() {
        return Err(TryOnError::InvalidInput);
    }

    tokio::time::sleep(delay).await;
    tracing::debug!(model = %model.name, "try-on render complete");

    Ok(TryOnRender {
        image,
        model,
        generated_at: Utc::now(),
    })
}

fn model(id: u8, name: &str, color: &str, description: &str) -> FrameModel {
    FrameModel {
        id,
        name: name.to_owned(),
        color: color.to_owned(),
        description: description.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn photo() -> ImagePayload {
        ImagePayload::from_bytes("image/jpeg", vec![0xFF, 0xD8, 0x01, 0x02])
    }

    #[test]
    fn test_catalog_has_five_models_with_unique_ids() {
        let catalog = models();
        assert_eq!(catalog.len(), 5);
        let mut ids: Vec<u8> = catalog.iter().map(|m| m.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn test_render_echoes_the_source_photo() {
        let render = generate(photo(), 1, Duration::ZERO).await.unwrap();
        assert_eq!(render.image, photo());
        assert_eq!(render.model.name, "Classic Aviator");
    }

    #[tokio::test]
    async fn test_unknown_model_is_rejected() {
        assert_eq!(
            generate(photo(), 99, Duration::ZERO).await,
            Err(TryOnError::UnknownModel(99))
        );
    }

    #[tokio::test]
    async fn test_empty_photo_is_rejected() {
        let empty = ImagePayload::from_bytes("image/jpeg", Vec::new());
        assert_eq!(
            generate(empty, 1, Duration::ZERO).await,
            Err(TryOnError::InvalidInput)
        );
    }

    #[test]
    fn test_download_filename_is_kebab_case() {
        let m = find_model(2).unwrap();
        assert_eq!(download_filename(&m), "virtual-try-on-modern-wayfarer.jpg");
    }
}
