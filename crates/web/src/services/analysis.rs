//! The facial-analysis simulator.
//!
//! Not a classifier: after a fixed simulated latency the label is drawn
//! uniformly at random from the six face shapes and wrapped in a templated
//! narrative. A real implementation would swap `pick_shape` for genuine
//! inference (plus retry and terminal-failure handling) and leave the rest
//! of the flow unchanged.

use std::time::Duration;

use chrono::Utc;
use rand::seq::IndexedRandom;
use thiserror::Error;

use framefit_core::{FaceShape, FacialAnalysis, ImagePayload};

/// Errors the simulator can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The payload carries no image data.
    #[error("image payload is empty")]
    InvalidInput,
}

/// Run one simulated analysis over the captured image.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidInput`] if the payload is empty. No
/// other failure mode exists by construction.
pub async fn analyze(
    image: ImagePayload,
    delay: Duration,
) -> Result<FacialAnalysis, AnalysisError> {
    if image.is_empty() {
        return Err(AnalysisError::InvalidInput);
    }

    tokio::time::sleep(delay).await;

    let face_shape = pick_shape();
    tracing::debug!(%face_shape, "analysis complete");

    Ok(FacialAnalysis {
        image,
        narrative: narrative_for(face_shape),
        face_shape,
        computed_at: Utc::now(),
    })
}

/// Draw one label uniformly at random.
fn pick_shape() -> FaceShape {
    let mut rng = rand::rng();
    *FaceShape::ALL.choose(&mut rng).unwrap_or(&FaceShape::Oval)
}

/// Substitute the label into the narrative template.
fn narrative_for(shape: FaceShape) -> String {
    format!(
        "Your face shape is {}, with harmonious features that pair \
         naturally with specific frame styles.",
        shape.as_str().to_lowercase()
    )
}
