//! Capture/upload normalization.
//!
//! The camera itself is a browser capability; the server's side of the
//! adapter is (a) folding both variants into one [`ImagePayload`] and
//! (b) classifying reported camera-acquisition failures into a closed
//! error type so every failure gets a distinct, actionable message and the
//! upload fallback.

use serde::Serialize;
use thiserror::Error;

use framefit_core::{ImageError, ImagePayload};

/// MIME type assumed for uploads that arrive without one.
const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Closed classification of camera acquisition failures.
///
/// Mapped from the DOM exception names the browser reports. Every variant
/// is recoverable: the caller falls back to the upload variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraError {
    #[error("no camera device found")]
    DeviceNotFound,
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("camera device busy")]
    DeviceBusy,
    #[error("camera unavailable")]
    Unknown,
}

impl CameraError {
    /// Classify a DOM exception name reported by the browser.
    #[must_use]
    pub fn classify(dom_error_name: &str) -> Self {
        match dom_error_name {
            "NotFoundError" | "DevicesNotFoundError" => Self::DeviceNotFound,
            "NotAllowedError" | "PermissionDeniedError" => Self::PermissionDenied,
            "NotReadableError" | "TrackStartError" => Self::DeviceBusy,
            _ => Self::Unknown,
        }
    }

    /// The user-facing message for this failure.
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::DeviceNotFound => "No camera was found on your device.",
            Self::PermissionDenied => {
                "Camera access was denied. Please allow it in your browser settings."
            }
            Self::DeviceBusy => "The camera is being used by another application.",
            Self::Unknown => "The camera could not be accessed.",
        }
    }
}

/// Normalize a camera frame posted as a data URL.
///
/// # Errors
///
/// Returns an error if the string is not a valid base64 data URL.
pub fn frame_from_data_url(data_url: &str) -> Result<ImagePayload, ImageError> {
    ImagePayload::from_data_url(data_url)
}

/// Normalize an uploaded file.
///
/// No size or type validation happens here: whatever the host file picker
/// returned is accepted, matching the camera path's output shape.
#[must_use]
pub fn payload_from_upload(content_type: Option<&str>, bytes: Vec<u8>) -> ImagePayload {
    let mime = content_type.unwrap_or(DEFAULT_IMAGE_MIME);
    ImagePayload::from_bytes(mime, bytes)
}
