//! Normalized encoded-image payload.
//!
//! Both capture variants (camera frame, file upload) reduce to this one
//! shape, so everything downstream of capture is capability-agnostic.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

/// Errors that can occur when decoding an [`ImagePayload`] from a data URL.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The string is not a `data:` URL.
    #[error("not a data URL")]
    NotADataUrl,
    /// The data URL is not base64-encoded.
    #[error("data URL must be base64-encoded")]
    UnsupportedEncoding,
    /// The base64 payload could not be decoded.
    #[error("invalid base64 payload")]
    InvalidBase64,
}

/// One still image, as captured or uploaded.
///
/// Serialized as a `data:` URL so the stored form matches what the browser
/// produced and what a "download" action re-emits byte-identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImagePayload {
    mime: String,
    data: Vec<u8>,
}

impl ImagePayload {
    /// Wrap raw encoded image bytes with their MIME type.
    #[must_use]
    pub fn from_bytes(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// Decode a `data:<mime>;base64,<payload>` URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a base64 data URL or the
    /// payload fails to decode.
    pub fn from_data_url(url: &str) -> Result<Self, ImageError> {
        let rest = url.strip_prefix("data:").ok_or(ImageError::NotADataUrl)?;
        let (head, payload) = rest.split_once(',').ok_or(ImageError::NotADataUrl)?;
        let mime = head
            .strip_suffix(";base64")
            .ok_or(ImageError::UnsupportedEncoding)?;

        let data = BASE64
            .decode(payload)
            .map_err(|_| ImageError::InvalidBase64)?;

        Ok(Self {
            mime: mime.to_owned(),
            data,
        })
    }

    /// Re-encode as a `data:` URL.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, BASE64.encode(&self.data))
    }

    /// The MIME type of the encoded bytes.
    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// The encoded image bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Whether the payload carries no image data at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl TryFrom<String> for ImagePayload {
    type Error = ImageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_data_url(&value)
    }
}

impl From<ImagePayload> for String {
    fn from(payload: ImagePayload) -> Self {
        payload.to_data_url()
    }
}
