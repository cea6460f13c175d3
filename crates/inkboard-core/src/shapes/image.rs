//! Opaque image payloads for image shapes.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from building image data.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image data is empty")]
    Empty,
    #[error("Unrecognized image format")]
    UnknownFormat,
    #[error("Invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Image format for stored image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    WebP,
}

impl ImageFormat {
    /// Get MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }

    /// Detect format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(ImageFormat::Png);
        }
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::Jpeg);
        }
        // RIFF....WEBP
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(ImageFormat::WebP);
        }
        None
    }
}

/// Encoded image bytes, stored base64 so shapes stay plain serializable data.
///
/// The engine never decodes pixels; the renderer owns that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub format: ImageFormat,
    pub data_base64: String,
}

impl ImageData {
    /// Wrap raw bytes, detecting the format from their magic bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ImageError> {
        if data.is_empty() {
            return Err(ImageError::Empty);
        }
        let format = ImageFormat::from_magic_bytes(data).ok_or(ImageError::UnknownFormat)?;
        Ok(Self {
            format,
            data_base64: STANDARD.encode(data),
        })
    }

    /// Wrap already base64-encoded bytes after validating them.
    pub fn from_base64(encoded: &str) -> Result<Self, ImageError> {
        let bytes = STANDARD.decode(encoded)?;
        Self::from_bytes(&bytes)
    }

    /// Decode back to raw bytes.
    pub fn bytes(&self) -> Result<Vec<u8>, ImageError> {
        Ok(STANDARD.decode(&self.data_base64)?)
    }

    /// `data:` URL for renderers that take one.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.format.mime_type(), self.data_base64)
    }
}
