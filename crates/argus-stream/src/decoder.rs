//! Camera frame decoding.
//!
//! The camera socket delivers JSON envelopes with an inline base64 JPEG.
//! Decoding is pure and synchronous here; the runtime runs it on a
//! blocking worker so the event loop never stalls on a large frame.

use base64::Engine;
use image::RgbImage;
use serde::Deserialize;
use thiserror::Error;

// ── Wire shape ────────────────────────────────────────────────────────────────

/// Inbound camera message. An envelope without a `frame` key is a valid
/// no-op, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrameEnvelope {
    pub frame: Option<String>,
    pub timestamp: Option<String>,
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Why a camera payload failed to become a raster.
///
/// Callers swallow these after logging: a bad frame drops, the previous
/// raster stays on screen, and nothing else is affected.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed camera envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("Invalid base64 frame payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Undecodable image: {0}")]
    Image(#[from] image::ImageError),
}

// ── Decoding ──────────────────────────────────────────────────────────────────

/// Decode a raw camera payload into an RGB raster.
///
/// Returns `Ok(None)` when the envelope carries no `frame` field.
pub fn decode_frame(raw: &str) -> Result<Option<RgbImage>, DecodeError> {
    let envelope: FrameEnvelope = serde_json::from_str(raw)?;
    let Some(b64) = envelope.frame else {
        return Ok(None);
    };
    let bytes = base64::engine::general_purpose::STANDARD.decode(b64.as_bytes())?;
    let image = image::load_from_memory(&bytes)?;
    Ok(Some(image.to_rgb8()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    /// Encode a small solid-color frame as a base64 JPEG.
    fn jpeg_b64(width: u32, height: u32) -> String {
        let img = RgbImage::from_pixel(width, height, image::Rgb([10, 200, 30]));
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Jpeg)
            .expect("in-memory jpeg encode");
        STANDARD.encode(buf.into_inner())
    }

    #[test]
    fn test_decode_valid_frame() {
        let raw = format!(
            "{{\"frame\": \"{}\", \"timestamp\": \"2026-08-28T10:00:00\"}}",
            jpeg_b64(8, 6)
        );
        let raster = decode_frame(&raw).unwrap().expect("frame present");
        assert_eq!(raster.width(), 8);
        assert_eq!(raster.height(), 6);
    }

    #[test]
    fn test_missing_frame_key_is_noop() {
        let result = decode_frame("{\"timestamp\": \"2026-08-28T10:00:00\"}").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_empty_envelope_is_noop() {
        assert!(decode_frame("{}").unwrap().is_none());
    }

    #[test]
    fn test_malformed_json_is_envelope_error() {
        let err = decode_frame("{oops").unwrap_err();
        assert!(matches!(err, DecodeError::Envelope(_)));
    }

    #[test]
    fn test_invalid_base64_is_base64_error() {
        let err = decode_frame("{\"frame\": \"!!not-base64!!\"}").unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn test_valid_base64_garbage_is_image_error() {
        let garbage = STANDARD.encode(b"definitely not a jpeg");
        let raw = format!("{{\"frame\": \"{garbage}\"}}");
        let err = decode_frame(&raw).unwrap_err();
        assert!(matches!(err, DecodeError::Image(_)));
    }
}
