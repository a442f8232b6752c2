//! Capture frame model
//!
//! One encoded image produced by the capture source for a single verification
//! attempt. A frame is immutable once produced and is consumed by value
//! exactly once; a failed attempt never retries with a stale frame.

use chrono::{DateTime, Utc};

/// An opaque encoded image captured at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureFrame {
    bytes: Vec<u8>,
    mime: String,
    captured_at: DateTime<Utc>,
}

impl CaptureFrame {
    /// Create a frame from encoded image bytes and their mime type
    #[must_use]
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
            captured_at: Utc::now(),
        }
    }

    /// The mime type of the encoded image (e.g. `image/jpeg`)
    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// When the frame was captured
    #[must_use]
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Size of the encoded image in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the frame carries no image data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the frame, yielding the encoded bytes and mime type
    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.bytes, self.mime)
    }
}
