//! File-backed capture source
//!
//! Reads an already-encoded image from disk. This is the CLI's stand-in for
//! a webcam: the frame is encoded once at acquisition time and handed over
//! as an immutable copy, same contract as a live device.

use std::path::{Path, PathBuf};

use crate::core::models::CaptureFrame;
use crate::core::ports::{CaptureError, CaptureSource};

/// Capture source that reads an encoded image file
#[derive(Debug, Clone)]
pub struct FileCaptureSource {
    path: PathBuf,
}

impl FileCaptureSource {
    /// Create a source for the given image path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Guess the mime type from the file extension, defaulting to JPEG
    fn mime_for(path: &Path) -> &'static str {
        match path.extension().and_then(|e| e.to_str()).map(str::to_lowercase).as_deref() {
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("bmp") => "image/bmp",
            Some("webp") => "image/webp",
            _ => "image/jpeg",
        }
    }
}

impl CaptureSource for FileCaptureSource {
    fn acquire(&mut self) -> Result<CaptureFrame, CaptureError> {
        if !self.path.exists() {
            return Err(CaptureError::SourceUnavailable(self.path.display().to_string()));
        }

        let bytes = std::fs::read(&self.path)?;
        if bytes.is_empty() {
            return Err(CaptureError::EmptyFrame);
        }

        Ok(CaptureFrame::new(bytes, Self::mime_for(&self.path)))
    }
}
