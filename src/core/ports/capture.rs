//! Capture source port
//!
//! Defines the interface to the local image source (webcam, file, test
//! fixture). The source has exclusive-use semantics: one frame acquisition
//! may be outstanding at a time, enforced by the capture client's state.

use thiserror::Error;

use crate::core::models::CaptureFrame;

/// Failures while acquiring a frame
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The device or file could not be opened
    #[error("capture source unavailable: {0}")]
    SourceUnavailable(String),

    /// The source produced no usable image data
    #[error("empty frame from capture source")]
    EmptyFrame,

    /// IO error while reading the source
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Local image source abstraction
#[cfg_attr(test, mockall::automock)]
pub trait CaptureSource: Send {
    /// Acquire and encode one frame
    ///
    /// The device buffer is released as soon as the frame is encoded; the
    /// returned frame is an independent, immutable copy.
    fn acquire(&mut self) -> Result<CaptureFrame, CaptureError>;
}
