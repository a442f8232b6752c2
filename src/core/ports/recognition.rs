//! Recognition/attendance service port
//!
//! Defines the interface to the remote recognition backend. The HTTP adapter
//! implements it against the REST API; tests substitute mocks.

use thiserror::Error;

use crate::core::models::{AttendanceRecord, CaptureFrame, RecognitionReply, Subject, SubjectId};

/// Failures reported by the recognition service
///
/// `Rejected` carries the backend's textual error body; the capture client
/// classifies it exactly once. Transport failures (no response, timeout,
/// unparseable body) are indistinguishable from an unclassifiable error body
/// and both end up as a transient outcome.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// The backend answered with an error body
    #[error("service rejected the request: {0}")]
    Rejected(String),

    /// The request never produced a usable response
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Recognition/attendance backend abstraction
#[cfg_attr(test, mockall::automock)]
pub trait RecognitionService: Send + Sync {
    /// Fetch the display profile for a subject id
    fn lookup_subject(&self, id: &SubjectId) -> Result<Subject, ServiceError>;

    /// Submit a frame for check-in/check-out on behalf of a subject
    ///
    /// The subject id travels with the frame so the backend can reject
    /// mismatches server-side; the client still re-checks the reply.
    fn check_in_out(
        &self,
        subject_id: &SubjectId,
        frame: CaptureFrame,
    ) -> Result<RecognitionReply, ServiceError>;

    /// Fetch today's attendance records
    fn today(&self) -> Result<Vec<AttendanceRecord>, ServiceError>;
}
