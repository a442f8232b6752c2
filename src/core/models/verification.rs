//! Verification outcome model
//!
//! The tagged outcome of submitting a capture frame for a subject. Exactly one
//! variant is produced per attempt; callers pattern-match the variant rather
//! than inspecting free text. The `TransientFailure` message is advisory
//! display text only, classification happens once inside the capture client.

use serde::{Deserialize, Serialize};

use super::subject::SubjectId;

/// Outcome of one verification attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    /// The recognized face matched the session subject and a record was
    /// written server-side
    Verified(AttendanceSnapshot),

    /// The recognized face belongs to a different subject than the session's.
    /// Security-relevant: requires a fresh subject resolution before retrying.
    IdentityMismatch {
        /// Identifier the backend recognized instead of the session subject
        recognized_subject_id: SubjectId,
    },

    /// No face could be detected in the frame; retry with a new frame
    NoFaceDetected,

    /// The session is not permitted to record attendance for this subject.
    /// Security-relevant: requires a fresh subject resolution before retrying.
    Unauthorized,

    /// Network or server failure; retry at the user's discretion
    TransientFailure {
        /// Raw backend message, preserved verbatim for display
        message: String,
    },
}

impl VerificationResult {
    /// Whether this outcome invalidates the resolved session subject
    #[must_use]
    pub const fn invalidates_session(&self) -> bool {
        matches!(self, Self::IdentityMismatch { .. } | Self::Unauthorized)
    }
}

/// Server-reported attendance record fields, carried through unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSnapshot {
    /// Identifier of the attendance record the server wrote
    pub record_id: Option<i64>,

    /// Server confirmation message (e.g. "Checked in")
    pub message: Option<String>,

    /// Check-in time as reported by the server
    pub check_in_time: Option<String>,

    /// Check-out time as reported by the server
    pub check_out_time: Option<String>,

    /// Worked duration as reported by the server
    pub worked_duration: Option<String>,
}

/// Raw success reply from the recognition service
///
/// This is what the service port hands back before the capture client applies
/// its own identity re-check. The `recognized_subject_id` is the backend's
/// claim about whose face it saw; the client never trusts it blindly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognitionReply {
    /// Record fields to surface on success
    pub snapshot: AttendanceSnapshot,

    /// Subject the backend recognized, when it reports one
    pub recognized_subject_id: Option<SubjectId>,
}
