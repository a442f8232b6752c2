//! Attendance record model
//!
//! Snapshot of the server-side attendance entity. The backend keeps at most
//! one open check-in per subject per day; a check-out closes it. The client
//! never mutates records directly, it only observes them.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::subject::SubjectId;

/// One attendance record as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Record identifier
    pub id: i64,

    /// Subject the record belongs to
    pub subject_id: SubjectId,

    /// The day the record covers
    pub date: NaiveDate,

    /// Check-in time, if the subject has checked in
    pub check_in: Option<NaiveTime>,

    /// Check-out time, if the record is closed
    pub check_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Whether the record is still open (checked in, not yet out)
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_none()
    }
}

/// Metadata of one registered face sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceSample {
    /// Sample identifier
    pub id: i64,

    /// Subject the sample belongs to
    pub subject_id: SubjectId,

    /// When the sample was registered (RFC3339)
    pub created_at: String,
}
