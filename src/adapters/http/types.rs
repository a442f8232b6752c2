//! Wire types for the attendance REST backend
//!
//! Serde DTOs matching the backend's JSON bodies, converted into core models
//! at the adapter boundary so the protocol never sees wire field names.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::core::models::{
    AttendanceRecord, AttendanceSnapshot, FaceSample, RecognitionReply, Subject, SubjectId,
};

/// Success body of `POST /attendance/check_in_out/`
#[derive(Debug, Deserialize)]
pub struct CheckInOutBody {
    /// Confirmation message
    pub message: Option<String>,

    /// Identifier of the written attendance record
    #[serde(alias = "id")]
    pub record_id: Option<i64>,

    /// Check-in time, when this call opened the record
    pub check_in_time: Option<String>,

    /// Check-out time, when this call closed the record
    pub check_out_time: Option<String>,

    /// Worked duration, reported on check-out
    pub worked_time: Option<String>,

    /// Subject the backend recognized in the frame
    pub employee_id: Option<String>,
}

impl From<CheckInOutBody> for RecognitionReply {
    fn from(body: CheckInOutBody) -> Self {
        Self {
            snapshot: AttendanceSnapshot {
                record_id: body.record_id,
                message: body.message,
                check_in_time: body.check_in_time,
                check_out_time: body.check_out_time,
                worked_duration: body.worked_time,
            },
            recognized_subject_id: body.employee_id.map(SubjectId::from),
        }
    }
}

/// Error body returned with a non-success status
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// The backend's textual error classification
    pub error: String,
}

/// Body of `GET /employees/{id}/`
#[derive(Debug, Deserialize)]
pub struct EmployeeBody {
    /// Stable employee identifier
    pub employee_id: String,

    /// Given name
    #[serde(default)]
    pub first_name: String,

    /// Family name
    #[serde(default)]
    pub last_name: String,
}

impl From<EmployeeBody> for Subject {
    fn from(body: EmployeeBody) -> Self {
        let display_name = format!("{} {}", body.first_name, body.last_name).trim().to_string();
        Self::new(body.employee_id, display_name)
    }
}

/// One entry of `GET /employees/{id}/face_data/`
#[derive(Debug, Deserialize)]
pub struct FaceDataBody {
    /// Sample identifier
    pub id: i64,

    /// Subject the sample belongs to
    pub employee: String,

    /// Registration timestamp (RFC3339)
    pub created_at: String,
}

impl From<FaceDataBody> for FaceSample {
    fn from(body: FaceDataBody) -> Self {
        Self {
            id: body.id,
            subject_id: SubjectId::from(body.employee),
            created_at: body.created_at,
        }
    }
}

/// One entry of `GET /attendance/today/`
#[derive(Debug, Deserialize)]
pub struct AttendanceBody {
    /// Record identifier
    pub id: i64,

    /// Subject the record belongs to
    pub employee_id: String,

    /// The day the record covers
    pub date: NaiveDate,

    /// Check-in time
    pub check_in_time: Option<NaiveTime>,

    /// Check-out time
    pub check_out_time: Option<NaiveTime>,
}

impl From<AttendanceBody> for AttendanceRecord {
    fn from(body: AttendanceBody) -> Self {
        Self {
            id: body.id,
            subject_id: SubjectId::from(body.employee_id),
            date: body.date,
            check_in: body.check_in_time,
            check_out: body.check_out_time,
        }
    }
}
