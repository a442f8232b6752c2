//! Tests for core domain models

use facegate::core::models::{
    AttendanceRecord, AttendanceSnapshot, CaptureFrame, Subject, SubjectId, VerificationResult,
};

#[test]
fn test_subject_id_display_and_serde() {
    let id = SubjectId::from("E123");
    assert_eq!(id.to_string(), "E123");
    assert_eq!(id.as_str(), "E123");

    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"E123\"");

    let back: SubjectId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_subject_holds_id_and_name() {
    let subject = Subject::new("E123", "Alice Nguyen");
    assert_eq!(subject.id, SubjectId::from("E123"));
    assert_eq!(subject.display_name, "Alice Nguyen");
}

#[test]
fn test_frame_is_consumed_into_parts() {
    let frame = CaptureFrame::new(vec![1, 2, 3], "image/png");
    assert_eq!(frame.len(), 3);
    assert!(!frame.is_empty());
    assert_eq!(frame.mime(), "image/png");

    let (bytes, mime) = frame.into_parts();
    assert_eq!(bytes, vec![1, 2, 3]);
    assert_eq!(mime, "image/png");
}

#[test]
fn test_security_outcomes_invalidate_session() {
    let mismatch = VerificationResult::IdentityMismatch {
        recognized_subject_id: SubjectId::from("E999"),
    };
    assert!(mismatch.invalidates_session());
    assert!(VerificationResult::Unauthorized.invalidates_session());

    assert!(!VerificationResult::NoFaceDetected.invalidates_session());
    assert!(!VerificationResult::Verified(AttendanceSnapshot::default()).invalidates_session());
    assert!(
        !VerificationResult::TransientFailure {
            message: "timeout".to_string()
        }
        .invalidates_session()
    );
}

#[test]
fn test_attendance_record_open_state() {
    let mut record = AttendanceRecord {
        id: 1,
        subject_id: SubjectId::from("E123"),
        date: chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        check_in: chrono::NaiveTime::from_hms_opt(9, 0, 0),
        check_out: None,
    };
    assert!(record.is_open());

    record.check_out = chrono::NaiveTime::from_hms_opt(17, 30, 0);
    assert!(!record.is_open());
}
