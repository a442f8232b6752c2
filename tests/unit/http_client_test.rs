//! Tests for the HTTP recognition service adapter
//!
//! Runs against an in-process canned-response backend; no real recognition
//! service is involved.

use std::time::Duration;

use facegate::adapters::http::HttpRecognitionService;
use facegate::core::models::{CaptureFrame, SubjectId};
use facegate::core::ports::{FaceDataAdmin, RecognitionService, ServiceError};

use crate::common::{CannedResponse, FakeBackend};

const TIMEOUT: Duration = Duration::from_secs(5);

fn frame() -> CaptureFrame {
    CaptureFrame::new(vec![0xff, 0xd8, 0xff, 0xe0], "image/jpeg")
}

#[test]
fn test_lookup_subject_builds_display_name() {
    let backend = FakeBackend::serve_once(CannedResponse::json(
        200,
        r#"{"employee_id": "E123", "first_name": "Alice", "last_name": "Nguyen"}"#,
    ));

    let service = HttpRecognitionService::new(&backend.base_url, TIMEOUT, None).unwrap();
    let subject = service.lookup_subject(&SubjectId::from("E123")).unwrap();

    assert_eq!(subject.id, SubjectId::from("E123"));
    assert_eq!(subject.display_name, "Alice Nguyen");

    let request = backend.requests.recv().unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "/employees/E123/");
}

#[test]
fn test_check_in_out_sends_subject_with_frame() {
    let backend = FakeBackend::serve_once(CannedResponse::json(
        200,
        r#"{"message": "Checked in", "record_id": 77, "check_in_time": "09:00:00", "employee_id": "E123"}"#,
    ));

    let service =
        HttpRecognitionService::new(&backend.base_url, TIMEOUT, Some("secret".to_string()))
            .unwrap();
    let reply = service.check_in_out(&SubjectId::from("E123"), frame()).unwrap();

    assert_eq!(reply.snapshot.record_id, Some(77));
    assert_eq!(reply.snapshot.message.as_deref(), Some("Checked in"));
    assert_eq!(reply.snapshot.check_in_time.as_deref(), Some("09:00:00"));
    assert_eq!(reply.recognized_subject_id, Some(SubjectId::from("E123")));

    let request = backend.requests.recv().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "/attendance/check_in_out/");
    assert_eq!(request.authorization.as_deref(), Some("Token secret"));
    // The multipart body carries the image part and the subject id.
    assert!(request.body.contains("name=\"image\""));
    assert!(request.body.contains("name=\"employee_id\""));
    assert!(request.body.contains("E123"));
}

#[test]
fn test_error_body_surfaces_as_rejected() {
    let backend =
        FakeBackend::serve_once(CannedResponse::json(400, r#"{"error": "face not detected"}"#));

    let service = HttpRecognitionService::new(&backend.base_url, TIMEOUT, None).unwrap();
    let err = service.check_in_out(&SubjectId::from("E123"), frame()).unwrap_err();

    match err {
        ServiceError::Rejected(message) => assert_eq!(message, "face not detected"),
        other => panic!("expected Rejected, got {other:?}"),
    }
    let _ = backend.requests.recv();
}

#[test]
fn test_unparseable_error_body_is_transport() {
    let backend = FakeBackend::serve_once(CannedResponse::json(500, "upstream exploded"));

    let service = HttpRecognitionService::new(&backend.base_url, TIMEOUT, None).unwrap();
    let err = service.check_in_out(&SubjectId::from("E123"), frame()).unwrap_err();

    match err {
        ServiceError::Transport(message) => {
            assert!(message.contains("500"), "message: {message}");
        },
        other => panic!("expected Transport, got {other:?}"),
    }
    let _ = backend.requests.recv();
}

#[test]
fn test_unreachable_backend_is_transport() {
    // Nothing listens on this port.
    let service =
        HttpRecognitionService::new("http://127.0.0.1:1/api", TIMEOUT, None).unwrap();
    let err = service.check_in_out(&SubjectId::from("E123"), frame()).unwrap_err();
    assert!(matches!(err, ServiceError::Transport(_)));
}

#[test]
fn test_face_data_round_trip() {
    let backend = FakeBackend::serve(vec![
        CannedResponse::json(
            201,
            r#"{"id": 5, "employee": "E123", "created_at": "2025-06-02T08:00:00Z"}"#,
        ),
        CannedResponse::json(
            200,
            r#"[{"id": 5, "employee": "E123", "created_at": "2025-06-02T08:00:00Z"}]"#,
        ),
        CannedResponse::json(204, ""),
    ]);

    let service = HttpRecognitionService::new(&backend.base_url, TIMEOUT, None).unwrap();
    let subject = SubjectId::from("E123");

    let sample = service.register_face(&subject, frame()).unwrap();
    assert_eq!(sample.id, 5);
    assert_eq!(sample.subject_id, subject);

    let samples = service.list_faces(&subject).unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].created_at, "2025-06-02T08:00:00Z");

    service.delete_face(5).unwrap();

    let register = backend.requests.recv().unwrap();
    assert_eq!(register.url, "/employees/E123/register_face/");
    let list = backend.requests.recv().unwrap();
    assert_eq!(list.url, "/employees/E123/face_data/");
    let delete = backend.requests.recv().unwrap();
    assert_eq!(delete.method, "DELETE");
    assert_eq!(delete.url, "/face_data/5/");
}

#[test]
fn test_today_maps_records() {
    let backend = FakeBackend::serve_once(CannedResponse::json(
        200,
        r#"[{"id": 9, "employee_id": "E123", "date": "2025-06-02",
             "check_in_time": "09:00:00", "check_out_time": null}]"#,
    ));

    let service = HttpRecognitionService::new(&backend.base_url, TIMEOUT, None).unwrap();
    let records = service.today().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 9);
    assert_eq!(records[0].subject_id, SubjectId::from("E123"));
    assert!(records[0].is_open());

    let request = backend.requests.recv().unwrap();
    assert_eq!(request.url, "/attendance/today/");
}
