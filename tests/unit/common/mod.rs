//! Shared test fixtures and helpers
//!
//! Hand-written port fakes for protocol tests and a canned-response HTTP
//! backend (tiny_http) for adapter tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use facegate::core::models::{
    AttendanceRecord, CaptureFrame, RecognitionReply, Subject, SubjectId,
};
use facegate::core::ports::{IdentityProvider, RecognitionService, ServiceError};

/// A small encoded frame for submission tests
pub fn frame() -> CaptureFrame {
    CaptureFrame::new(vec![0xff, 0xd8, 0xff, 0xe0], "image/jpeg")
}

/// Identity provider returning a fixed subject id
pub struct FakeIdentity {
    id: Option<String>,
}

impl FakeIdentity {
    pub fn logged_in(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
        }
    }

    pub fn logged_out() -> Self {
        Self { id: None }
    }
}

impl IdentityProvider for FakeIdentity {
    fn current_subject_id(&self) -> anyhow::Result<Option<SubjectId>> {
        Ok(self.id.clone().map(SubjectId::from))
    }
}

/// Recognition service that plays back scripted check-in replies
///
/// `lookup_subject` always succeeds with a fixed display name; each
/// `check_in_out` call consumes the next scripted reply and counts the call.
pub struct ScriptedService {
    replies: Mutex<VecDeque<Result<RecognitionReply, ServiceError>>>,
    calls: Mutex<usize>,
}

impl ScriptedService {
    pub fn with_replies(
        replies: impl IntoIterator<Item = Result<RecognitionReply, ServiceError>>,
    ) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(0),
        }
    }

    /// Number of check-in requests that reached the service
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl RecognitionService for ScriptedService {
    fn lookup_subject(&self, id: &SubjectId) -> Result<Subject, ServiceError> {
        Ok(Subject::new(id.clone(), "Alice Nguyen"))
    }

    fn check_in_out(
        &self,
        _subject_id: &SubjectId,
        _frame: CaptureFrame,
    ) -> Result<RecognitionReply, ServiceError> {
        *self.calls.lock().unwrap() += 1;
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Transport("script exhausted".to_string())))
    }

    fn today(&self) -> Result<Vec<AttendanceRecord>, ServiceError> {
        Ok(Vec::new())
    }
}

/// One canned HTTP response for the fake backend
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// What the fake backend observed about one request
pub struct ReceivedRequest {
    pub method: String,
    pub url: String,
    pub body: String,
    pub authorization: Option<String>,
}

/// A running fake backend serving a fixed response sequence
pub struct FakeBackend {
    pub base_url: String,
    pub requests: Receiver<ReceivedRequest>,
    handle: Option<JoinHandle<()>>,
}

impl FakeBackend {
    /// Start a backend that answers the given responses in order, then stops
    pub fn serve(responses: Vec<CannedResponse>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("failed to bind fake backend");
        let base_url = format!("http://{}", server.server_addr());
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            for canned in responses {
                let Ok(mut request) = server.recv() else {
                    return;
                };

                let mut body = String::new();
                // Multipart bodies are binary; a lossy read is enough for
                // asserting on the text parts.
                let mut raw = Vec::new();
                let _ = std::io::Read::read_to_end(request.as_reader(), &mut raw);
                body.push_str(&String::from_utf8_lossy(&raw));

                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());

                let _ = tx.send(ReceivedRequest {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    body,
                    authorization,
                });

                let response = tiny_http::Response::from_string(canned.body)
                    .with_status_code(canned.status)
                    .with_header(
                        tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .expect("static header"),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            requests: rx,
            handle: Some(handle),
        }
    }

    /// Start a backend that answers a single response
    pub fn serve_once(response: CannedResponse) -> Self {
        Self::serve(vec![response])
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
