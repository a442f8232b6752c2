//! HTTP recognition service adapter
//!
//! Implements the recognition and face-data ports against the attendance
//! REST backend with a blocking `reqwest` client. Every request carries a
//! bounded timeout; expiry surfaces as a transport failure, which the capture
//! client reports as a transient outcome.

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use crate::core::models::{
    AttendanceRecord, CaptureFrame, FaceSample, RecognitionReply, Subject, SubjectId,
};
use crate::core::ports::{FaceDataAdmin, RecognitionService, ServiceError};

use super::types::{AttendanceBody, CheckInOutBody, EmployeeBody, ErrorBody, FaceDataBody};

/// Default request timeout when the config does not override it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP client for the attendance backend
#[derive(Debug)]
pub struct HttpRecognitionService {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpRecognitionService {
    /// Create a client for the given backend base URL
    ///
    /// The timeout bounds every request; a request without one would violate
    /// the fail-fast contract of immediate capture feedback.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        token: Option<String>,
    ) -> Result<Self, ServiceError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Token {token}")),
            None => request,
        }
    }

    fn image_form(frame: CaptureFrame, extra: Option<(&str, String)>) -> Result<Form, ServiceError> {
        let (bytes, mime) = frame.into_parts();
        let part = Part::bytes(bytes)
            .file_name("capture.jpg")
            .mime_str(&mime)
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let mut form = Form::new().part("image", part);
        if let Some((name, value)) = extra {
            form = form.text(name.to_string(), value);
        }
        Ok(form)
    }

    /// Decode a response, mapping error statuses onto `ServiceError`
    ///
    /// An `{ "error": ... }` body becomes `Rejected` with the backend's text
    /// preserved verbatim. A body that cannot be read or parsed is treated
    /// the same as no response at all: `Transport`.
    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
        let status = response.status();

        if status.is_success() {
            return response.json::<T>().map_err(|e| ServiceError::Transport(e.to_string()));
        }

        let text = response
            .text()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => Err(ServiceError::Rejected(body.error)),
            Err(_) => Err(ServiceError::Transport(unclassified(status, &text))),
        }
    }

    fn empty_ok(response: Response) -> Result<(), ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response
            .text()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => Err(ServiceError::Rejected(body.error)),
            Err(_) => Err(ServiceError::Transport(unclassified(status, &text))),
        }
    }
}

fn unclassified(status: StatusCode, text: &str) -> String {
    if text.trim().is_empty() {
        format!("http {status}")
    } else {
        format!("http {status}: {text}")
    }
}

fn transport(e: &reqwest::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

impl RecognitionService for HttpRecognitionService {
    fn lookup_subject(&self, id: &SubjectId) -> Result<Subject, ServiceError> {
        let url = self.url(&format!("employees/{id}/"));
        debug!("GET {url}");

        let response = self.authorize(self.http.get(&url)).send().map_err(|e| transport(&e))?;
        let body: EmployeeBody = Self::decode(response)?;
        Ok(body.into())
    }

    fn check_in_out(
        &self,
        subject_id: &SubjectId,
        frame: CaptureFrame,
    ) -> Result<RecognitionReply, ServiceError> {
        let url = self.url("attendance/check_in_out/");
        debug!("POST {url} ({} byte frame for {subject_id})", frame.len());

        let form = Self::image_form(frame, Some(("employee_id", subject_id.to_string())))?;
        let response = self
            .authorize(self.http.post(&url))
            .multipart(form)
            .send()
            .map_err(|e| transport(&e))?;

        let body: CheckInOutBody = Self::decode(response)?;
        Ok(body.into())
    }

    fn today(&self) -> Result<Vec<AttendanceRecord>, ServiceError> {
        let url = self.url("attendance/today/");
        debug!("GET {url}");

        let response = self.authorize(self.http.get(&url)).send().map_err(|e| transport(&e))?;
        let bodies: Vec<AttendanceBody> = Self::decode(response)?;
        Ok(bodies.into_iter().map(Into::into).collect())
    }
}

impl FaceDataAdmin for HttpRecognitionService {
    fn register_face(
        &self,
        subject_id: &SubjectId,
        frame: CaptureFrame,
    ) -> Result<FaceSample, ServiceError> {
        let url = self.url(&format!("employees/{subject_id}/register_face/"));
        debug!("POST {url} ({} byte frame)", frame.len());

        let form = Self::image_form(frame, None)?;
        let response = self
            .authorize(self.http.post(&url))
            .multipart(form)
            .send()
            .map_err(|e| transport(&e))?;

        let body: FaceDataBody = Self::decode(response)?;
        Ok(body.into())
    }

    fn list_faces(&self, subject_id: &SubjectId) -> Result<Vec<FaceSample>, ServiceError> {
        let url = self.url(&format!("employees/{subject_id}/face_data/"));
        debug!("GET {url}");

        let response = self.authorize(self.http.get(&url)).send().map_err(|e| transport(&e))?;
        let bodies: Vec<FaceDataBody> = Self::decode(response)?;
        Ok(bodies.into_iter().map(Into::into).collect())
    }

    fn delete_face(&self, face_id: i64) -> Result<(), ServiceError> {
        let url = self.url(&format!("face_data/{face_id}/"));
        debug!("DELETE {url}");

        let response = self.authorize(self.http.delete(&url)).send().map_err(|e| transport(&e))?;
        Self::empty_ok(response)
    }
}
