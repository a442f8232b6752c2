//! Error message classification
//!
//! Maps the backend's unstructured error text onto the verification taxonomy.
//! The backend does not return structured error codes, so classification is
//! best-effort substring matching over the raw message. This is fragile
//! against reworded or localized server messages, which is why it lives in
//! one place: the capture client classifies each message exactly once, and
//! callers never re-inspect the text for control flow.

/// Coarse class of a backend error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// No face was detected in the submitted frame
    NoFaceDetected,

    /// The caller is not permitted to record attendance for this subject
    Unauthorized,

    /// Anything else: network, server, or unclassifiable errors
    Transient,
}

/// Markers the backend uses for face-detection failures
const FACE_MARKERS: &[&str] = &["face"];

/// Markers the backend uses for permission failures
const PERMISSION_MARKERS: &[&str] = &["permission", "unauthorized"];

/// Classify a raw backend error message
///
/// Face markers win over permission markers, matching the backend's own
/// precedence. Unmatched messages default to [`ErrorClass::Transient`]; the
/// original message should be preserved verbatim for display.
#[must_use]
pub fn classify(message: &str) -> ErrorClass {
    let lowered = message.to_lowercase();

    if FACE_MARKERS.iter().any(|m| lowered.contains(m)) {
        return ErrorClass::NoFaceDetected;
    }

    if PERMISSION_MARKERS.iter().any(|m| lowered.contains(m)) {
        return ErrorClass::Unauthorized;
    }

    ErrorClass::Transient
}
