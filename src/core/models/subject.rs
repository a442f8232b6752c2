//! Subject model
//!
//! The subject is the authenticated individual attempting attendance capture.
//! Its identifier is resolved once per session and never silently changes
//! mid-capture.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a subject (the backend's employee id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    /// Create a subject id from a raw identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SubjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An authenticated subject with a resolved display profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Stable identifier, fixed for the session
    pub id: SubjectId,

    /// Display name shown while capturing
    pub display_name: String,
}

impl Subject {
    /// Create a subject from an id and display name
    #[must_use]
    pub fn new(id: impl Into<SubjectId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}
