//! File-backed session store
//!
//! Persists the logged-in subject id and API token at
//! `~/.facegate/session.toml` and implements the identity port on top of it.
//! The capture client never reads this file directly; identity always flows
//! through the [`IdentityProvider`] trait.

use std::fs;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::SubjectId;
use crate::core::ports::IdentityProvider;
use crate::paths;

/// Failures while reading or writing the session file
#[derive(Debug, Error)]
pub enum SessionError {
    /// IO error touching the session file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The session file is not valid TOML
    #[error("malformed session file: {0}")]
    Malformed(#[from] toml::de::Error),

    /// The session state could not be serialized
    #[error("could not serialize session: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Persisted session state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Subject id of the logged-in user
    pub subject_id: Option<String>,

    /// Backend API token
    pub token: Option<String>,

    /// When the session was stored (RFC3339)
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Session store backed by a TOML file
#[derive(Debug, Clone)]
pub struct FileSession {
    path: std::path::PathBuf,
}

impl FileSession {
    /// Open the session store at the default path
    #[must_use]
    pub fn open() -> Self {
        Self {
            path: paths::session_file(),
        }
    }

    /// Open a session store at an explicit path
    #[must_use]
    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the stored session, defaulting to an empty one when absent
    pub fn load(&self) -> Result<SessionState, SessionError> {
        if !self.path.exists() {
            return Ok(SessionState::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Store a new session for a subject
    pub fn set(&self, subject_id: &SubjectId, token: Option<&str>) -> Result<(), SessionError> {
        let state = SessionState {
            subject_id: Some(subject_id.to_string()),
            token: token.map(String::from),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        };
        self.save(&state)
    }

    /// Persist the given session state
    pub fn save(&self, state: &SessionState) -> Result<(), SessionError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(state)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Remove the stored session, if any
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// The stored API token, if any
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.token)
    }
}

impl IdentityProvider for FileSession {
    fn current_subject_id(&self) -> anyhow::Result<Option<SubjectId>> {
        let state = self.load()?;
        Ok(state.subject_id.filter(|id| !id.is_empty()).map(SubjectId::from))
    }
}
