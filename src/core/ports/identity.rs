//! Identity provider port
//!
//! Defines the interface for resolving the logged-in subject. The capture
//! client treats an unresolved identity as a hard block: capture is disabled
//! entirely (fail closed), never allowed on a guess.

use crate::core::models::SubjectId;

/// Session identity abstraction
///
/// Implementations look up the currently authenticated subject, typically
/// from a stored session. The core never reads ambient global state; identity
/// always flows through this port.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    /// Get the current subject id, or `None` when no session is active
    fn current_subject_id(&self) -> anyhow::Result<Option<SubjectId>>;
}
