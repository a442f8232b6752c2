//! Attendance capture client
//!
//! Owns the full attempt lifecycle: resolve the session subject, acquire a
//! frame, submit it with the subject's identifier, and surface exactly one
//! [`VerificationResult`] per attempt.
//!
//! ## State machine
//!
//! ```text
//! Blocked -> Idle -> Capturing -> Idle -> Submitting -> outcome
//!                                                        |-> Idle
//!                                                        '-> Blocked (mismatch/unauthorized)
//! ```
//!
//! The client starts `Blocked` and only a successful [`CaptureClient::resolve_subject`]
//! moves it to `Idle`. At most one submission is in flight per subject; a
//! second call is rejected locally without touching the network. Identity
//! mismatch and authorization failures invalidate the resolved subject, so a
//! fresh resolution is required before the next attempt.

use log::{debug, warn};
use thiserror::Error;

use crate::core::models::{CaptureFrame, Subject, SubjectId, VerificationResult};
use crate::core::ports::{
    CaptureError, CaptureSource, IdentityProvider, RecognitionService, ServiceError,
};
use crate::core::services::classifier::{self, ErrorClass};

/// Local precondition failures, raised before any network request
#[derive(Debug, Error)]
pub enum AttemptError {
    /// No resolved session subject, or the passed subject is not the resolved
    /// one. Capture stays disabled until identity is resolved (fail closed).
    #[error("identity could not be resolved: {0}")]
    IdentityUnresolved(String),

    /// A prior submission is still pending; the call was rejected locally
    #[error("a submission is already in flight for subject {0}")]
    SubmissionInFlight(SubjectId),

    /// Frame acquisition failed
    #[error("frame acquisition failed: {0}")]
    Capture(#[from] CaptureError),
}

/// State of the current capture attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttemptState {
    /// No resolved subject; all capture is disabled
    #[default]
    Blocked,

    /// Ready for a capture
    Idle,

    /// A frame acquisition is outstanding
    Capturing,

    /// A submission is in flight
    Submitting,
}

/// The attendance capture client
///
/// Generic over its collaborator ports so tests can substitute mocks and the
/// shell can wire in the HTTP/session adapters.
#[derive(Debug)]
pub struct CaptureClient<I, R> {
    identity: I,
    recognition: R,
    subject: Option<Subject>,
    state: AttemptState,
}

impl<I, R> CaptureClient<I, R>
where
    I: IdentityProvider,
    R: RecognitionService,
{
    /// Create a client in the `Blocked` state
    #[must_use]
    pub const fn new(identity: I, recognition: R) -> Self {
        Self {
            identity,
            recognition,
            subject: None,
            state: AttemptState::Blocked,
        }
    }

    /// Current attempt state
    #[must_use]
    pub const fn state(&self) -> AttemptState {
        self.state
    }

    /// The resolved session subject, if any
    #[must_use]
    pub const fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    /// Resolve the session subject and unblock capture
    ///
    /// Asks the identity provider for the current subject id, then fetches
    /// the display profile from the service. Any failure leaves the client
    /// `Blocked`.
    pub fn resolve_subject(&mut self) -> Result<Subject, AttemptError> {
        let id = self
            .identity
            .current_subject_id()
            .map_err(|e| AttemptError::IdentityUnresolved(e.to_string()))?
            .ok_or_else(|| AttemptError::IdentityUnresolved("no active session".to_string()))?;

        let subject = self.recognition.lookup_subject(&id).map_err(|e| {
            AttemptError::IdentityUnresolved(format!("profile lookup for {id} failed: {e}"))
        })?;

        debug!("resolved session subject {} ({})", subject.id, subject.display_name);
        self.subject = Some(subject.clone());
        self.state = AttemptState::Idle;
        Ok(subject)
    }

    /// Acquire one frame from the capture source
    ///
    /// The client must be `Idle`; the state is `Capturing` for the duration
    /// of the acquisition so only one acquisition can be outstanding.
    pub fn capture(
        &mut self,
        source: &mut dyn CaptureSource,
    ) -> Result<CaptureFrame, AttemptError> {
        match self.state {
            AttemptState::Blocked => {
                return Err(AttemptError::IdentityUnresolved(
                    "capture attempted before subject resolution".to_string(),
                ));
            },
            AttemptState::Submitting => {
                let id = self
                    .subject
                    .as_ref()
                    .map_or_else(|| SubjectId::from("unknown"), |s| s.id.clone());
                return Err(AttemptError::SubmissionInFlight(id));
            },
            AttemptState::Capturing | AttemptState::Idle => {},
        }

        self.state = AttemptState::Capturing;
        let result = source.acquire();
        self.state = AttemptState::Idle;

        let frame = result?;
        debug!("captured {} byte {} frame", frame.len(), frame.mime());
        Ok(frame)
    }

    /// Submit a frame for verification
    ///
    /// Consumes the frame; a frame is never resubmitted. Produces exactly one
    /// [`VerificationResult`]. No record is considered written unless the
    /// result is `Verified`.
    pub fn submit_frame(
        &mut self,
        subject: &Subject,
        frame: CaptureFrame,
    ) -> Result<VerificationResult, AttemptError> {
        if self.state == AttemptState::Submitting {
            return Err(AttemptError::SubmissionInFlight(subject.id.clone()));
        }

        // The passed subject must be the one resolved for this session; a
        // stale or foreign subject is treated as unresolved identity.
        match &self.subject {
            Some(resolved) if resolved.id == subject.id => {},
            Some(resolved) => {
                return Err(AttemptError::IdentityUnresolved(format!(
                    "subject {} is not the resolved session subject {}",
                    subject.id, resolved.id
                )));
            },
            None => {
                return Err(AttemptError::IdentityUnresolved(
                    "submission attempted before subject resolution".to_string(),
                ));
            },
        }

        self.state = AttemptState::Submitting;
        let reply = self.recognition.check_in_out(&subject.id, frame);
        let result = self.interpret(subject, reply);

        self.state = if result.invalidates_session() {
            self.subject = None;
            AttemptState::Blocked
        } else {
            AttemptState::Idle
        };

        Ok(result)
    }

    /// Map a service reply onto the verification taxonomy
    fn interpret(
        &self,
        subject: &Subject,
        reply: Result<crate::core::models::RecognitionReply, ServiceError>,
    ) -> VerificationResult {
        match reply {
            Ok(reply) => {
                // Defense in depth: never trust a success reply for the wrong
                // identity, even if the server claims success.
                if let Some(recognized) = reply.recognized_subject_id {
                    if recognized != subject.id {
                        warn!(
                            "backend recognized {recognized} while session subject is {}",
                            subject.id
                        );
                        return VerificationResult::IdentityMismatch {
                            recognized_subject_id: recognized,
                        };
                    }
                }
                VerificationResult::Verified(reply.snapshot)
            },
            Err(ServiceError::Rejected(message)) => match classifier::classify(&message) {
                ErrorClass::NoFaceDetected => VerificationResult::NoFaceDetected,
                ErrorClass::Unauthorized => VerificationResult::Unauthorized,
                ErrorClass::Transient => VerificationResult::TransientFailure { message },
            },
            Err(ServiceError::Transport(message)) => {
                VerificationResult::TransientFailure { message }
            },
        }
    }
}
