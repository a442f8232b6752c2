//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the capture protocol and
//! external systems (session store, recognition backend, camera).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The capture client depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap the HTTP backend or capture device without
//!   changing protocol logic
//! - **Fail-closed identity**: the session subject always flows in through
//!   the identity port, never from ambient state

mod capture;
mod faces;
mod identity;
mod recognition;

pub use capture::{CaptureError, CaptureSource};
pub use faces::FaceDataAdmin;
pub use identity::IdentityProvider;
pub use recognition::{RecognitionService, ServiceError};

#[cfg(test)]
pub use capture::MockCaptureSource;
#[cfg(test)]
pub use faces::MockFaceDataAdmin;
#[cfg(test)]
pub use identity::MockIdentityProvider;
#[cfg(test)]
pub use recognition::MockRecognitionService;
