//! Protocol logic for attendance capture
//!
//! - `classifier` - maps raw backend error text onto the verification taxonomy
//! - `capture_client` - the per-attempt state machine around the ports

pub mod capture_client;
pub mod classifier;

pub use capture_client::{AttemptError, AttemptState, CaptureClient};
pub use classifier::{ErrorClass, classify};
