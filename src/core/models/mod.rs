//! Core domain models
//!
//! Pure data types with no I/O: subjects, capture frames, verification
//! outcomes and server record snapshots.

mod attendance;
mod frame;
mod subject;
mod verification;

pub use attendance::{AttendanceRecord, FaceSample};
pub use frame::CaptureFrame;
pub use subject::{Subject, SubjectId};
pub use verification::{AttendanceSnapshot, RecognitionReply, VerificationResult};
