//! Face-data administration port
//!
//! Register/list/delete face samples for a subject. Used only by the admin
//! shell; the capture protocol itself does not depend on these operations
//! beyond sharing the same subject identifier space.

use crate::core::models::{CaptureFrame, FaceSample, SubjectId};

use super::recognition::ServiceError;

/// Face sample management abstraction
#[cfg_attr(test, mockall::automock)]
pub trait FaceDataAdmin: Send + Sync {
    /// Register a new face sample for a subject
    fn register_face(
        &self,
        subject_id: &SubjectId,
        frame: CaptureFrame,
    ) -> Result<FaceSample, ServiceError>;

    /// List the face samples registered for a subject
    fn list_faces(&self, subject_id: &SubjectId) -> Result<Vec<FaceSample>, ServiceError>;

    /// Delete a face sample by its id
    fn delete_face(&self, face_id: i64) -> Result<(), ServiceError>;
}
