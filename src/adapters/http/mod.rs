//! HTTP adapter for the attendance REST backend

mod client;
mod types;

pub use client::{DEFAULT_TIMEOUT, HttpRecognitionService};
pub use types::{AttendanceBody, CheckInOutBody, EmployeeBody, ErrorBody, FaceDataBody};
