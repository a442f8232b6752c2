//! Capture source adapters

mod file;

pub use file::FileCaptureSource;
