//! Core capture protocol for facegate
//!
//! This module contains the attendance capture client and its pure domain
//! types. All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Subject, CaptureFrame, VerificationResult)
//! - `services/` - The capture state machine and error classifier
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
