//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{AttendanceRecord, FaceSample, VerificationResult};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a check-in/check-out attempt
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    /// Outcome tag: verified, identity_mismatch, no_face, unauthorized, transient_failure
    pub status: String,
    /// Server confirmation or advisory failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Attendance record id, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    /// Check-in time, when this attempt opened the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<String>,
    /// Check-out time, when this attempt closed the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<String>,
    /// Worked duration, reported on check-out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worked_duration: Option<String>,
    /// Subject the backend recognized, on identity mismatch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognized_subject_id: Option<String>,
}

impl CheckOutcome {
    /// Build the printable outcome from a verification result
    #[must_use]
    pub fn from_result(result: &VerificationResult) -> Self {
        match result {
            VerificationResult::Verified(snapshot) => Self {
                status: "verified".to_string(),
                message: snapshot.message.clone(),
                record_id: snapshot.record_id,
                check_in_time: snapshot.check_in_time.clone(),
                check_out_time: snapshot.check_out_time.clone(),
                worked_duration: snapshot.worked_duration.clone(),
                recognized_subject_id: None,
            },
            VerificationResult::IdentityMismatch { recognized_subject_id } => Self {
                status: "identity_mismatch".to_string(),
                message: Some(
                    "The recognized face does not match the logged-in account.".to_string(),
                ),
                record_id: None,
                check_in_time: None,
                check_out_time: None,
                worked_duration: None,
                recognized_subject_id: Some(recognized_subject_id.to_string()),
            },
            VerificationResult::NoFaceDetected => Self::plain(
                "no_face",
                "No face detected in the frame. Try again with a new capture.",
            ),
            VerificationResult::Unauthorized => Self::plain(
                "unauthorized",
                "You are not allowed to record attendance for another subject.",
            ),
            VerificationResult::TransientFailure { message } => {
                Self::plain("transient_failure", message)
            },
        }
    }

    fn plain(status: &str, message: &str) -> Self {
        Self {
            status: status.to_string(),
            message: Some(message.to_string()),
            record_id: None,
            check_in_time: None,
            check_out_time: None,
            worked_duration: None,
            recognized_subject_id: None,
        }
    }

    /// Whether the attempt produced a verified record
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.status == "verified"
    }

    /// Render the outcome based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.is_verified() {
            let message = self.message.as_deref().unwrap_or("Attendance recorded.");
            println!("{} {message}", "✓".green().bold());
            if let Some(id) = self.record_id {
                println!("  record:     {id}");
            }
            if let Some(time) = &self.check_in_time {
                println!("  checked in: {time}");
            }
            if let Some(time) = &self.check_out_time {
                println!("  checked out: {time}");
            }
            if let Some(worked) = &self.worked_duration {
                println!("  worked:     {worked}");
            }
            return;
        }

        let message = self.message.as_deref().unwrap_or("Verification failed.");
        match self.status.as_str() {
            "identity_mismatch" => {
                println!("{} {message}", "✗".red().bold());
                if let Some(recognized) = &self.recognized_subject_id {
                    println!("  recognized subject: {recognized}");
                }
                println!("  Sign in again before retrying.");
            },
            "unauthorized" => {
                println!("{} {message}", "✗".red().bold());
                println!("  Sign in again before retrying.");
            },
            "no_face" => println!("{} {message}", "!".yellow().bold()),
            _ => println!("{} {message}", "!".yellow().bold()),
        }
    }
}

/// Today's attendance listing
#[derive(Debug, Serialize)]
pub struct TodayResult {
    /// Records for today
    pub records: Vec<AttendanceRecord>,
}

impl TodayResult {
    /// Render the listing based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.records.is_empty() {
            println!("No attendance records for today.");
            return;
        }

        println!("Today's attendance ({} record(s)):\n", self.records.len());
        for record in &self.records {
            let check_in =
                record.check_in.map_or_else(|| "-".to_string(), |t| t.format("%H:%M:%S").to_string());
            let check_out =
                record.check_out.map_or_else(|| "-".to_string(), |t| t.format("%H:%M:%S").to_string());
            let state = if record.is_open() { "open".green() } else { "closed".normal() };
            println!(
                "  [{}] {}  in: {check_in}  out: {check_out}  ({state})",
                record.id, record.subject_id
            );
        }
    }
}

/// Face sample listing for one subject
#[derive(Debug, Serialize)]
pub struct FaceListResult {
    /// Subject the samples belong to
    pub subject_id: String,
    /// Registered samples
    pub samples: Vec<FaceSample>,
}

impl FaceListResult {
    /// Render the listing based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.samples.is_empty() {
            println!("No face samples registered for {}.", self.subject_id);
            return;
        }

        println!("Face samples for {} ({}):\n", self.subject_id, self.samples.len());
        for sample in &self.samples {
            println!("  [{}] registered {}", sample.id, sample.created_at);
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Create a successful result
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.success {
                    println!("{} {}", "✓".green().bold(), self.message);
                } else {
                    println!("{} {}", "✗".red().bold(), self.message);
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{{\"error\": \"serialization failed: {e}\"}}"),
    }
}
