//! Face sample administration commands

use anyhow::Context;

use facegate::adapters::capture::FileCaptureSource;
use facegate::adapters::http::HttpRecognitionService;
use facegate::adapters::session::FileSession;
use facegate::config::GlobalConfig;
use facegate::core::models::SubjectId;
use facegate::core::ports::{CaptureSource, FaceDataAdmin, IdentityProvider};
use facegate::output::{FaceListResult, OperationResult, OutputMode};

use crate::cli::FacesAction;

/// Manage registered face samples
pub fn faces(action: FacesAction, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let session = FileSession::open();
    let token = session.token().context("could not read stored session")?;
    let service = HttpRecognitionService::new(&config.server.url, config.timeout(), token)?;

    match action {
        FacesAction::Add { image, subject } => {
            let subject_id = target_subject(&session, subject)?;
            let frame = FileCaptureSource::new(&image).acquire()?;
            let sample = service.register_face(&subject_id, frame)?;
            OperationResult::ok(format!(
                "Registered face sample {} for {subject_id}",
                sample.id
            ))
            .render(mode);
        },
        FacesAction::List { subject } => {
            let subject_id = target_subject(&session, subject)?;
            let samples = service.list_faces(&subject_id)?;
            FaceListResult {
                subject_id: subject_id.to_string(),
                samples,
            }
            .render(mode);
        },
        FacesAction::Remove { id } => {
            service.delete_face(id)?;
            OperationResult::ok(format!("Removed face sample {id}")).render(mode);
        },
    }

    Ok(())
}

/// Resolve the subject an admin action applies to
///
/// An explicit `--subject` wins; otherwise the session subject is used, and
/// without either the action is refused.
fn target_subject(session: &FileSession, explicit: Option<String>) -> anyhow::Result<SubjectId> {
    if let Some(id) = explicit {
        return Ok(SubjectId::from(id));
    }
    session
        .current_subject_id()?
        .context("no session subject; pass --subject or run 'facegate session set'")
}
