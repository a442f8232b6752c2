//! Session management commands

use serde_json::json;

use facegate::adapters::session::FileSession;
use facegate::core::models::SubjectId;
use facegate::output::{OperationResult, OutputMode};

use crate::cli::SessionAction;

/// Manage the stored session (subject id and API token)
pub fn session(action: SessionAction, mode: OutputMode) -> anyhow::Result<()> {
    let store = FileSession::open();

    match action {
        SessionAction::Set { subject_id, token } => {
            let id = SubjectId::from(subject_id);
            store.set(&id, token.as_deref())?;
            OperationResult::ok(format!("Session stored for subject {id}")).render(mode);
        },
        SessionAction::Show => {
            let state = store.load()?;
            match mode {
                OutputMode::Json => {
                    // The token itself stays out of the output.
                    println!(
                        "{}",
                        json!({
                            "subject_id": state.subject_id,
                            "has_token": state.token.is_some(),
                            "created_at": state.created_at,
                        })
                    );
                },
                OutputMode::Human => match state.subject_id {
                    Some(id) => {
                        println!("subject: {id}");
                        println!("token:   {}", if state.token.is_some() { "stored" } else { "none" });
                        if let Some(created) = state.created_at {
                            println!("since:   {created}");
                        }
                    },
                    None => println!("No active session. Run 'facegate session set <subject-id>'."),
                },
            }
        },
        SessionAction::Clear => {
            store.clear()?;
            OperationResult::ok("Session cleared").render(mode);
        },
    }

    Ok(())
}
