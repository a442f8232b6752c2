//! Check-in/check-out capture command

use std::path::Path;

use anyhow::Context;

use facegate::adapters::capture::FileCaptureSource;
use facegate::adapters::http::HttpRecognitionService;
use facegate::adapters::session::FileSession;
use facegate::config::GlobalConfig;
use facegate::core::services::CaptureClient;
use facegate::output::{CheckOutcome, OutputMode};
use facegate::transition::DelayedTransition;

/// Capture a frame and submit it for check-in/check-out
///
/// Fails closed: without a resolved session subject no capture is attempted.
/// After a verified submission the command holds for the configured delay
/// (the UI's "returning to reports" window); `--no-wait` cancels the timer.
pub fn check(image: &Path, no_wait: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let session = FileSession::open();
    let token = session.token().context("could not read stored session")?;

    let service = HttpRecognitionService::new(&config.server.url, config.timeout(), token)?;
    let mut client = CaptureClient::new(session, service);

    let subject = client
        .resolve_subject()
        .context("capture is disabled until the session subject is resolved")?;

    if mode == OutputMode::Human {
        println!("Verifying subject: {} ({})\n", subject.display_name, subject.id);
    }

    let mut source = FileCaptureSource::new(image);
    let frame = client.capture(&mut source)?;
    let result = client.submit_frame(&subject, frame)?;

    let outcome = CheckOutcome::from_result(&result);
    outcome.render(mode);

    if outcome.is_verified() {
        if mode == OutputMode::Human {
            let transition = DelayedTransition::schedule(config.redirect_delay(), || {
                println!("\nReturning to reports...");
            });
            if no_wait {
                transition.cancel();
            } else {
                transition.wait();
            }
        }
        return Ok(());
    }

    std::process::exit(1);
}
