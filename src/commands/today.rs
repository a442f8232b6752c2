//! Today's attendance listing command

use anyhow::Context;

use facegate::adapters::http::HttpRecognitionService;
use facegate::adapters::session::FileSession;
use facegate::config::GlobalConfig;
use facegate::core::ports::RecognitionService;
use facegate::output::{OutputMode, TodayResult};

/// Show today's attendance records
pub fn today(mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let session = FileSession::open();
    let token = session.token().context("could not read stored session")?;

    let service = HttpRecognitionService::new(&config.server.url, config.timeout(), token)?;
    let records = service.today()?;

    TodayResult { records }.render(mode);
    Ok(())
}
