use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RASA_LOG";

/// Routes `tracing` output to `<dir>/rasa.log`; the terminal belongs to the UI.
/// Keep the guard alive until exit or buffered lines are lost.
pub fn init(dir: &Path) -> anyhow::Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(dir, "rasa.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;

    Ok(guard)
}
