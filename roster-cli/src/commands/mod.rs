//! CLI command implementations

pub mod browse;
pub mod config;
pub mod demo;
pub mod list;
pub mod logs;
pub mod show;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use roster_core::{DirectorySession, LogEvent, LoggingService, RosterContext};

/// Environment variable pointing at the roster directory
pub const ROSTER_DIR_ENV: &str = "ROSTER_DIR";

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let roster_dir = get_roster_dir().ok()?;
    std::fs::create_dir_all(&roster_dir).ok()?;
    LoggingService::new(&roster_dir, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the roster directory from environment or default
pub fn get_roster_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(ROSTER_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".roster"))
        .context("Could not find home directory; set ROSTER_DIR")
}

/// Get or create roster context
pub fn get_context() -> Result<RosterContext> {
    let roster_dir = get_roster_dir()?;

    std::fs::create_dir_all(&roster_dir)
        .with_context(|| format!("Failed to create roster directory: {:?}", roster_dir))?;

    RosterContext::new(&roster_dir).context("Failed to initialize roster context")
}

/// Run the session's single fetch
///
/// The returned session is settled either way; callers inspect its
/// lifecycle. Errors are only returned when the fetch could not be started.
pub fn fetch_session(
    ctx: &RosterContext,
    logger: &Option<LoggingService>,
    command: &str,
    spinner: bool,
) -> Result<DirectorySession> {
    let source = ctx.user_source()?;
    let mut session = ctx.new_session();

    let progress = spinner.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Loading directory...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let outcome = runtime.block_on(session.load(source.as_ref(), &ctx.fetch_request()));

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    match outcome {
        Ok(()) => log_event(
            logger,
            LogEvent::new("directory_loaded")
                .with_source(source.name())
                .with_command(command),
        ),
        Err(e) => log_event(
            logger,
            LogEvent::new("fetch_failed")
                .with_source(source.name())
                .with_command(command)
                .with_error(e.to_string()),
        ),
    }

    Ok(session)
}
