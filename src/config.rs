use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::AppError;

/// Terminal to-do list: add prioritised tasks, remove them, mark them completed.
#[derive(Debug, Parser)]
#[command(name = "todo-tui", version, about)]
pub struct Cli {
    /// Append logs to this file. Nothing is logged without it, since the
    /// terminal is taken over by the UI.
    #[arg(long, env = "TODO_TUI_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directives, e.g. `debug` or `todo_tui=trace`
    #[arg(long, env = "TODO_TUI_LOG", default_value = "info", value_name = "FILTER")]
    pub log_level: String,

    /// Event poll interval in milliseconds
    #[arg(long, default_value_t = 100, value_name = "MS")]
    pub tick_ms: u64,
}

impl Cli {
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Install the global subscriber when a log file is configured.
/// Returns whether logging is active.
pub fn init_logging(cli: &Cli) -> Result<bool, AppError> {
    let Some(path) = cli.log_file.as_deref() else {
        return Ok(false);
    };

    let filter = parse_filter(&cli.log_level)?;
    let file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;

    Ok(true)
}

fn parse_filter(directives: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(directives).map_err(|source| AppError::LogFilter {
        filter: directives.to_string(),
        source,
    })
}

fn open_log_file(path: &Path) -> Result<File, AppError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
