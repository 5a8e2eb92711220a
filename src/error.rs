use std::io;

use thiserror::Error;

/// User-facing rejections raised by the task list.
///
/// Both are recovered at the controller boundary by showing the message in a
/// blocking notification; neither leaves any state change behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Task cannot be empty.")]
    EmptyTask,

    #[error("No task selected.")]
    NoSelection,
}

/// Failures at the process boundary (terminal setup, log file).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid log filter {filter:?}: {source}")]
    LogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install logger: {0}")]
    Logger(#[from] tracing_subscriber::util::TryInitError),
}
