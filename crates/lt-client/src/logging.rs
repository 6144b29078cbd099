//! Process-wide request log.
//!
//! Logging is silent unless `LT_API_LOG=true`. When enabled, the first client
//! constructed in the process installs a JSON file sink (appending to its
//! configured log file, or `lambda_api.log` in the working directory). Later
//! clients reuse it, whatever log file they name.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable that opts in to request logging.
pub const LOG_ENV_VAR: &str = "LT_API_LOG";

/// Log file used when the credentials name none.
pub const DEFAULT_LOG_FILE: &str = "lambda_api.log";

/// Outcome of the one-time sink initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Logging is silenced.
    Disabled,
    /// Events are appended to this file.
    File(PathBuf),
    /// Another global subscriber was already installed; events go there.
    External,
}

struct SinkState {
    sink: LogSink,
    // Held for the life of the process so buffered lines get flushed.
    _guard: Option<WorkerGuard>,
}

static SINK: OnceLock<SinkState> = OnceLock::new();

/// Returns true if `LT_API_LOG` opts in to logging.
pub fn logging_requested() -> bool {
    std::env::var(LOG_ENV_VAR).is_ok_and(|v| v == "true")
}

/// Install the log sink once per process. Later calls return the first result.
pub fn init(log_file: Option<&Path>) -> &'static LogSink {
    &SINK
        .get_or_init(|| {
            if logging_requested() {
                install_file_sink(log_file.unwrap_or_else(|| Path::new(DEFAULT_LOG_FILE)))
            } else {
                SinkState {
                    sink: LogSink::Disabled,
                    _guard: None,
                }
            }
        })
        .sink
}

/// The installed sink, if [`init`] has run.
pub fn current() -> Option<&'static LogSink> {
    SINK.get().map(|state| &state.sink)
}

fn install_file_sink(path: &Path) -> SinkState {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE));

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();

    match installed {
        Ok(()) => SinkState {
            sink: LogSink::File(dir.join(file_name)),
            _guard: Some(guard),
        },
        Err(_) => SinkState {
            sink: LogSink::External,
            _guard: None,
        },
    }
}
