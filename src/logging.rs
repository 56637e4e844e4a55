use std::path::{Path, PathBuf};

use tracing::{Dispatch, Level};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive that overrides `-v`.
pub const LOG_ENV: &str = "STMT_LOG";

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Number of `-v` flags: 0 = warn, 1 = info, 2 = debug, 3+ = trace
    pub verbosity: u8,
    /// Also write JSON lines to this file
    pub log_file: Option<PathBuf>,
}

impl LogOptions {
    pub fn level(&self) -> Level {
        match self.verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Logging for a single invocation. Nothing is installed globally: callers run
/// their work inside [`LogHandle::in_scope`], and dropping the handle flushes
/// the file writer.
pub struct LogHandle {
    dispatch: Dispatch,
    _guard: Option<WorkerGuard>,
}

fn file_writer(path: &Path) -> std::io::Result<(NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "log file has no file name")
    })?;
    let appender = tracing_appender::rolling::never(dir, name);
    Ok(tracing_appender::non_blocking(appender))
}

impl LogHandle {
    pub fn new(options: &LogOptions) -> anyhow::Result<Self> {
        let filter = match std::env::var(LOG_ENV) {
            Ok(directive) => EnvFilter::try_new(directive)?,
            Err(_) => EnvFilter::new(options.level().as_str().to_ascii_lowercase()),
        };

        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        let (file_layer, guard) = match &options.log_file {
            Some(path) => {
                let (writer, guard) = file_writer(path)?;
                (Some(fmt::layer().json().with_writer(writer)), Some(guard))
            }
            None => (None, None),
        };

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            _guard: guard,
        })
    }

    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}
