//! # Logger
//!
//! Installs the process-wide `tracing` subscriber.
//!
//! * Console output is a compact, ANSI-colored layer (enabled by default).
//! * File output goes through a non-blocking rolling appender; the returned
//!   [`Logger`] owns the worker guard and must outlive the application.
//! * `RUST_LOG` always overrides the programmatic level/filter.
//!
//! ```rust
//! use foodloop_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("foodloop-server")
//!     .level(LevelFilter::DEBUG)
//!     .env_filter("foodloop=debug,tower_http=info")
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

#[derive(Debug)]
struct FileSettings {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

/// Builder for the global subscriber. Created by [`Logger::builder`].
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileSettings>,
}

impl LoggerBuilder {
    /// Minimum level emitted when neither `RUST_LOG` nor [`Self::env_filter`] is set.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter directives (e.g. `foodloop=debug,hyper=info`).
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes logs into `dir`, rotated daily, keeping the last 10 files.
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file = Some(FileSettings {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Changes the rotation of the file output. No effect without [`Self::path`].
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Number of rotated files to keep. No effect without [`Self::path`].
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// Emits JSON lines in the file output. No effect without [`Self::path`].
    pub fn json(mut self, enabled: bool) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.json = enabled;
        }
        self
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`,
    ///   an unparsable filter or when no output is enabled.
    /// * [`LoggerError::Appender`] / [`LoggerError::Internal`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.build_filter()?;

        let mut layers: Vec<BoxedLayer> = Vec::new();
        if self.console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match self.file {
            Some(file) => {
                let (layer, guard) = file_layer(&self.name, file)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled; enable the console or set a path".into(),
                context: None,
            });
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(filter)
            .try_init()
            .context("Installing global subscriber")?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if self.file.as_ref().is_some_and(|file| file.max_files == 0) {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }
        Ok(())
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());

        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            return Ok(builder.from_env_lossy());
        }

        match &self.env_filter {
            Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            }),
            None => Ok(builder.parse_lossy("")),
        }
    }
}

fn file_layer(name: &str, file: FileSettings) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(&file.dir).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create log directory {}", file.dir.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(&file.dir)
        .context(format!("Creating appender in {}", file.dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if file.json { layer.json().boxed() } else { layer.boxed() };

    Ok((layer, guard))
}

/// Handle to the installed subscriber.
///
/// Holds the file writer guard; dropping it flushes and stops the background writer.
#[must_use = "Dropping this handle stops background file logging"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring a subscriber. `name` prefixes rolling log files
    /// (`<name>.<date>.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            file: None,
        }
    }

    /// Returns `true` when file output is active.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("test-app");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.env_filter.is_none());
        assert!(builder.file.is_none());
    }

    #[test]
    fn file_options_require_path() {
        let builder = Logger::builder("test-app").max_files(3).json(true);
        assert!(builder.file.is_none());

        let builder = Logger::builder("test-app").path("logs").max_files(3).json(true);
        let file = builder.file.expect("file settings");
        assert_eq!(file.max_files, 3);
        assert!(file.json);
    }

    #[test]
    fn rejects_invalid_configuration() {
        let err = Logger::builder("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder("test-app").path("logs").max_files(0).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder("test-app").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
