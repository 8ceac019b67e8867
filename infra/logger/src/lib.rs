//! # Logger
//!
//! Installs the global `tracing` subscriber for the form applications.
//!
//! Console output is on by default; a log directory switches on a rolling,
//! non-blocking file writer (plain text or JSON). Filtering starts from the
//! configured level, then `RUST_LOG`, then an explicit directive string.
//!
//! ## Example
//!
//! ```rust
//! # use tubeform_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("tubeform")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone)]
struct FileOptions {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug, Clone)]
struct Options {
    console: bool,
    level: LevelFilter,
    directives: Option<String>,
    file: Option<FileOptions>,
}

impl Default for Options {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, directives: None, file: None }
    }
}

/// Builder state before a name has been given.
#[derive(Debug)]
pub struct Unnamed;
/// Builder state once a name has been given.
#[derive(Debug)]
pub struct Named(String);

mod sealed {
    pub trait NameState {}
    impl NameState for super::Unnamed {}
    impl NameState for super::Named {}
}

/// Configures the global subscriber. A name is required before [`LoggerBuilder::init`]
/// becomes available.
#[derive(Debug)]
pub struct LoggerBuilder<N: sealed::NameState = Unnamed> {
    options: Options,
    name: N,
}

impl LoggerBuilder<Unnamed> {
    /// Names the application; also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { options: self.options, name: Named(name.into()) }
    }
}

impl<N: sealed::NameState> LoggerBuilder<N> {
    #[must_use = "The builder does nothing until `init()` is called"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.options.console = enabled;
        self
    }

    #[must_use = "The builder does nothing until `init()` is called"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.options.level = level;
        self
    }

    /// Extra filter directives such as `tubeform_forms=trace,reqwest=warn`.
    #[must_use = "The builder does nothing until `init()` is called"]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.options.directives = Some(directives.into());
        self
    }

    /// Writes logs into `dir` in addition to the console.
    #[must_use = "The builder does nothing until `init()` is called"]
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.file = Some(FileOptions {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Rotation policy for file output. Ignored without [`LoggerBuilder::path`].
    #[must_use = "The builder does nothing until `init()` is called"]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.options.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Number of rotated files to keep. Ignored without [`LoggerBuilder::path`].
    #[must_use = "The builder does nothing until `init()` is called"]
    pub fn max_files(mut self, max_files: usize) -> Self {
        if let Some(file) = self.options.file.as_mut() {
            file.max_files = max_files;
        }
        self
    }

    /// JSON lines for file output. Ignored without [`LoggerBuilder::path`].
    #[must_use = "The builder does nothing until `init()` is called"]
    pub fn json(mut self) -> Self {
        if let Some(file) = self.options.file.as_mut() {
            file.json = true;
        }
        self
    }
}

impl LoggerBuilder<Named> {
    /// Installs the subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, a zero file limit,
    ///   bad filter directives or when every output is disabled.
    /// * [`LoggerError::Internal`] / [`LoggerError::Appender`] if the log directory cannot be prepared.
    /// * [`LoggerError::Subscriber`] if a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { options, name: Named(name) } = self;
        validate(&options, &name)?;

        let filter = env_filter(&options)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if options.console {
            layers.push(tracing_subscriber::fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match &options.file {
            Some(file) => {
                let (layer, guard) = file_layer(file, &name)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry()
            .with(layers)
            .with(filter)
            .try_init()
            .context("Installing global subscriber")?;

        tracing::debug!(name = %name, file = guard.is_some(), "Logger initialized");
        Ok(Logger { guard })
    }
}

/// Keeps the background file writer alive. Drop it last.
#[must_use = "Dropping this handle stops the background log writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    #[must_use = "The builder does nothing until `init()` is called"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { options: Options::default(), name: Unnamed }
    }

    /// `true` when log lines are also written to files.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Flushing log files");
        }
    }
}

fn validate(options: &Options, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if options.file.as_ref().is_some_and(|file| file.max_files == 0) {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    if !options.console && options.file.is_none() {
        return Err(LoggerError::InvalidConfiguration {
            message: "No output enabled. Enable the console or set a log path.".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(options: &Options) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(options.level.into());
    match &options.directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid filter '{directives}': {e}").into(),
            context: None,
        }),
    }
}

fn file_layer(file: &FileOptions, name: &str) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    std::fs::create_dir_all(&file.dir).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Creating log directory {}", file.dir.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(&file.dir)
        .context("Building rolling file appender")?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if file.json { layer.json().boxed() } else { layer.boxed() };

    Ok((layer, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn builder_defaults_to_console_at_info() {
        let builder = Logger::builder().name("tubeform-test");
        assert!(builder.options.console);
        assert_eq!(builder.options.level, LevelFilter::INFO);
        assert!(builder.options.file.is_none());
        assert!(builder.options.directives.is_none());
    }

    #[test]
    fn file_options_only_apply_after_path() {
        let builder = Logger::builder().name("tubeform-test").max_files(3).json();
        assert!(builder.options.file.is_none());

        let builder = Logger::builder().name("tubeform-test").path("logs").max_files(3).json();
        let file = builder.options.file.expect("file options should be set");
        assert_eq!(file.max_files, 3);
        assert!(file.json);
        assert_eq!(file.dir, PathBuf::from("logs"));
    }

    #[test]
    #[serial]
    fn empty_name_is_rejected_before_install() {
        let err = Logger::builder().name("  ").init().expect_err("empty name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn disabled_outputs_are_rejected() {
        let err = Logger::builder().name("quiet").console(false).init().expect_err("no outputs");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn zero_max_files_is_rejected() {
        let err = Logger::builder()
            .name("rotating")
            .path(std::env::temp_dir())
            .max_files(0)
            .init()
            .expect_err("max_files = 0 must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn bad_directives_are_rejected() {
        let err = Logger::builder()
            .name("filtered")
            .env_filter("tubeform=verbose")
            .init()
            .expect_err("invalid directive must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
