//! Logging bootstrap for the file manager.
//!
//! Installs a `tracing` subscriber with two sinks: a non-blocking rolling file
//! in the application data directory and a quieter stderr stream. `log`-crate
//! records from dependencies are captured into the same pipeline. The shell
//! calls [`init`] once at startup; later calls hand back the handle installed
//! by the first.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Re-export of the level filter type so callers need not import
/// `tracing-subscriber` themselves.
pub use tracing_subscriber::filter::LevelFilter as LogLevel;

/// Env vars consulted, in order, for a filter directive.
const ENV_FILTER_VARS: [&str; 2] = ["FILEMANAGER_LOG", "RUST_LOG"];

static INSTALLED: OnceLock<LogHandle> = OnceLock::new();

/// Rolling cadence for the file sink.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LogRolling {
    /// One file per calendar day.
    Daily,
    /// A single append-only file.
    Never,
}

impl LogRolling {
    fn rotation(self) -> tracing_appender::rolling::Rotation {
        match self {
            LogRolling::Daily => tracing_appender::rolling::Rotation::DAILY,
            LogRolling::Never => tracing_appender::rolling::Rotation::NEVER,
        }
    }
}

/// Configuration for the logging bootstrap.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the rolled log files.
    pub directory: PathBuf,
    /// File name prefix for generated files (suffix is `.log`).
    pub file_prefix: String,
    /// Number of rolled files to keep; `None` disables pruning.
    pub keep_files: Option<usize>,
    /// Minimum level written to the file sink.
    pub file_level: LevelFilter,
    /// Minimum level written to stderr.
    pub console_level: LevelFilter,
    /// Optional filter directive (e.g. `filemanager_core=debug`); when unset
    /// the `FILEMANAGER_LOG`/`RUST_LOG` env vars are consulted.
    pub env_filter: Option<String>,
    /// Rolling cadence for the file sink.
    pub rolling: LogRolling,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file_prefix: "filemanager".to_string(),
            keep_files: Some(10),
            file_level: LevelFilter::DEBUG,
            console_level: if cfg!(debug_assertions) {
                LevelFilter::INFO
            } else {
                LevelFilter::WARN
            },
            env_filter: None,
            rolling: LogRolling::Daily,
        }
    }
}

impl LogConfig {
    /// Override the log directory, keeping the remaining defaults.
    pub fn with_directory<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.directory = path.into();
        self
    }

    /// Override the file prefix, keeping the remaining defaults.
    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.file_prefix = prefix.into();
        self
    }
}

/// Handle owning the background writer for the file sink.
#[derive(Debug)]
pub struct LogHandle {
    _guard: tracing_appender::non_blocking::WorkerGuard,
    directory: PathBuf,
}

impl LogHandle {
    /// Directory backing the rolling file sink.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// Install the global subscriber. The first call wins; subsequent calls
/// ignore their configuration and return the already-installed handle.
pub fn init(config: LogConfig) -> Result<&'static LogHandle> {
    if let Some(handle) = INSTALLED.get() {
        return Ok(handle);
    }

    let handle = install(config)?;
    let _ = INSTALLED.set(handle);
    Ok(INSTALLED.get().expect("log handle installed"))
}

fn install(config: LogConfig) -> Result<LogHandle> {
    capture_log_records(config.file_level.max(config.console_level));

    fs::create_dir_all(&config.directory)
        .with_context(|| format!("creating log directory at {}", config.directory.display()))?;

    if let Some(keep) = config.keep_files.filter(|keep| *keep > 0) {
        prune_rolled_files(&config.directory, &config.file_prefix, keep)
            .context("pruning rolled log files")?;
    }

    let appender = tracing_appender::rolling::Builder::new()
        .rotation(config.rolling.rotation())
        .filename_prefix(&config.file_prefix)
        .filename_suffix("log")
        .build(&config.directory)
        .context("creating rolling log appender")?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_new(resolve_directive(config.env_filter)).context("parsing env filter")?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer)
                .with_file(true)
                .with_line_number(true)
                .with_filter(config.file_level),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(config.console_level),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    Ok(LogHandle { _guard: guard, directory: config.directory })
}

fn resolve_directive(configured: Option<String>) -> String {
    configured
        .or_else(|| ENV_FILTER_VARS.iter().find_map(|var| std::env::var(var).ok()))
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| if cfg!(debug_assertions) { "debug" } else { "info" }.to_string())
}

fn capture_log_records(max_level: LevelFilter) {
    let level = match max_level {
        LevelFilter::OFF => log::LevelFilter::Off,
        LevelFilter::ERROR => log::LevelFilter::Error,
        LevelFilter::WARN => log::LevelFilter::Warn,
        LevelFilter::INFO => log::LevelFilter::Info,
        LevelFilter::DEBUG => log::LevelFilter::Debug,
        LevelFilter::TRACE => log::LevelFilter::Trace,
    };
    let _ = tracing_log::LogTracer::builder().with_max_level(level).init();
}

/// Rolled file names embed the roll date, so lexical order is chronological;
/// keep the newest `keep` files and remove the rest.
fn prune_rolled_files(dir: &Path, prefix: &str, keep: usize) -> Result<()> {
    let mut names: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading log directory at {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(prefix))
        })
        .collect();

    if names.len() <= keep {
        return Ok(());
    }

    names.sort();
    let excess = names.len() - keep;
    for path in names.into_iter().take(excess) {
        let _ = fs::remove_file(&path);
    }

    Ok(())
}

fn default_log_directory() -> PathBuf {
    match directories::ProjectDirs::from("com", "FileManager", "filemanager") {
        Some(dirs) => dirs.data_dir().join("logs"),
        None => std::env::temp_dir().join("filemanager-logs"),
    }
}
