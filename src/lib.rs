//!
//! A leveled console logger.
//!
//! Every line is written as
//!
//! ```text
//! HH:MM:SS <file>:<line>: <color><message>
//! <reset>
//! ```
//!
//! with a fixed color per level: [`Log`](Level::Log) green,
//! [`Info`](Level::Info) blue, [`Debug`](Level::Debug) white,
//! [`Warn`](Level::Warn) yellow and [`Error`](Level::Error) red.
//! The escape sequences are emitted unconditionally, also when the
//! output is not a terminal.
//!
//! # Configuration
//!
//! Each level can be switched off through a `config.json` in the
//! working directory:
//!
//! ```json
//! { "enable_debug": false }
//! ```
//!
//! The file is read exactly once, the first time a level is
//! checked, even if many threads log concurrently. A missing file
//! enables all levels. A malformed file is reported on stderr and
//! also enables all levels.
//!
//! # Usage
//!
//! The macros write through a process-wide [`Logger`]:
//!
//! ```no_run
//! use console_logger::{info, warn};
//!
//! info!("listening on {}", "0.0.0.0:8080");
//! warn!("cache at {}%", 93);
//! ```
//!
//! Independent loggers with their own settings and output can be
//! created with [`Logger::builder`]. The process-wide logger can
//! also serve as the backend of the [`log`](https://docs.rs/log)
//! facade via [`init`].
//!
//! Write failures are reported on stderr and never surface to
//! the caller. The only way to stop the calling flow is [`fatal()`].

use lazy_static::lazy_static;
use std::{fmt, io::Write};

mod fatal;
mod logger;
mod macros;

pub mod prelude;

pub use fatal::{fatal, Fatal};
pub use logger::{
    Caller, Capture, ConfigError, JsonConfig, Level, LogOutput, LogRecord, Logger, LoggerBuilder,
    Settings, SettingsSource, CONFIG_FILE,
};

lazy_static! {
    static ref LOGGER: Logger = Logger::new();
}

/// The process-wide logger.
///
/// It reads `config.json` from the working directory and writes
/// to stdout until [`set_output`] is called.
#[must_use]
pub fn logger() -> &'static Logger {
    &LOGGER
}

/// Registers the process-wide logger as the backend of the
/// `log` facade.
///
/// `trace` records are written at [`Level::Log`]. The location is
/// taken from the record's `'static` file name and line, as set by
/// the `log` macros. Records without them, including records built
/// with a borrowed file name, are attributed to `unknown:0`.
///
/// # Errors
///
/// Fails if another `log` backend was already set.
pub fn init() -> Result<(), ::log::SetLoggerError> {
    ::log::set_logger(logger()).map(|()| ::log::set_max_level(::log::LevelFilter::Trace))
}

/// Replaces the output of the process-wide logger.
pub fn set_output(output: impl Write + Send + 'static) {
    drop(logger().set_output(output));
}

/// Writes a green line through the process-wide logger.
#[track_caller]
pub fn log(args: fmt::Arguments<'_>) {
    logger().log(args);
}

/// Writes a blue line through the process-wide logger.
#[track_caller]
pub fn info(args: fmt::Arguments<'_>) {
    logger().info(args);
}

/// Writes a white line through the process-wide logger.
#[track_caller]
pub fn debug(args: fmt::Arguments<'_>) {
    logger().debug(args);
}

/// Writes a yellow line through the process-wide logger.
#[track_caller]
pub fn warn(args: fmt::Arguments<'_>) {
    logger().warn(args);
}

/// Writes a red line through the process-wide logger.
#[track_caller]
pub fn error(args: fmt::Arguments<'_>) {
    logger().error(args);
}
