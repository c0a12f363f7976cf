//! A leveled console logger.

use log::{Log, Metadata, Record};
use spin::{Mutex, Once};
use std::{
    fmt::{self, Debug},
    io::{stdout, Write},
    mem,
};
use termcolor::Ansi;

mod caller;
mod level;
mod output;
mod record;
mod settings;

pub use caller::Caller;
pub use level::Level;
pub use output::{Capture, LogOutput};
pub use record::LogRecord;
pub use settings::{ConfigError, JsonConfig, Settings, SettingsSource, CONFIG_FILE};

/// A logger writing colored lines to a single output.
///
/// The settings are loaded from the logger's [`SettingsSource`]
/// exactly once, the first time any level is checked. Until then
/// nothing is read. Later changes to the source have no effect.
///
/// Lines are written under a lock, so concurrent callers never
/// interleave partial lines.
pub struct Logger {
    source: Box<dyn SettingsSource>,
    settings: Once<Settings>,
    output: Mutex<LogOutput>,
}

impl Logger {
    /// Creates a logger reading `config.json` from the working
    /// directory and writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new logger builder.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The effective settings, loading them on first use.
    ///
    /// A source that cannot be opened leaves the defaults in place
    /// silently. Any other failure is reported on stderr and also
    /// falls back to the defaults.
    pub fn settings(&self) -> &Settings {
        self.settings.call_once(|| match self.source.load() {
            Ok(settings) => settings,
            Err(e) if e.is_silent() => Settings::default(),
            Err(e) => {
                eprintln!("{e}");
                Settings::default()
            }
        })
    }

    /// Whether the settings have been loaded yet.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.settings.is_completed()
    }

    /// Whether lines at `level` are written.
    pub fn enabled(&self, level: Level) -> bool {
        self.settings().is_enabled(level)
    }

    /// Replaces the output, returning the previous one.
    ///
    /// Lines currently being written finish on the old output.
    pub fn set_output(&self, output: impl Write + Send + 'static) -> LogOutput {
        mem::replace(&mut *self.output.lock(), Box::new(output))
    }

    /// Writes one line, without checking whether `level` is enabled.
    ///
    /// Write failures are reported on stderr and abort the rest of
    /// the line. They are never returned.
    pub fn emit(&self, level: Level, caller: Caller, args: fmt::Arguments<'_>) {
        let record = LogRecord::now(level, caller, args);
        let mut output = self.output.lock();
        if let Err(e) = record.write_to(&mut Ansi::new(&mut *output)) {
            eprintln!("{e}");
        }
    }

    /// Writes a line at `level` if enabled, attributed to the
    /// caller of this function.
    ///
    /// See [`Caller`] on how the caller is resolved.
    #[track_caller]
    pub fn write(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.emit(level, Caller::here(), args);
        }
    }

    /// Writes a green line if [`Level::Log`] is enabled.
    #[track_caller]
    pub fn log(&self, args: fmt::Arguments<'_>) {
        self.write(Level::Log, args);
    }

    /// Writes a blue line if [`Level::Info`] is enabled.
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.write(Level::Info, args);
    }

    /// Writes a white line if [`Level::Debug`] is enabled.
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.write(Level::Debug, args);
    }

    /// Writes a yellow line if [`Level::Warn`] is enabled.
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.write(Level::Warn, args);
    }

    /// Writes a red line if [`Level::Error`] is enabled.
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.write(Level::Error, args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &self.settings.get())
            .finish_non_exhaustive()
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &Record) {
        let level = Level::from(record.level());
        if !Logger::enabled(self, level) {
            return;
        }

        // Borrowed file names cannot outlive the record.
        let caller = match (record.file_static(), record.line()) {
            (Some(file), Some(line)) => Caller::new(file, line),
            _ => Caller::unknown(),
        };
        self.emit(level, caller, *record.args());
    }

    fn flush(&self) {
        if let Err(e) = self.output.lock().flush() {
            eprintln!("failed to flush log output: {e}");
        }
    }
}

/// A builder for a [`Logger`].
pub struct LoggerBuilder {
    source: Box<dyn SettingsSource>,
    output: LogOutput,
}

impl LoggerBuilder {
    fn new() -> Self {
        Self {
            source: Box::new(JsonConfig::default()),
            output: Box::new(stdout()),
        }
    }

    /// Sets where the settings are loaded from.
    #[must_use]
    pub fn source(mut self, source: impl SettingsSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Sets the output lines are written to.
    #[must_use]
    pub fn output(mut self, output: impl Write + Send + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    /// Builds the logger. No settings are loaded yet.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            source: self.source,
            settings: Once::new(),
            output: Mutex::new(self.output),
        }
    }
}

impl Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder").finish_non_exhaustive()
    }
}
