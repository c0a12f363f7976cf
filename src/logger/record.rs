use chrono::{DateTime, Local};
use std::{fmt, io};
use termcolor::WriteColor;
use thiserror::Error;

use super::{Caller, Level};

/// A logging record.
///
/// Only exists while its line is written.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    /// The wall-clock time of the call.
    pub time: DateTime<Local>,
    /// The location the line is attributed to.
    pub caller: Caller,
    /// The level, which implies the color.
    pub level: Level,
    /// The unformatted message.
    pub args: fmt::Arguments<'a>,
}

impl<'a> LogRecord<'a> {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn now(level: Level, caller: Caller, args: fmt::Arguments<'a>) -> Self {
        Self {
            time: Local::now(),
            caller,
            level,
            args,
        }
    }

    /// Writes the record as
    /// `HH:MM:SS <caller>: <color><message>\n<reset>`.
    ///
    /// Each of the four parts is written separately. The first
    /// failing part aborts the line, so a partial line may be left
    /// without its reset.
    pub(crate) fn write_to<W: WriteColor>(&self, out: &mut W) -> Result<(), WriteError> {
        write!(out, "{} {}: ", self.time.format("%H:%M:%S"), self.caller)
            .map_err(WriteError::at(Step::Time))?;
        out.set_color(&self.level.color_spec())
            .map_err(WriteError::at(Step::Color))?;
        writeln!(out, "{}", self.args).map_err(WriteError::at(Step::Message))?;
        out.reset().map_err(WriteError::at(Step::Reset))
    }
}

/// The part of a line that failed to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Time,
    Color,
    Message,
    Reset,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Time => "write log time",
            Step::Color => "write log color",
            Step::Message => "write log message",
            Step::Reset => "reset log color",
        })
    }
}

#[derive(Debug, Error)]
#[error("failed to {step}: {source}")]
pub(crate) struct WriteError {
    pub(crate) step: Step,
    source: io::Error,
}

impl WriteError {
    fn at(step: Step) -> impl FnOnce(io::Error) -> Self {
        move |source| Self { step, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;
    use termcolor::Ansi;

    /// Accepts writes until one contains `needle`.
    struct FailOn {
        needle: &'static [u8],
        buf: Vec<u8>,
    }

    impl Write for FailOn {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.windows(self.needle.len()).any(|w| w == self.needle) {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.buf.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn record<'a>(args: fmt::Arguments<'a>) -> LogRecord<'a> {
        LogRecord {
            time: Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap(),
            caller: Caller::new("src/bin/server.rs", 42),
            level: Level::Warn,
            args,
        }
    }

    #[test]
    fn writes_full_line() {
        let mut out = Ansi::new(Vec::new());
        record(format_args!("disk at {}%", 93))
            .write_to(&mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            "09:05:07 server.rs:42: \x1b[33mdisk at 93%\n\x1b[0m"
        );
    }

    #[test]
    fn failed_color_aborts_line() {
        let mut out = Ansi::new(FailOn {
            needle: b"\x1b[33m",
            buf: Vec::new(),
        });
        let err = record(format_args!("lost")).write_to(&mut out).unwrap_err();
        assert_eq!(err.step, Step::Color);
        assert!(err.to_string().starts_with("failed to write log color: "));
        assert_eq!(out.into_inner().buf, b"09:05:07 server.rs:42: ");
    }

    #[test]
    fn failed_reset_leaves_colored_line() {
        let mut out = Ansi::new(FailOn {
            needle: b"\x1b[0m",
            buf: Vec::new(),
        });
        let err = record(format_args!("kept")).write_to(&mut out).unwrap_err();
        assert_eq!(err.step, Step::Reset);
        assert_eq!(
            out.into_inner().buf,
            b"09:05:07 server.rs:42: \x1b[33mkept\n"
        );
    }
}
