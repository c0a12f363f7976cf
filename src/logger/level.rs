use std::fmt;
use termcolor::{Color, ColorSpec};

/// A logging level, each with its own enable-flag and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// General purpose output, printed green.
    Log,
    /// Informational output, printed blue.
    Info,
    /// Debug output, printed white.
    Debug,
    /// Warnings, printed yellow.
    Warn,
    /// Errors, printed red.
    Error,
}

impl Level {
    /// All levels in declaration order.
    pub const ALL: [Level; 5] = [
        Level::Log,
        Level::Info,
        Level::Debug,
        Level::Warn,
        Level::Error,
    ];

    /// The fixed color of this level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Level::Log => Color::Green,
            Level::Info => Color::Blue,
            Level::Debug => Color::White,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
        }
    }

    /// A color spec that only emits the foreground escape,
    /// with no leading reset.
    pub(crate) fn color_spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(self.color())).set_reset(false);
        spec
    }

    /// The lowercase name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Log => "log",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// `log` has no generic level, so trace output lands on `Log`.
impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Log,
        }
    }
}
