//! Level macros.
//!
//! Each macro checks its level before the arguments are evaluated,
//! so a disabled level costs one flag lookup. The location of the
//! macro invocation is recorded with `file!()` and `line!()`.
//!
//! Without a target the process-wide [`logger()`](crate::logger()) is
//! used. A specific logger is passed as `logger: &my_logger,`
//! before the format string.

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        let level: $crate::Level = $level;
        if logger.enabled(level) {
            logger.emit(
                level,
                $crate::Caller::new(::std::file!(), ::std::line!()),
                ::std::format_args!($($arg)+),
            );
        }
    }};
}

/// Writes a green line at [`Level::Log`](crate::Level::Log).
///
/// ```
/// # use console_logger::{log, Capture, Logger, Settings};
/// let logger = Logger::builder().source(Settings::default()).output(Capture::new()).build();
/// log!(logger: &logger, "{} modules loaded", 4);
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, $crate::Level::Log, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit!($crate::logger(), $crate::Level::Log, $($arg)+)
    };
}

/// Writes a blue line at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit!($crate::logger(), $crate::Level::Info, $($arg)+)
    };
}

/// Writes a white line at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit!($crate::logger(), $crate::Level::Debug, $($arg)+)
    };
}

/// Writes a yellow line at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, $crate::Level::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit!($crate::logger(), $crate::Level::Warn, $($arg)+)
    };
}

/// Writes a red line at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit!($crate::logger(), $crate::Level::Error, $($arg)+)
    };
}
