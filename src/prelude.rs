//!
//! Convenience re-export of common members.
//!

pub use crate::Logger;
pub use crate::LoggerBuilder;

pub use crate::Caller;
pub use crate::Level;

pub use crate::Capture;
pub use crate::ConfigError;
pub use crate::JsonConfig;
pub use crate::Settings;
pub use crate::SettingsSource;

pub use crate::{fatal, Fatal};

pub use crate::{debug, error, info, log, warn};
