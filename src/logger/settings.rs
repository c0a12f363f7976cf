use serde::Deserialize;
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

use super::Level;

/// The name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// The per-level enable-flags of a logger.
///
/// Deserialized from a JSON object with the optional boolean fields
/// `enable_log`, `enable_info`, `enable_debug`, `enable_warn` and
/// `enable_error`. Omitted or `null` fields stay enabled, unknown
/// fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "SettingsPatch")]
pub struct Settings {
    pub enable_log: bool,
    pub enable_info: bool,
    pub enable_debug: bool,
    pub enable_error: bool,
    pub enable_warn: bool,
}

impl Settings {
    /// Settings with every level set to `enabled`.
    #[must_use]
    pub const fn all(enabled: bool) -> Self {
        Self {
            enable_log: enabled,
            enable_info: enabled,
            enable_debug: enabled,
            enable_error: enabled,
            enable_warn: enabled,
        }
    }

    /// Returns these settings with the flag of `level` replaced.
    #[must_use]
    pub fn with(mut self, level: Level, enabled: bool) -> Self {
        *self.flag_mut(level) = enabled;
        self
    }

    /// Whether output at `level` is enabled.
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        match level {
            Level::Log => self.enable_log,
            Level::Info => self.enable_info,
            Level::Debug => self.enable_debug,
            Level::Warn => self.enable_warn,
            Level::Error => self.enable_error,
        }
    }

    fn flag_mut(&mut self, level: Level) -> &mut bool {
        match level {
            Level::Log => &mut self.enable_log,
            Level::Info => &mut self.enable_info,
            Level::Debug => &mut self.enable_debug,
            Level::Warn => &mut self.enable_warn,
            Level::Error => &mut self.enable_error,
        }
    }

    /// Decodes the first JSON value of `reader`.
    ///
    /// Anything after that value is not read.
    ///
    /// # Errors
    ///
    /// Fails if the input is empty, malformed or not an object
    /// of booleans. The decode is all-or-nothing. A document that is
    /// just `null` overrides nothing.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        match serde_json::Deserializer::from_reader(reader)
            .into_iter::<Option<SettingsPatch>>()
            .next()
        {
            Some(patch) => Ok(patch?.map_or_else(Settings::default, Settings::from)),
            None => Err(ConfigError::Empty),
        }
    }
}

/// The fields present in a config document. `None` keeps the default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsPatch {
    enable_log: Option<bool>,
    enable_info: Option<bool>,
    enable_debug: Option<bool>,
    enable_error: Option<bool>,
    enable_warn: Option<bool>,
}

impl From<SettingsPatch> for Settings {
    fn from(patch: SettingsPatch) -> Self {
        let base = Settings::default();
        Settings {
            enable_log: patch.enable_log.unwrap_or(base.enable_log),
            enable_info: patch.enable_info.unwrap_or(base.enable_info),
            enable_debug: patch.enable_debug.unwrap_or(base.enable_debug),
            enable_error: patch.enable_error.unwrap_or(base.enable_error),
            enable_warn: patch.enable_warn.unwrap_or(base.enable_warn),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::all(true)
    }
}

impl FromStr for Settings {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

/// A failure to load [`Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config could not be opened. Usually it does not exist.
    #[error("failed to open config file: {0}")]
    Open(#[source] io::Error),
    /// The config was opened, but is not a valid settings document.
    #[error("failed to decode config file: {0}")]
    Decode(#[from] serde_json::Error),
    /// The config was opened, but contains no JSON value.
    #[error("failed to decode config file: no JSON value")]
    Empty,
}

impl ConfigError {
    /// Whether this error means "nothing configured" rather than a
    /// broken config. Such errors are not reported.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, ConfigError::Open(_))
    }
}

/// An object that provides the settings of a logger.
///
/// A logger asks its source exactly once, right before the first
/// level check.
pub trait SettingsSource: Send + Sync {
    /// Loads the settings.
    ///
    /// # Errors
    ///
    /// Returns the reason no settings could be loaded. The logger
    /// falls back to [`Settings::default`] either way.
    fn load(&self) -> Result<Settings, ConfigError>;
}

impl SettingsSource for Settings {
    fn load(&self) -> Result<Settings, ConfigError> {
        Ok(*self)
    }
}

impl<F> SettingsSource for F
where
    F: Fn() -> Result<Settings, ConfigError> + Send + Sync,
{
    fn load(&self) -> Result<Settings, ConfigError> {
        self()
    }
}

/// Settings read from a JSON file.
///
/// The default source is [`CONFIG_FILE`] relative to the working
/// directory at the time of the load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonConfig {
    path: PathBuf,
}

impl JsonConfig {
    /// A source reading the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self::new(CONFIG_FILE)
    }
}

impl SettingsSource for JsonConfig {
    fn load(&self) -> Result<Settings, ConfigError> {
        let file = File::open(&self.path).map_err(ConfigError::Open)?;
        Settings::from_reader(BufReader::new(file))
    }
}
