pub mod config;
pub mod icon;
pub mod platform;
pub mod runtime;

use crate::model::error::config::ConfigError;
use crate::model::error::icon::IconError;
use crate::model::error::platform::PlatformError;
use crate::model::error::runtime::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(ConfigError),
    #[error(transparent)]
    Icon(IconError),
    #[error(transparent)]
    Platform(PlatformError),
    #[error(transparent)]
    Runtime(RuntimeError),
}

impl Error {
    pub fn log(&self) {
        match self {
            Self::Config(error) => error.log(),
            Self::Icon(error) => error.log(),
            Self::Platform(error) => error.log(),
            Self::Runtime(error) => error.log(),
        }
    }

    /// Every bootstrap failure is fatal; there is no partial-success status.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<IconError> for Error {
    fn from(error: IconError) -> Self {
        Self::Icon(error)
    }
}

impl From<PlatformError> for Error {
    fn from(error: PlatformError) -> Self {
        Self::Platform(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
