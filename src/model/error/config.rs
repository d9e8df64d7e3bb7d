use macros::traceable;
use std::path::PathBuf;

traceable! {
    ConfigError {
        #[error("Unable to determine the executable location: {err}")]
        ExecutablePathUnavailable => tracing::Level::ERROR,

        #[error("Configuration not found: {path}: {err}")]
        ConfigNotFound { path: PathBuf } => tracing::Level::ERROR,

        #[error("Malformed configuration: {path}: {err}")]
        ConfigMalformed { path: PathBuf } => tracing::Level::ERROR,
    }
}
