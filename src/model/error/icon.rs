use macros::traceable;
use std::path::PathBuf;

traceable! {
    IconError {
        #[error("Icon not found: {path}: {err}")]
        IconNotFound { path: PathBuf } => tracing::Level::ERROR,

        #[error("Failed to decode icon: {path}: {err}")]
        IconDecodeError { path: PathBuf } => tracing::Level::ERROR,
    }
}
