use macros::loggable;
use std::path::PathBuf;

loggable! {
    BootstrapLog {
        #[error("Configuration loaded: {path}")]
        ConfigLoaded { path: PathBuf } => tracing::Level::INFO,

        #[error("Platform resolved: {os}")]
        PlatformResolved { os: String } => tracing::Level::DEBUG,

        #[error("Asset bundle path: {path}")]
        AssetPathResolved { path: PathBuf } => tracing::Level::INFO,

        #[error("ICU data path: {path}")]
        IcuDataPathResolved { path: PathBuf } => tracing::Level::INFO,

        #[error("Window icon path: {path}")]
        IconPathResolved { path: PathBuf } => tracing::Level::INFO,

        #[error("Window icon applied")]
        IconApplied => tracing::Level::DEBUG,

        #[error("Handing over to the embedding runtime")]
        RuntimeStarting => tracing::Level::INFO,

        #[error("Embedding runtime exited")]
        RuntimeExited => tracing::Level::INFO,
    }
}
