use macros::traceable;

traceable! {
    PlatformError {
        #[no_source]
        #[error("Unsupported platform: {os}")]
        UnsupportedPlatform { os: String } => tracing::Level::ERROR,

        #[no_source]
        #[error("The window runtime must be started from the main thread")]
        NotMainThread => tracing::Level::ERROR,

        #[no_source]
        #[error("The main thread has already been pinned")]
        MainThreadAlreadyPinned => tracing::Level::ERROR,
    }
}
