use macros::loggable;

loggable! {
    SystemLog {
        #[error("Initializing")]
        Initializing => tracing::Level::INFO,

        #[error("Initialization completed")]
        InitializeComplete => tracing::Level::INFO,

        #[error("Main thread pinned")]
        MainThreadPinned => tracing::Level::DEBUG,

        #[error("Termination in process")]
        Terminating => tracing::Level::INFO,

        #[error("Termination completed")]
        TerminateComplete => tracing::Level::INFO,

        #[error("Log subscriber not installed: {reason}")]
        SubscriberInstallFailed { reason: String } => tracing::Level::WARN,

        #[error("File logging disabled: {reason}")]
        FileLoggingDisabled { reason: String } => tracing::Level::WARN,
    }
}
