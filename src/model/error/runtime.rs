use macros::traceable;

traceable! {
    RuntimeError {
        #[error("Embedding runtime failed: {err}")]
        RuntimeLaunchFailure => tracing::Level::ERROR,
    }
}
