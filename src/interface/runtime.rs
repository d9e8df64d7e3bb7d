use crate::model::error::Error;
use crate::model::startup_options::StartupOptions;
use crate::platform::main_thread::MainThread;

/// Entry point of the embedding runtime.
///
/// `run` consumes the options, creates the window, runs the window initializer once the
/// window exists, and only returns when the runtime shuts down or fails.
#[cfg_attr(test, mockall::automock)]
pub trait EmbedderRuntime {
    fn run(&self, main_thread: &MainThread, options: StartupOptions) -> Result<(), Error>;
}
