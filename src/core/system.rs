use crate::core::bootstrap::Bootstrap;
use crate::core::embedder_host::EmbedderHost;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use crate::platform::main_thread::MainThread;
use crate::utils::executable::executable_dir;
use crate::utils::logging::Logging;
use macros::log;
use std::env::consts::OS;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;

pub struct System {
    executable_dir: Result<PathBuf, Error>,
    _log_guard: Option<WorkerGuard>,
}

impl System {
    pub async fn initialize() -> Self {
        let executable_dir = executable_dir().map_err(Error::from);
        let log_guard = Logging::initialize(executable_dir.as_deref().ok());
        log!(SystemLog::Initializing);
        Self {
            executable_dir,
            _log_guard: log_guard,
        }
    }

    pub async fn run(&self) -> Result<(), Error> {
        let executable_dir = self.executable_dir.as_deref().map_err(Clone::clone)?;
        let main_thread = MainThread::pin()?;
        log!(SystemLog::MainThreadPinned);
        log!(SystemLog::InitializeComplete);
        Bootstrap::launch(executable_dir, OS, &main_thread, &EmbedderHost).await
    }

    /// Reports the outcome and converts it into the process exit status.
    pub async fn terminate(self, result: Result<(), Error>) -> u8 {
        log!(SystemLog::Terminating);
        let code = match result {
            Ok(()) => 0,
            Err(error) => {
                error.log();
                error.exit_code()
            }
        };
        log!(SystemLog::TerminateComplete);
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::error::config::ConfigError;

    fn system() -> System {
        System {
            executable_dir: Ok(PathBuf::from("/opt/app")),
            _log_guard: None,
        }
    }

    #[tokio::test]
    async fn successful_run_exits_zero() {
        assert_eq!(system().terminate(Ok(())).await, 0);
    }

    #[tokio::test]
    async fn failed_run_exits_non_zero() {
        let error = ConfigError::ConfigNotFound("/opt/app/config.json", "No such file or directory");

        let code = system().terminate(Err(error.into())).await;

        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn unknown_executable_dir_fails_before_pinning() {
        let system = System {
            executable_dir: Err(ConfigError::ExecutablePathUnavailable("gone").into()),
            _log_guard: None,
        };

        let result = system.run().await;

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ExecutablePathUnavailable { .. }))
        ));
        assert_eq!(system.terminate(result).await, 1);
    }
}
