use crate::model::log::system::SystemLog;
use macros::log;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer};

const LOG_DIRECTORY: &str = "logs";
const LOG_FILE_PREFIX: &str = "flutter-bootstrap.log";

pub struct Logging;

impl Logging {
    /// Installs the console and rolling-file subscribers.
    ///
    /// The returned guard flushes the file writer on drop and must outlive every log call.
    pub fn initialize(base_dir: Option<&Path>) -> Option<WorkerGuard> {
        let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let mut failure = None;
        let (file_layer, guard) = match base_dir.map(Self::ensure_log_dir) {
            Some(Ok(log_dir)) => {
                let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_filter(filter());
                (Some(layer), Some(guard))
            }
            Some(Err(err)) => {
                failure = Some(err.to_string());
                (None, None)
            }
            None => {
                failure = Some("executable directory unknown".to_string());
                (None, None)
            }
        };

        let console_layer = tracing_subscriber::fmt::layer().with_filter(filter());

        let installed = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer)
            .try_init();

        log_panics::init();

        if let Some(entry) = Self::install_failure(installed) {
            log!(entry);
        }
        if let Some(reason) = failure {
            log!(SystemLog::FileLoggingDisabled { reason });
        }

        guard
    }

    fn install_failure(installed: Result<(), TryInitError>) -> Option<SystemLog> {
        installed
            .err()
            .map(|err| SystemLog::SubscriberInstallFailed {
                reason: err.to_string(),
            })
    }

    fn ensure_log_dir(base_dir: &Path) -> std::io::Result<std::path::PathBuf> {
        let log_dir = base_dir.join(LOG_DIRECTORY);
        fs::create_dir_all(&log_dir)?;
        Ok(log_dir)
    }
}
