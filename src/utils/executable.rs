use crate::model::error::config::ConfigError;
use std::env;
use std::path::PathBuf;

/// Directory containing the running executable, independent of the working directory.
pub fn executable_dir() -> Result<PathBuf, ConfigError> {
    let executable = env::current_exe().map_err(ConfigError::ExecutablePathUnavailable)?;
    executable
        .parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| ConfigError::ExecutablePathUnavailable("executable path has no parent"))
}
