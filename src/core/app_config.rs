use crate::model::config::{Config, CONFIG_FILENAME};
use crate::model::error::config::ConfigError;
use crate::model::log::bootstrap::BootstrapLog;
use macros::log;
use std::ops::Deref;
use std::path::Path;
use tokio::fs;

pub struct AppConfig {
    config: Config,
}

impl AppConfig {
    /// Reads `config.json` from the executable directory. The working directory is never consulted.
    pub async fn load(executable_dir: &Path) -> Result<Self, ConfigError> {
        let path = executable_dir.join(CONFIG_FILENAME);
        let config = Self::load_config_file(&path).await?;
        log!(BootstrapLog::ConfigLoaded { path });
        Ok(Self { config })
    }

    async fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
        let json_bytes = fs::read(path)
            .await
            .map_err(|err| ConfigError::ConfigNotFound(path, err))?;
        let config = serde_json::from_slice::<Config>(&json_bytes)
            .map_err(|err| ConfigError::ConfigMalformed(path, err))?;
        Ok(config)
    }
}

impl Deref for AppConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}
