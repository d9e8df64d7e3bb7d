use crate::core::app_config::AppConfig;
use crate::core::icon_resolver::IconResolver;
use crate::core::path_materializer::{PathMaterializer, ASSET_LEAF, ICU_DATA_LEAF};
use crate::core::platform_paths::PlatformPathResolver;
use crate::interface::runtime::EmbedderRuntime;
use crate::model::config::Config;
use crate::model::error::Error;
use crate::model::log::bootstrap::BootstrapLog;
use crate::model::resolved_paths::ResolvedPaths;
use crate::model::startup_options::StartupOptions;
use crate::platform::main_thread::MainThread;
use macros::log;
use std::path::Path;

pub struct Bootstrap;

impl Bootstrap {
    /// Loads the configuration, assembles the startup options and hands them to `runtime`.
    ///
    /// Stages run strictly in order; the runtime is never reached if an earlier stage fails.
    pub async fn launch<R: EmbedderRuntime>(
        executable_dir: &Path,
        os: &str,
        main_thread: &MainThread,
        runtime: &R,
    ) -> Result<(), Error> {
        let config = AppConfig::load(executable_dir).await?;
        let options = Self::assemble(&config, executable_dir, os)?;

        log!(BootstrapLog::RuntimeStarting, &options);
        runtime.run(main_thread, options)?;
        log!(BootstrapLog::RuntimeExited);
        Ok(())
    }

    pub fn assemble(config: &Config, executable_dir: &Path, os: &str) -> Result<StartupOptions, Error> {
        let platform_paths = PlatformPathResolver::resolve(os)?;
        log!(BootstrapLog::PlatformResolved {
            os: platform_paths.platform.to_string()
        });

        let paths = ResolvedPaths {
            asset_path: PathMaterializer::materialize(
                config.flutter_project_path.as_deref(),
                platform_paths.asset_fragment,
                ASSET_LEAF,
                executable_dir,
            ),
            icu_data_path: PathMaterializer::materialize(
                config.flutter_path.as_deref(),
                platform_paths.icu_data_fragment,
                ICU_DATA_LEAF,
                executable_dir,
            ),
        };
        log!(BootstrapLog::AssetPathResolved {
            path: paths.asset_path.clone()
        });
        log!(BootstrapLog::IcuDataPathResolved {
            path: paths.icu_data_path.clone()
        });

        let icon_path = IconResolver::resolve(platform_paths.platform, &config.icon_path, executable_dir);
        log!(BootstrapLog::IconPathResolved {
            path: icon_path.clone()
        });

        Ok(StartupOptions::new(
            paths,
            IconResolver::initializer(icon_path),
            config.screen_width,
            config.screen_height,
        ))
    }
}
