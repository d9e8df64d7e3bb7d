use crate::interface::window::WindowHandle;
use crate::model::error::Error;
use crate::model::resolved_paths::ResolvedPaths;
use std::fmt;
use std::path::Path;

/// Deferred window setup, run by the runtime after it has created the window.
pub type WindowInitializer = Box<dyn FnOnce(&mut dyn WindowHandle) -> Result<(), Error>>;

pub const PIXEL_RATIO: f64 = 1.9;

pub const VM_ARGUMENTS: [&str; 2] = ["--dart-non-checked-mode", "--observatory-port=50300"];

/// Everything the embedding runtime needs, assembled once and consumed once.
pub struct StartupOptions {
    paths: ResolvedPaths,
    window_initializer: WindowInitializer,
    window_width: u32,
    window_height: u32,
    pixel_ratio: f64,
    vm_arguments: Vec<String>,
}

impl StartupOptions {
    pub fn new(
        paths: ResolvedPaths,
        window_initializer: WindowInitializer,
        window_width: u32,
        window_height: u32,
    ) -> Self {
        Self {
            paths,
            window_initializer,
            window_width,
            window_height,
            pixel_ratio: PIXEL_RATIO,
            vm_arguments: VM_ARGUMENTS.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    pub fn asset_path(&self) -> &Path {
        &self.paths.asset_path
    }

    pub fn icu_data_path(&self) -> &Path {
        &self.paths.icu_data_path
    }

    pub fn window_width(&self) -> u32 {
        self.window_width
    }

    pub fn window_height(&self) -> u32 {
        self.window_height
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    pub fn vm_arguments(&self) -> &[String] {
        &self.vm_arguments
    }

    /// Consumes the options; the initializer can only ever run once.
    pub fn into_window_initializer(self) -> WindowInitializer {
        self.window_initializer
    }
}

impl fmt::Debug for StartupOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartupOptions")
            .field("asset_path", &self.paths.asset_path)
            .field("icu_data_path", &self.paths.icu_data_path)
            .field("window_width", &self.window_width)
            .field("window_height", &self.window_height)
            .field("pixel_ratio", &self.pixel_ratio)
            .field("vm_arguments", &self.vm_arguments)
            .finish_non_exhaustive()
    }
}
