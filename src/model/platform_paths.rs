use crate::model::platform::Platform;

/// Relative locations of the runtime resources inside the installation roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformPaths {
    pub platform: Platform,
    pub asset_fragment: &'static str,
    pub icu_data_fragment: &'static str,
}
