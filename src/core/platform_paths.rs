use crate::model::error::platform::PlatformError;
use crate::model::platform::Platform;
use crate::model::platform_paths::PlatformPaths;

struct PlatformEntry {
    os: &'static str,
    paths: PlatformPaths,
}

static PLATFORM_TABLE: &[PlatformEntry] = &[
    PlatformEntry {
        os: "macos",
        paths: PlatformPaths {
            platform: Platform::MacOs,
            asset_fragment: "build/flutter_assets",
            icu_data_fragment: "bin/cache/artifacts/engine/darwin-x64/icudtl.dat",
        },
    },
    PlatformEntry {
        os: "linux",
        paths: PlatformPaths {
            platform: Platform::Linux,
            asset_fragment: "build/flutter_assets",
            icu_data_fragment: "bin/cache/artifacts/engine/linux-x64/icudtl.dat",
        },
    },
    PlatformEntry {
        os: "windows",
        paths: PlatformPaths {
            platform: Platform::Windows,
            asset_fragment: "build\\flutter_assets",
            icu_data_fragment: "bin\\cache\\artifacts\\engine\\windows-x64\\icudtl.dat",
        },
    },
];

pub struct PlatformPathResolver;

impl PlatformPathResolver {
    /// Looks up the resource fragments for an OS identifier as reported by `std::env::consts::OS`.
    pub fn resolve(os: &str) -> Result<PlatformPaths, PlatformError> {
        PLATFORM_TABLE
            .iter()
            .find(|entry| entry.os == os)
            .map(|entry| entry.paths)
            .ok_or_else(|| PlatformError::UnsupportedPlatform(os))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_platform_uses_its_separator() {
        for os in PLATFORM_TABLE.iter().map(|entry| entry.os) {
            let paths = PlatformPathResolver::resolve(os).unwrap();
            let separator = paths.platform.separator();
            let foreign = if separator == '/' { '\\' } else { '/' };

            assert_eq!(paths.platform.to_string(), os);
            for fragment in [paths.asset_fragment, paths.icu_data_fragment] {
                assert!(!fragment.is_empty());
                assert!(fragment.contains(separator), "{fragment} on {os}");
                assert!(!fragment.contains(foreign), "{fragment} on {os}");
                assert!(!paths.platform.is_absolute(fragment));
            }
        }
    }

    #[test]
    fn linux_fragments() {
        let paths = PlatformPathResolver::resolve("linux").unwrap();

        assert_eq!(paths.platform, Platform::Linux);
        assert_eq!(paths.asset_fragment, "build/flutter_assets");
        assert_eq!(
            paths.icu_data_fragment,
            "bin/cache/artifacts/engine/linux-x64/icudtl.dat"
        );
    }

    #[test]
    fn windows_fragments() {
        let paths = PlatformPathResolver::resolve("windows").unwrap();

        assert_eq!(paths.asset_fragment, "build\\flutter_assets");
        assert_eq!(
            paths.icu_data_fragment,
            "bin\\cache\\artifacts\\engine\\windows-x64\\icudtl.dat"
        );
    }

    #[test]
    fn unsupported_platforms_fail() {
        for os in ["freebsd", "android", "ios", "", "Linux"] {
            assert_eq!(
                PlatformPathResolver::resolve(os),
                Err(PlatformError::UnsupportedPlatform(os))
            );
        }
    }
}
