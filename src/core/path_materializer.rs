use std::path::{Path, PathBuf};

pub const ASSET_LEAF: &str = "flutter_assets";
pub const ICU_DATA_LEAF: &str = "icudtl.dat";

pub struct PathMaterializer;

impl PathMaterializer {
    /// Places a runtime resource either under an installation root override or next to the
    /// executable.
    ///
    /// Without an override the installation is assumed to be flattened, so `leaf` is used
    /// instead of `fragment`. Nothing is checked on disk.
    pub fn materialize(
        override_base: Option<&Path>,
        fragment: &str,
        leaf: &str,
        executable_dir: &Path,
    ) -> PathBuf {
        match override_base {
            Some(base) => base.join(fragment),
            None => executable_dir.join(leaf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_ignores_fragment() {
        let exe_dir = Path::new("/opt/app");

        for fragment in ["build/flutter_assets", "elsewhere/entirely", ""] {
            assert_eq!(
                PathMaterializer::materialize(None, fragment, ASSET_LEAF, exe_dir),
                exe_dir.join(ASSET_LEAF)
            );
        }
    }

    #[test]
    fn override_joins_fragment() {
        let base = Path::new("/opt/flutter");
        let fragment = "bin/cache/artifacts/engine/linux-x64/icudtl.dat";

        let path = PathMaterializer::materialize(Some(base), fragment, ICU_DATA_LEAF, Path::new("/opt/app"));

        assert_eq!(path, base.join(fragment));
    }

    #[test]
    fn does_not_touch_the_filesystem() {
        let path = PathMaterializer::materialize(
            Some(Path::new("/definitely/not/here")),
            "build/flutter_assets",
            ASSET_LEAF,
            Path::new("/nowhere"),
        );

        assert_eq!(path, PathBuf::from("/definitely/not/here/build/flutter_assets"));
    }
}
