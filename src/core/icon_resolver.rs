use crate::interface::window::WindowHandle;
use crate::model::error::icon::IconError;
use crate::model::error::Error;
use crate::model::icon::IconImage;
use crate::model::log::bootstrap::BootstrapLog;
use crate::model::platform::Platform;
use crate::model::startup_options::WindowInitializer;
use macros::log;
use std::fs;
use std::path::{Path, PathBuf};

pub struct IconResolver;

impl IconResolver {
    /// Anchors a relative icon path to the executable directory; absolute paths pass through.
    pub fn resolve(platform: Platform, icon_path: &str, executable_dir: &Path) -> PathBuf {
        if platform.is_absolute(icon_path) {
            PathBuf::from(icon_path)
        } else {
            executable_dir.join(icon_path)
        }
    }

    pub fn load(path: &Path) -> Result<IconImage, IconError> {
        let bytes = fs::read(path).map_err(|err| IconError::IconNotFound(path, err))?;

        let image = image::load_from_memory(&bytes)
            .map_err(|err| IconError::IconDecodeError(path, err))?
            .to_rgba8();

        let (width, height) = image.dimensions();
        let rgba = image.into_raw();

        Ok(IconImage {
            rgba,
            width,
            height,
        })
    }

    /// Defers reading the icon until the runtime hands over its freshly created window.
    pub fn initializer(path: PathBuf) -> WindowInitializer {
        Box::new(move |window: &mut dyn WindowHandle| -> Result<(), Error> {
            let icon = Self::load(&path)?;
            window.set_icon(icon);
            log!(BootstrapLog::IconApplied);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingWindow {
        icon: Option<IconImage>,
    }

    impl WindowHandle for RecordingWindow {
        fn set_icon(&mut self, icon: IconImage) {
            self.icon = Some(icon);
        }
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        image::RgbaImage::from_pixel(width, height, image::Rgba([200, 30, 30, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn absolute_posix_path_is_kept() {
        let path = IconResolver::resolve(Platform::Linux, "/usr/share/icons/app.png", Path::new("/opt/app"));

        assert_eq!(path, PathBuf::from("/usr/share/icons/app.png"));
    }

    #[test]
    fn relative_path_is_anchored_to_executable() {
        let exe_dir = Path::new("/opt/app");

        let path = IconResolver::resolve(Platform::Linux, "icon.png", exe_dir);

        assert_eq!(path, exe_dir.join("icon.png"));
    }

    #[test]
    fn loads_png_as_rgba() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.png");
        write_png(&path, 3, 2);

        let icon = IconResolver::load(&path).unwrap();

        assert_eq!((icon.width, icon.height), (3, 2));
        assert_eq!(icon.rgba.len(), 3 * 2 * 4);
        assert_eq!(&icon.rgba[..4], &[200, 30, 30, 255]);
    }

    #[test]
    fn missing_icon_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.png");

        let result = IconResolver::load(&path);

        assert!(matches!(result, Err(IconError::IconNotFound { path: p, .. }) if p == path));
    }

    #[test]
    fn garbage_icon_fails_to_decode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let result = IconResolver::load(&path);

        assert!(matches!(result, Err(IconError::IconDecodeError { .. })));
    }

    #[test]
    fn initializer_applies_icon_only_when_invoked() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.png");

        // The file does not exist yet when the initializer is built.
        let initializer = IconResolver::initializer(path.clone());
        write_png(&path, 4, 4);

        let mut window = RecordingWindow::default();
        initializer(&mut window).unwrap();

        let icon = window.icon.unwrap();
        assert_eq!((icon.width, icon.height), (4, 4));
    }

    #[test]
    fn initializer_reports_icon_errors() {
        let dir = TempDir::new().unwrap();
        let initializer = IconResolver::initializer(dir.path().join("missing.png"));

        let mut window = RecordingWindow::default();
        let result = initializer(&mut window);

        assert!(matches!(result, Err(Error::Icon(IconError::IconNotFound { .. }))));
        assert!(window.icon.is_none());
    }
}
