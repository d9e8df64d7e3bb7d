use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
}

impl Platform {
    #[cfg(test)]
    pub fn separator(&self) -> char {
        match self {
            Self::MacOs | Self::Linux => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `path` is rooted under this platform's convention.
    ///
    /// Only the leading characters are inspected so the answer does not depend on the host OS.
    pub fn is_absolute(&self, path: &str) -> bool {
        match self {
            Self::MacOs | Self::Linux => path.starts_with('/'),
            Self::Windows => {
                let bytes = path.as_bytes();
                let leading_separator = matches!(bytes.first(), Some(b'\\' | b'/'));
                let drive_letter =
                    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':';
                leading_separator || drive_letter
            }
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Windows => "windows",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_roots() {
        assert!(Platform::Linux.is_absolute("/usr/share/icon.png"));
        assert!(Platform::MacOs.is_absolute("/Applications/icon.png"));
        assert!(!Platform::Linux.is_absolute("icon.png"));
        assert!(!Platform::Linux.is_absolute("./icon.png"));
        assert!(!Platform::Linux.is_absolute(""));
        assert!(!Platform::Linux.is_absolute("C:\\icon.png"));
    }

    #[test]
    fn windows_roots() {
        assert!(Platform::Windows.is_absolute("C:\\icons\\app.png"));
        assert!(Platform::Windows.is_absolute("d:/icons/app.png"));
        assert!(Platform::Windows.is_absolute("\\\\server\\share\\app.png"));
        assert!(Platform::Windows.is_absolute("/icons/app.png"));
        assert!(!Platform::Windows.is_absolute("icons\\app.png"));
        assert!(!Platform::Windows.is_absolute("1:\\app.png"));
        assert!(!Platform::Windows.is_absolute(""));
    }
}
