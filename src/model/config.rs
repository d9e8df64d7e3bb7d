use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

pub const CONFIG_FILENAME: &str = "config.json";

/// Launcher settings as read from `config.json`.
///
/// Every key is optional. Absent overrides stay `None` and absent integers stay `0`;
/// filling in defaults is left to the resolvers.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "PascalCase")]
pub struct Config {
    /// Installation root of the embedded runtime, used for the ICU data file.
    #[serde(alias = "flutterPath", deserialize_with = "empty_as_none")]
    pub flutter_path: Option<PathBuf>,
    /// Installation root of the hosted project, used for the asset bundle.
    #[serde(alias = "flutterProjectPath", deserialize_with = "empty_as_none")]
    pub flutter_project_path: Option<PathBuf>,
    #[serde(alias = "iconPath")]
    pub icon_path: String,
    #[serde(alias = "screenHeight")]
    pub screen_height: u32,
    #[serde(alias = "screenWidth")]
    pub screen_width: u32,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|path| !path.is_empty()).map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_config() {
        let json = r#"{
            "FlutterPath": "/opt/flutter",
            "FlutterProjectPath": "/home/user/app",
            "IconPath": "assets/icon.png",
            "ScreenHeight": 600,
            "ScreenWidth": 800
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.flutter_path, Some(PathBuf::from("/opt/flutter")));
        assert_eq!(config.flutter_project_path, Some(PathBuf::from("/home/user/app")));
        assert_eq!(config.icon_path, "assets/icon.png");
        assert_eq!(config.screen_height, 600);
        assert_eq!(config.screen_width, 800);
    }

    #[test]
    fn empty_and_null_overrides_are_unset() {
        let json = r#"{ "FlutterPath": "", "FlutterProjectPath": null }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.flutter_path, None);
        assert_eq!(config.flutter_project_path, None);
    }

    #[test]
    fn missing_fields_keep_zero_values() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config, Config::default());
        assert!(config.icon_path.is_empty());
        assert_eq!(config.screen_width, 0);
    }

    #[test]
    fn accepts_camel_case_keys() {
        let json = r#"{ "flutterPath": "/sdk", "screenWidth": 1024 }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.flutter_path, Some(PathBuf::from("/sdk")));
        assert_eq!(config.screen_width, 1024);
    }

    #[test]
    fn rejects_wrong_types() {
        let json = r#"{ "ScreenWidth": "wide" }"#;

        assert!(serde_json::from_str::<Config>(json).is_err());
    }
}
