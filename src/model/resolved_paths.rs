use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub asset_path: PathBuf,
    pub icu_data_path: PathBuf,
}
