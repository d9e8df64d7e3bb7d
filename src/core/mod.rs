pub mod app_config;
pub mod bootstrap;
pub mod embedder_host;
pub mod icon_resolver;
pub mod path_materializer;
pub mod platform_paths;
pub mod system;
