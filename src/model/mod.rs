pub mod config;
pub mod error;
pub mod icon;
pub mod log;
pub mod platform;
pub mod platform_paths;
pub mod resolved_paths;
pub mod startup_options;
