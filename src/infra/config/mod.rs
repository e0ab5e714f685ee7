#[path = "json_config.rs"]
pub mod json_config;

pub use json_config::{load_config, DEFAULT_CONFIG_PATH};
