pub mod config_models;

pub use config_models::{BotConfig, ConfigError, LinkResource, LINKS_PER_ROW};
