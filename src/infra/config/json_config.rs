use std::path::Path;

use crate::core::config::{BotConfig, ConfigError};

pub const DEFAULT_CONFIG_PATH: &str = "environment.json";

/// Read the config file, apply environment overrides and validate.
///
/// `DISCORD_TOKEN` and `DOMJUDGE_PASSWORD` take precedence over the file so
/// secrets can live in `.env` instead.
pub fn load_config(path: impl AsRef<Path>) -> Result<BotConfig, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut config: BotConfig = serde_json::from_str(&raw)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config.validate()?;

    tracing::info!(
        path = %path.display(),
        api_url = %config.domjudge.api_url,
        guild_id = config.discord.guild_id,
        links = config.links.len(),
        "Loaded bot configuration"
    );
    Ok(config)
}

fn apply_env_overrides(config: &mut BotConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(token) = lookup("DISCORD_TOKEN").filter(|v| !v.is_empty()) {
        config.discord.token = token;
    }
    if let Some(password) = lookup("DOMJUDGE_PASSWORD").filter(|v| !v.is_empty()) {
        config.domjudge.password = password;
    }
}
