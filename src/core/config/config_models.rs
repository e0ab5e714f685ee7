use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Link buttons per action row in `/links`.
pub const LINKS_PER_ROW: usize = 3;
// Discord allows at most five action rows per message
const MAX_LINK_ROWS: usize = 5;
pub const MAX_LINKS: usize = LINKS_PER_ROW * MAX_LINK_ROWS;

/// Static bot configuration, loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    pub domjudge: DomJudgeConfig,
    pub discord: DiscordConfig,
    #[serde(default)]
    pub links: Vec<LinkResource>,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default = "default_readme_path")]
    pub readme_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomJudgeConfig {
    /// Base URL of the REST API, e.g. `https://judge.example.org/api/v4`.
    pub api_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(default)]
    pub token: String,
    pub guild_id: u64,
    #[serde(default)]
    pub application_id: Option<u64>,
}

/// An external resource shown as a link button by `/links`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkResource {
    pub label: String,
    #[serde(default)]
    pub emoji: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_font_path")]
    pub font_path: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            font_path: default_font_path(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_readme_path() -> String {
    "README.md".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_font_path() -> String {
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".to_string()
}

fn default_width() -> u32 {
    1500
}

fn default_height() -> u32 {
    800
}

impl BotConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discord.token.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "discord.token is empty (set it in the file or DISCORD_TOKEN)".to_string(),
            ));
        }

        if self.discord.guild_id == 0 {
            return Err(ConfigError::Invalid("discord.guild_id must be set".to_string()));
        }

        if self.domjudge.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid("domjudge.api_url is empty".to_string()));
        }
        Url::parse(&self.domjudge.api_url).map_err(|e| {
            ConfigError::Invalid(format!("domjudge.api_url is not a URL: {}", e))
        })?;

        if self.links.len() > MAX_LINKS {
            return Err(ConfigError::Invalid(format!(
                "at most {} links fit in one message, got {}",
                MAX_LINKS,
                self.links.len()
            )));
        }
        for link in &self.links {
            Url::parse(&link.url).map_err(|e| {
                ConfigError::Invalid(format!("link `{}` has an invalid URL: {}", link.label, e))
            })?;
        }

        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(ConfigError::Invalid(
                "chart width and height must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
