// Entry point of the DomJudge Discord bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Implementations of core traits (DomJudge API, chart drawing, config file)
// - `discord/` = Discord-specific adapters (slash commands)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands in the configured guild

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use tracing_subscriber::EnvFilter;

use crate::core::contests::ContestService;
use crate::discord::Data;
use crate::infra::charts::PlottersChartRenderer;
use crate::infra::config::{load_config, DEFAULT_CONFIG_PATH};
use crate::infra::domjudge::DomJudgeClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let config_path =
        std::env::var("BOT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = Arc::new(load_config(&config_path).context("Failed to load bot configuration")?);

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================

    let judge_client = DomJudgeClient::new(
        &config.domjudge.api_url,
        &config.domjudge.username,
        &config.domjudge.password,
        Duration::from_secs(config.domjudge.timeout_secs),
    )
    .context("Failed to create DomJudge client")?;

    // The contest list is a startup snapshot; without it there is nothing to offer
    let contest_service = Arc::new(
        ContestService::new(judge_client)
            .await
            .context("Failed to load contests from DomJudge")?,
    );

    let chart_renderer = Arc::new(
        PlottersChartRenderer::load(
            &config.chart.font_path,
            config.chart.width,
            config.chart.height,
        )
        .context("Failed to set up chart rendering")?,
    );

    let data = Data {
        contests: Arc::clone(&contest_service),
        charts: Arc::clone(&chart_renderer),
        config: Arc::clone(&config),
    };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let guild_id = serenity::GuildId::new(config.discord.guild_id);
    let expected_application_id = config.discord.application_id;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: discord::commands::all(),
            on_error: |error| Box::pin(discord::commands::on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                if let Some(expected) = expected_application_id {
                    if ready.application.id.get() != expected {
                        tracing::warn!(
                            configured = expected,
                            actual = ready.application.id.get(),
                            "Bot token belongs to a different application than configured"
                        );
                    }
                }

                poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                    .await?;

                tracing::info!(
                    guild_id = guild_id.get(),
                    commands = framework.options().commands.len(),
                    "Commands registered, bot is ready"
                );
                Ok(data)
            })
        })
        .build();

    // Slash commands only; no privileged intents needed
    let intents = serenity::GatewayIntents::GUILDS;

    let mut client = serenity::ClientBuilder::new(&config.discord.token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;
    Ok(())
}
