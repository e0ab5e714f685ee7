// Discord commands module.
// Each command gets its own file; this file wires them together.
//
// The commands are THIN: pull primitives out of the interaction, call the
// core service, format the reply.

pub mod chart;

pub mod contests;

pub mod info;

pub mod links;

pub mod ping;

use std::sync::Arc;

use crate::core::config::BotConfig;
use crate::core::contests::ContestService;
use crate::infra::charts::PlottersChartRenderer;
use crate::infra::domjudge::DomJudgeClient;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Shared, read-only state handed to every command.
pub struct Data {
    pub contests: Arc<ContestService<DomJudgeClient>>,
    pub charts: Arc<PlottersChartRenderer>,
    pub config: Arc<BotConfig>,
}

/// Every slash command the bot registers.
pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        ping::ping(),
        chart::chart(),
        contests::contests(),
        links::links(),
        info::info(),
    ]
}

/// Not ephemeral: a follow-up to a public `defer()` is always public.
fn error_reply(error: &(dyn std::error::Error + Send + Sync)) -> poise::CreateReply {
    poise::CreateReply::default().content(format!("⚠️ Something went wrong: {}", error))
}

/// Report command failures to the user instead of letting them vanish.
pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!(command = %ctx.command().name, "Command failed: {}", error);
            if let Err(e) = ctx.send(error_reply(&*error)).await {
                tracing::error!("Failed to report command error: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling framework error: {}", e);
            }
        }
    }
}
