use std::sync::Arc;

use crate::core::charts::{BarChart, ChartRenderer};
use crate::core::contests::{ContestError, Verdict};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum VerdictChoice {
    #[name = "Accepted"]
    Accepted,
    #[name = "Wrong answer"]
    WrongAnswer,
}

impl From<VerdictChoice> for Verdict {
    fn from(choice: VerdictChoice) -> Self {
        match choice {
            VerdictChoice::Accepted => Verdict::Accepted,
            VerdictChoice::WrongAnswer => Verdict::WrongAnswer,
        }
    }
}

/// Chart accepted (or wrong-answer) submissions per problem for a DomJudge contest.
#[poise::command(slash_command, guild_only)]
pub async fn chart(
    ctx: Context<'_>,
    #[description = "Contest short name"]
    #[autocomplete = "autocomplete_contests"]
    contest: String,
    #[description = "Verdict to chart (defaults to accepted)"] verdict: Option<VerdictChoice>,
) -> Result<(), Error> {
    // Three round-trips to the judge can take longer than Discord's 3s window
    ctx.defer().await?;

    let verdict = verdict.map(Verdict::from).unwrap_or(Verdict::Accepted);
    let stats = match ctx.data().contests.contest_stats(&contest).await {
        Ok(stats) => stats,
        Err(ContestError::UnknownContest(name)) => {
            ctx.say(format!(
                "❌ There is no contest called `{}`. Use `/contests` to see the available ones.",
                name
            ))
            .await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if stats.problems.is_empty() {
        ctx.say(format!(
            "📭 **{}** has no problems yet, so there is nothing to chart.",
            stats.contest.display_name()
        ))
        .await?;
        return Ok(());
    }

    let chart = BarChart::from_stats(&stats, verdict);
    let renderer = Arc::clone(&ctx.data().charts);
    let png = tokio::task::spawn_blocking(move || renderer.render(&chart)).await??;

    tracing::info!(
        contest_id = %stats.contest.id,
        verdict = ?verdict,
        "Sent contest chart"
    );

    ctx.send(
        poise::CreateReply::default().attachment(serenity::CreateAttachment::bytes(png, "chart.png")),
    )
    .await?;

    Ok(())
}

/// Autocomplete contest short names from the list loaded at startup.
async fn autocomplete_contests<'a>(
    ctx: Context<'_>,
    partial: &'a str,
) -> impl Iterator<Item = String> + 'a {
    ctx.data()
        .contests
        .search(partial)
        .into_iter()
        .map(|c| c.shortname.clone())
        // Discord shows at most 25 suggestions
        .take(25)
        .collect::<Vec<_>>()
        .into_iter()
}
