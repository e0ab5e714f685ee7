use crate::core::contests::Contest;
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

// Embed descriptions are capped at 4096 characters
const MAX_DESCRIPTION: usize = 4000;

/// List the DomJudge contests the bot knows about.
#[poise::command(slash_command)]
pub async fn contests(ctx: Context<'_>) -> Result<(), Error> {
    let contests = ctx.data().contests.contests();
    if contests.is_empty() {
        ctx.say("The judging server has no contests right now.").await?;
        return Ok(());
    }

    let embed = serenity::CreateEmbed::new()
        .title("🏆 DomJudge contests")
        .description(contest_listing(contests))
        .color(0x3498db)
        .footer(serenity::CreateEmbedFooter::new(
            "Use /chart with a short name to see per-problem results",
        ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn contest_line(contest: &Contest) -> String {
    let mut line = format!("`{}` — {}", contest.shortname, contest.display_name());
    if let Some(start) = contest.start_time {
        line.push_str(&format!(" (starts <t:{}:f>)", start.timestamp()));
    }
    line
}

/// One line per contest, stopping before the embed limit.
fn contest_listing(contests: &[Contest]) -> String {
    let mut out = String::new();
    for (shown, contest) in contests.iter().enumerate() {
        let line = contest_line(contest);
        if out.len() + line.len() + 1 > MAX_DESCRIPTION {
            out.push_str(&format!("…and {} more", contests.len() - shown));
            break;
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}
